use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::render::text;
use crate::state::{Quiz, QuizPhase};
use crate::theme::Theme;

/// Interactive-quiz layout: one true/false question at a time. Answering
/// locks the choice and shows the explanation; the last question has no
/// "next" control.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    quiz: &mut Quiz,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let Some(question) = slide.content.get(quiz.index()) else {
        return;
    };

    let panel_width = rect.width() * 0.56;
    let panel_rect = egui::Rect::from_min_size(
        Pos2::new(rect.center().x - panel_width / 2.0, top + 10.0 * scale),
        egui::vec2(panel_width, rect.bottom() - 170.0 * scale - top),
    );
    ui.painter().rect_filled(
        panel_rect,
        24.0 * scale,
        Theme::with_opacity(theme.panel, opacity * 0.94),
    );
    ui.painter().rect_stroke(
        panel_rect,
        24.0 * scale,
        egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, opacity)),
        StrokeKind::Outside,
    );

    // Question counter, top corner
    let counter = format!("Question {} / {}", quiz.index() + 1, quiz.total());
    let counter_galley = ui.painter().layout_no_wrap(
        counter,
        FontId::monospace(theme.small_size * 0.8 * scale),
        Theme::with_opacity(theme.muted, opacity),
    );
    ui.painter().galley(
        Pos2::new(
            panel_rect.right() - counter_galley.rect.width() - 24.0 * scale,
            panel_rect.top() + 20.0 * scale,
        ),
        counter_galley,
        Theme::with_opacity(theme.muted, opacity),
    );

    let inner_width = panel_width - 100.0 * scale;
    let mut y = panel_rect.top() + 70.0 * scale;
    y += text::draw_centered(
        ui,
        &question.text,
        panel_rect.center().x,
        y,
        FontId::proportional(theme.body_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
        inner_width,
    );
    y += 40.0 * scale;

    match quiz.phase() {
        QuizPhase::Answering => {
            let button_width = (inner_width - 30.0 * scale) / 2.0;
            let button_height = 96.0 * scale;
            let left_rect = egui::Rect::from_min_size(
                Pos2::new(panel_rect.center().x - button_width - 15.0 * scale, y),
                egui::vec2(button_width, button_height),
            );
            let right_rect = egui::Rect::from_min_size(
                Pos2::new(panel_rect.center().x + 15.0 * scale, y),
                egui::vec2(button_width, button_height),
            );

            if answer_button(ui, theme, left_rect, "\u{2713}", "True", theme.positive, opacity, scale)
            {
                quiz.answer(true);
            }
            if answer_button(ui, theme, right_rect, "\u{2717}", "False", theme.negative, opacity, scale)
            {
                quiz.answer(false);
            }
        }
        QuizPhase::Explained => {
            let correct = quiz
                .answered_correctly(question.is_correct.unwrap_or(false))
                .unwrap_or(false);
            let (verdict, verdict_color) = if correct {
                ("Correct!", theme.positive)
            } else {
                ("Not quite", theme.negative)
            };

            // Verdict pill
            let pill_galley = ui.painter().layout_no_wrap(
                verdict.to_string(),
                FontId::proportional(theme.body_size * 0.8 * scale),
                verdict_color,
            );
            let pill_rect = egui::Rect::from_center_size(
                Pos2::new(panel_rect.center().x, y + 24.0 * scale),
                pill_galley.rect.size() + egui::vec2(48.0 * scale, 20.0 * scale),
            );
            ui.painter().rect_filled(
                pill_rect,
                pill_rect.height() / 2.0,
                Theme::with_opacity(verdict_color, opacity * 0.15),
            );
            ui.painter().rect_stroke(
                pill_rect,
                pill_rect.height() / 2.0,
                egui::Stroke::new(1.0, Theme::with_opacity(verdict_color, opacity * 0.6)),
                StrokeKind::Outside,
            );
            ui.painter().galley(
                Pos2::new(
                    pill_rect.center().x - pill_galley.rect.width() / 2.0,
                    pill_rect.center().y - pill_galley.rect.height() / 2.0,
                ),
                pill_galley,
                verdict_color,
            );
            y = pill_rect.bottom() + 26.0 * scale;

            if let Some(explanation) = &question.explanation {
                y += text::draw_centered(
                    ui,
                    explanation,
                    panel_rect.center().x,
                    y,
                    FontId::proportional(theme.body_size * 0.75 * scale),
                    Theme::with_opacity(theme.foreground, opacity),
                    inner_width,
                );
            }

            if !quiz.is_last() {
                y += 36.0 * scale;
                let label = "Next question";
                let label_galley = ui.painter().layout_no_wrap(
                    label.to_string(),
                    FontId::proportional(theme.small_size * scale),
                    theme.background,
                );
                let button_rect = egui::Rect::from_center_size(
                    Pos2::new(panel_rect.center().x, y + 26.0 * scale),
                    label_galley.rect.size() + egui::vec2(60.0 * scale, 28.0 * scale),
                );
                let response =
                    ui.interact(button_rect, ui.id().with("quiz-next"), Sense::click());
                let fill = if response.hovered() {
                    Theme::with_opacity(accent, opacity)
                } else {
                    Theme::with_opacity(accent, opacity * 0.85)
                };
                ui.painter()
                    .rect_filled(button_rect, button_rect.height() / 2.0, fill);
                ui.painter().galley(
                    Pos2::new(
                        button_rect.center().x - label_galley.rect.width() / 2.0,
                        button_rect.center().y - label_galley.rect.height() / 2.0,
                    ),
                    label_galley,
                    theme.background,
                );
                if response.clicked() {
                    quiz.advance();
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn answer_button(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    glyph: &str,
    label: &str,
    color: egui::Color32,
    opacity: f32,
    scale: f32,
) -> bool {
    let response = ui.interact(rect, ui.id().with(("quiz-answer", label)), Sense::click());
    let fill = if response.hovered() {
        Theme::with_opacity(color, opacity * 0.2)
    } else {
        Theme::with_opacity(theme.background, opacity * 0.6)
    };
    ui.painter().rect_filled(rect, 14.0 * scale, fill);
    ui.painter().rect_stroke(
        rect,
        14.0 * scale,
        egui::Stroke::new(1.5 * scale, Theme::with_opacity(color, opacity * 0.7)),
        StrokeKind::Outside,
    );

    let mut y = rect.top() + 16.0 * scale;
    y += text::draw_centered_line(
        ui,
        glyph,
        rect.center().x,
        y,
        FontId::proportional(28.0 * scale),
        Theme::with_opacity(color, opacity),
    );
    y += 6.0 * scale;
    text::draw_centered_line(
        ui,
        label,
        rect.center().x,
        y,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );

    response.clicked()
}
