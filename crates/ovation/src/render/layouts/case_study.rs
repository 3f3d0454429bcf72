use eframe::egui::{self, Color32, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::render::text;
use crate::state::{CasePhase, CaseStudy};
use crate::theme::Theme;

/// Case-study layout: scenario intro, a choice between responses, then the
/// chosen response's outcome with a retry link. The intro is a one-way gate;
/// retrying returns to the options.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    case: &mut CaseStudy,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let options = slide.case_options();
    let panel_width = rect.width() * 0.52;
    let center_x = rect.center().x;

    match case.phase() {
        CasePhase::Intro => {
            let panel_rect = egui::Rect::from_min_size(
                Pos2::new(center_x - panel_width / 2.0, top + 20.0 * scale),
                egui::vec2(panel_width, 320.0 * scale),
            );
            ui.painter().rect_filled(
                panel_rect,
                26.0 * scale,
                Theme::with_opacity(theme.panel, opacity * 0.94),
            );
            ui.painter().rect_stroke(
                panel_rect,
                26.0 * scale,
                egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, opacity)),
                StrokeKind::Outside,
            );

            let mut y = panel_rect.top() + 34.0 * scale;
            y += text::draw_centered_line(
                ui,
                "\u{263B}",
                center_x,
                y,
                FontId::proportional(56.0 * scale),
                Theme::with_opacity(accent, opacity * 0.9),
            );
            y += 20.0 * scale;
            if let Some(scenario) = slide.content.iter().find(|i| i.options.is_none()) {
                y += text::draw_centered(
                    ui,
                    &scenario.text,
                    center_x,
                    y,
                    FontId::proportional(theme.body_size * 0.85 * scale),
                    Theme::with_opacity(theme.foreground, opacity),
                    panel_width - 90.0 * scale,
                );
            }
            y += 34.0 * scale;

            if pill_button(ui, theme, center_x, y, "Start the case", accent, opacity, scale) {
                case.begin();
            }
        }
        CasePhase::Options => {
            let mut y = top + 16.0 * scale;
            y += text::draw_centered_line(
                ui,
                "What would you do first?",
                center_x,
                y,
                FontId::proportional(theme.body_size * 0.9 * scale),
                Theme::with_opacity(theme.heading_color, opacity),
            );
            y += 30.0 * scale;

            let option_height = 86.0 * scale;
            for (i, option) in options.iter().enumerate() {
                let option_rect = egui::Rect::from_min_size(
                    Pos2::new(center_x - panel_width / 2.0, y),
                    egui::vec2(panel_width, option_height),
                );
                let response =
                    ui.interact(option_rect, ui.id().with(("case-option", i)), Sense::click());
                let border = if response.hovered() {
                    Theme::with_opacity(accent, opacity * 0.9)
                } else {
                    Theme::with_opacity(theme.panel_border, opacity)
                };
                ui.painter().rect_filled(
                    option_rect,
                    14.0 * scale,
                    Theme::with_opacity(theme.panel, opacity * 0.92),
                );
                ui.painter().rect_stroke(
                    option_rect,
                    14.0 * scale,
                    egui::Stroke::new(1.5 * scale, border),
                    StrokeKind::Outside,
                );
                text::draw_centered(
                    ui,
                    &option.text,
                    center_x,
                    option_rect.top() + 22.0 * scale,
                    FontId::proportional(theme.body_size * 0.75 * scale),
                    Theme::with_opacity(theme.foreground, opacity),
                    panel_width - 60.0 * scale,
                );
                if response.clicked() {
                    case.choose(i);
                }
                y += option_height + 18.0 * scale;
            }
        }
        CasePhase::Result => {
            let Some(option) = case.chosen().and_then(|i| options.get(i)) else {
                return;
            };
            let (tint, glyph, headline) = if option.is_correct {
                (theme.positive, "\u{2713}", "Good call")
            } else {
                (theme.negative, "\u{2717}", "Think again")
            };

            let panel_rect = egui::Rect::from_min_size(
                Pos2::new(center_x - panel_width / 2.0, top + 20.0 * scale),
                egui::vec2(panel_width, 360.0 * scale),
            );
            ui.painter().rect_filled(
                panel_rect,
                26.0 * scale,
                Theme::with_opacity(blend(theme.panel, tint), opacity * 0.94),
            );
            ui.painter().rect_stroke(
                panel_rect,
                26.0 * scale,
                egui::Stroke::new(1.5 * scale, Theme::with_opacity(tint, opacity * 0.6)),
                StrokeKind::Outside,
            );

            let mut y = panel_rect.top() + 30.0 * scale;
            y += text::draw_centered_line(
                ui,
                glyph,
                center_x,
                y,
                FontId::proportional(64.0 * scale),
                Theme::with_opacity(tint, opacity),
            );
            y += 18.0 * scale;
            y += text::draw_centered_line(
                ui,
                headline,
                center_x,
                y,
                FontId::proportional(theme.body_size * scale),
                Theme::with_opacity(theme.heading_color, opacity),
            );
            y += 20.0 * scale;
            y += text::draw_centered(
                ui,
                &option.result,
                center_x,
                y,
                FontId::proportional(theme.body_size * 0.75 * scale),
                Theme::with_opacity(theme.foreground, opacity),
                panel_width - 90.0 * scale,
            );
            y += 30.0 * scale;

            // Retry is an understated text link
            let label = "try another response";
            let galley = ui.painter().layout_no_wrap(
                label.to_string(),
                FontId::proportional(theme.small_size * scale),
                Theme::with_opacity(theme.muted, opacity),
            );
            let link_rect = egui::Rect::from_center_size(
                Pos2::new(center_x, y + galley.rect.height() / 2.0),
                galley.rect.size() + egui::vec2(12.0 * scale, 8.0 * scale),
            );
            let response = ui.interact(link_rect, ui.id().with("case-retry"), Sense::click());
            let color = if response.hovered() {
                Theme::with_opacity(theme.heading_color, opacity)
            } else {
                Theme::with_opacity(theme.muted, opacity)
            };
            ui.painter().galley(
                Pos2::new(center_x - galley.rect.width() / 2.0, y),
                galley,
                color,
            );
            if response.clicked() {
                case.retry();
            }
        }
    }
}

fn pill_button(
    ui: &egui::Ui,
    theme: &Theme,
    center_x: f32,
    y: f32,
    label: &str,
    fill: Color32,
    opacity: f32,
    scale: f32,
) -> bool {
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        FontId::proportional(theme.small_size * 1.05 * scale),
        theme.background,
    );
    let rect = egui::Rect::from_center_size(
        Pos2::new(center_x, y + 28.0 * scale),
        galley.rect.size() + egui::vec2(72.0 * scale, 30.0 * scale),
    );
    let response = ui.interact(rect, ui.id().with(("pill", label)), Sense::click());
    let alpha = if response.hovered() { 1.0 } else { 0.85 };
    ui.painter().rect_filled(
        rect,
        rect.height() / 2.0,
        Theme::with_opacity(fill, opacity * alpha),
    );
    ui.painter().galley(
        Pos2::new(
            rect.center().x - galley.rect.width() / 2.0,
            rect.center().y - galley.rect.height() / 2.0,
        ),
        galley,
        theme.background,
    );
    response.clicked()
}

/// Mix a hint of `tint` into `base` for the result panel background.
fn blend(base: Color32, tint: Color32) -> Color32 {
    Color32::from_rgb(
        ((base.r() as u16 * 3 + tint.r() as u16) / 4) as u8,
        ((base.g() as u16 * 3 + tint.g() as u16) / 4) as u8,
        ((base.b() as u16 * 3 + tint.b() as u16) / 4) as u8,
    )
}
