use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::render::transition::ease_out;
use crate::theme::Theme;

/// Process-steps layout: a horizontal chain of numbered cards joined by
/// arrows. Step numbering follows content order.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    age: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let count = slide.content.len();
    if count == 0 {
        return;
    }

    let padding = 90.0 * scale;
    let arrow_gap = 48.0 * scale;
    let total_width = rect.width() - padding * 2.0;
    let card_width = (total_width - arrow_gap * (count as f32 - 1.0)) / count as f32;
    let card_height = (rect.bottom() - 150.0 * scale - top).min(360.0 * scale);
    let card_top = top + 20.0 * scale;

    for (i, item) in slide.content.iter().enumerate() {
        let reveal = ease_out(((age - 0.2 - i as f32 * 0.18) / 0.4).clamp(0.0, 1.0));
        let alpha = opacity * reveal;

        let card_rect = egui::Rect::from_min_size(
            Pos2::new(
                rect.left() + padding + i as f32 * (card_width + arrow_gap),
                card_top,
            ),
            egui::vec2(card_width, card_height),
        );

        if alpha > 0.0 {
            ui.painter().rect_filled(
                card_rect,
                18.0 * scale,
                Theme::with_opacity(theme.panel, alpha * 0.95),
            );
            ui.painter().rect_stroke(
                card_rect,
                18.0 * scale,
                egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, alpha)),
                StrokeKind::Outside,
            );

            // Step number disc
            let disc = Pos2::new(card_rect.center().x, card_rect.top() + 44.0 * scale);
            ui.painter().circle_filled(
                disc,
                22.0 * scale,
                Theme::with_opacity(theme.background, alpha),
            );
            ui.painter().circle_stroke(
                disc,
                22.0 * scale,
                egui::Stroke::new(1.5 * scale, Theme::with_opacity(accent, alpha * 0.7)),
            );
            text::draw_centered_line(
                ui,
                &format!("{}", i + 1),
                disc.x,
                disc.y - 13.0 * scale,
                FontId::proportional(theme.small_size * scale),
                Theme::with_opacity(accent, alpha),
            );

            let mut y = card_rect.top() + 82.0 * scale;
            y += text::draw_centered_line(
                ui,
                icons::glyph(item.icon.as_deref()),
                card_rect.center().x,
                y,
                FontId::proportional(32.0 * scale),
                Theme::with_opacity(accent, alpha * 0.85),
            );
            y += 14.0 * scale;

            let inner_width = card_width - 28.0 * scale;
            y += text::draw_centered(
                ui,
                &item.text,
                card_rect.center().x,
                y,
                FontId::proportional(theme.body_size * 0.7 * scale),
                Theme::with_opacity(theme.heading_color, alpha),
                inner_width,
            );
            if let Some(subtext) = &item.subtext {
                y += 8.0 * scale;
                text::draw_centered(
                    ui,
                    subtext,
                    card_rect.center().x,
                    y,
                    FontId::proportional(theme.small_size * 0.85 * scale),
                    Theme::with_opacity(theme.muted, alpha),
                    inner_width,
                );
            }
        }

        // Connector arrow toward the next step
        if i + 1 < count {
            let arrow_alpha = opacity * ease_out(((age - 0.4 - i as f32 * 0.18) / 0.4).clamp(0.0, 1.0));
            if arrow_alpha > 0.0 {
                text::draw_centered_line(
                    ui,
                    "\u{2192}",
                    card_rect.right() + arrow_gap / 2.0,
                    card_rect.center().y - 14.0 * scale,
                    FontId::proportional(30.0 * scale),
                    Theme::with_opacity(theme.muted, arrow_alpha),
                );
            }
        }
    }
}
