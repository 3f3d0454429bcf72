use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::render::transition::ease_out;
use crate::theme::Theme;

const COLUMNS: usize = 3;

/// Grid-cards layout: centered header, then cards in rows of three with an
/// icon badge, title and description each.
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

    if slide.content.is_empty() {
        return;
    }

    let padding = 120.0 * scale;
    let gap = 28.0 * scale;
    let cols = COLUMNS.min(slide.content.len());
    let grid_width = rect.width() - padding * 2.0;
    let card_width = (grid_width - gap * (cols as f32 - 1.0)) / cols as f32;
    let rows = slide.content.len().div_ceil(cols);
    let card_height =
        ((rect.bottom() - 140.0 * scale - top) - gap * (rows as f32 - 1.0)) / rows as f32;
    let card_height = card_height.clamp(160.0 * scale, 320.0 * scale);

    for (i, item) in slide.content.iter().enumerate() {
        let col = i % cols;
        let row = i / cols;
        let card_rect = egui::Rect::from_min_size(
            Pos2::new(
                rect.left() + padding + col as f32 * (card_width + gap),
                top + row as f32 * (card_height + gap),
            ),
            egui::vec2(card_width, card_height),
        );

        let reveal = ease_out(((age - 0.2 - i as f32 * 0.12) / 0.4).clamp(0.0, 1.0));
        let alpha = opacity * reveal;
        if alpha <= 0.0 {
            continue;
        }

        let hovered = ui
            .interact(card_rect, ui.id().with(("card", i)), Sense::hover())
            .hovered();

        ui.painter().rect_filled(
            card_rect,
            18.0 * scale,
            Theme::with_opacity(theme.panel, alpha * 0.95),
        );
        let border = if hovered {
            Theme::with_opacity(accent, alpha * 0.8)
        } else {
            Theme::with_opacity(theme.panel_border, alpha)
        };
        ui.painter().rect_stroke(
            card_rect,
            18.0 * scale,
            egui::Stroke::new(1.5 * scale, border),
            StrokeKind::Outside,
        );

        let badge_radius = 30.0 * scale;
        let mut y = card_rect.top() + 28.0 * scale;
        text::draw_icon_badge(
            ui,
            icons::glyph(item.icon.as_deref()),
            Pos2::new(card_rect.center().x, y + badge_radius),
            badge_radius,
            Theme::with_opacity(accent, alpha),
            Theme::with_opacity(theme.background, alpha),
            scale,
        );
        y += badge_radius * 2.0 + 20.0 * scale;

        let inner_width = card_width - 40.0 * scale;
        y += text::draw_centered(
            ui,
            &item.text,
            card_rect.center().x,
            y,
            FontId::proportional(theme.body_size * 0.8 * scale),
            Theme::with_opacity(theme.heading_color, alpha),
            inner_width,
        );
        if let Some(subtext) = &item.subtext {
            y += 10.0 * scale;
            text::draw_centered(
                ui,
                subtext,
                card_rect.center().x,
                y,
                FontId::proportional(theme.small_size * 0.9 * scale),
                Theme::with_opacity(theme.muted, alpha),
                inner_width,
            );
        }
    }
}
