use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::render::text;
use crate::render::transition::ease_out;
use crate::state::Iceberg;
use crate::theme::Theme;

/// Item id of the part shown above the waterline.
const VISIBLE_ID: &str = "visible";

/// Iceberg-reveal layout: the `visible` item floats above the waterline,
/// everything else sits in the deep and stays suppressed until the water is
/// clicked. Hidden items are dimmed out, never removed.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    berg: &mut Iceberg,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    anim: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let waterline = top + (rect.bottom() - top) * 0.22;
    let water_rect = egui::Rect::from_min_max(
        Pos2::new(rect.left(), waterline),
        Pos2::new(rect.right(), rect.bottom() - 130.0 * scale),
    );

    // Deep water
    ui.painter().rect_filled(
        water_rect,
        0.0,
        Theme::with_opacity(egui::Color32::from_rgb(0x0C, 0x24, 0x4A), opacity * 0.75),
    );
    // Waterline shimmer
    ui.painter().rect_filled(
        egui::Rect::from_min_max(
            Pos2::new(rect.left(), waterline - 2.0 * scale),
            Pos2::new(rect.right(), waterline + 2.0 * scale),
        ),
        0.0,
        Theme::with_opacity(egui::Color32::from_rgb(0x60, 0xA5, 0xFA), opacity * 0.5),
    );

    // Clicking the water toggles the reveal
    let response = ui.interact(water_rect, ui.id().with("iceberg-water"), Sense::click());
    if response.clicked() {
        berg.toggle();
    }

    // Visible tip above the waterline
    if let Some(visible) = slide.content.iter().find(|i| i.id == VISIBLE_ID) {
        let tip_rect = egui::Rect::from_center_size(
            Pos2::new(rect.center().x, waterline - 55.0 * scale),
            egui::vec2(360.0 * scale, 90.0 * scale),
        );
        ui.painter().rect_filled(
            tip_rect,
            16.0 * scale,
            Theme::with_opacity(theme.panel, opacity * 0.95),
        );
        ui.painter().rect_stroke(
            tip_rect,
            16.0 * scale,
            egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, opacity)),
            StrokeKind::Outside,
        );
        let mut y = tip_rect.top() + 14.0 * scale;
        y += text::draw_centered_line(
            ui,
            &visible.text,
            tip_rect.center().x,
            y,
            FontId::proportional(theme.body_size * 0.85 * scale),
            Theme::with_opacity(theme.heading_color, opacity),
        );
        if let Some(subtext) = &visible.subtext {
            y += 6.0 * scale;
            text::draw_centered_line(
                ui,
                subtext,
                tip_rect.center().x,
                y,
                FontId::proportional(theme.small_size * 0.8 * scale),
                Theme::with_opacity(theme.muted, opacity),
            );
        }
    }

    let hidden: Vec<_> = slide.content.iter().filter(|i| i.id != VISIBLE_ID).collect();
    let reveal = if berg.revealed() {
        ease_out((anim / 0.5).clamp(0.0, 1.0))
    } else {
        0.0
    };

    if reveal > 0.0 && !hidden.is_empty() {
        let cols = 2.min(hidden.len());
        let gap = 24.0 * scale;
        let grid_width = (rect.width() * 0.6).min(900.0 * scale);
        let card_width = (grid_width - gap * (cols as f32 - 1.0)) / cols as f32;
        let card_height = 96.0 * scale;
        let grid_left = rect.center().x - grid_width / 2.0;
        let grid_top = waterline + 50.0 * scale;
        let rise = (1.0 - reveal) * 40.0 * scale;

        for (i, item) in hidden.iter().enumerate() {
            let alpha = opacity * reveal;
            let card_rect = egui::Rect::from_min_size(
                Pos2::new(
                    grid_left + (i % cols) as f32 * (card_width + gap),
                    grid_top + (i / cols) as f32 * (card_height + gap) + rise,
                ),
                egui::vec2(card_width, card_height),
            );
            ui.painter().rect_filled(
                card_rect,
                12.0 * scale,
                Theme::with_opacity(egui::Color32::from_rgb(0x12, 0x2E, 0x5C), alpha * 0.92),
            );
            ui.painter().rect_stroke(
                card_rect,
                12.0 * scale,
                egui::Stroke::new(1.0, Theme::with_opacity(accent, alpha * 0.4)),
                StrokeKind::Outside,
            );

            let mut y = card_rect.top() + 16.0 * scale;
            y += text::draw_centered_line(
                ui,
                &item.text,
                card_rect.center().x,
                y,
                FontId::proportional(theme.body_size * 0.7 * scale),
                Theme::with_opacity(egui::Color32::from_rgb(0xBF, 0xDB, 0xFE), alpha),
            );
            if let Some(subtext) = &item.subtext {
                y += 6.0 * scale;
                text::draw_centered_line(
                    ui,
                    subtext,
                    card_rect.center().x,
                    y,
                    FontId::proportional(theme.small_size * 0.75 * scale),
                    Theme::with_opacity(egui::Color32::from_rgb(0x93, 0xB4, 0xD9), alpha),
                );
            }
        }
    }

    if !berg.revealed() {
        // Invitation over the dark water
        let hint_center = Pos2::new(rect.center().x, water_rect.center().y);
        let hint = "Click the water to see what lies beneath";
        let galley = ui.painter().layout_no_wrap(
            hint.to_string(),
            FontId::proportional(theme.body_size * 0.7 * scale),
            Theme::with_opacity(egui::Color32::from_rgb(0xBF, 0xDB, 0xFE), opacity * 0.9),
        );
        let pill_rect = egui::Rect::from_center_size(
            hint_center,
            galley.rect.size() + egui::vec2(48.0 * scale, 24.0 * scale),
        );
        ui.painter().rect_filled(
            pill_rect,
            pill_rect.height() / 2.0,
            Theme::with_opacity(theme.background, opacity * 0.8),
        );
        ui.painter().galley(
            Pos2::new(
                hint_center.x - galley.rect.width() / 2.0,
                hint_center.y - galley.rect.height() / 2.0,
            ),
            galley,
            Theme::with_opacity(egui::Color32::from_rgb(0xBF, 0xDB, 0xFE), opacity * 0.9),
        );
    }
}
