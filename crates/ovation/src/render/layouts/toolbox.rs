use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::state::Toolbox;
use crate::theme::Theme;

/// Toolbox-orbit layout: tools ring a central box; hovering a tool shows its
/// description card. At most one tool is highlighted at a time.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    toolbox: &mut Toolbox,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let center = Pos2::new(rect.center().x, (top + rect.bottom() - 140.0 * scale) / 2.0);
    let orbit_radius = 240.0 * scale;

    // Center box
    let box_rect = egui::Rect::from_center_size(center, egui::vec2(200.0 * scale, 140.0 * scale));
    ui.painter().rect_filled(
        box_rect,
        24.0 * scale,
        Theme::with_opacity(accent, opacity * 0.12),
    );
    ui.painter().rect_stroke(
        box_rect,
        24.0 * scale,
        egui::Stroke::new(1.5 * scale, Theme::with_opacity(accent, opacity * 0.8)),
        StrokeKind::Outside,
    );
    let mut y = center.y - 26.0 * scale;
    y += text::draw_centered_line(
        ui,
        "Toolkit",
        center.x,
        y,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(accent, opacity),
    );
    y += 6.0 * scale;
    text::draw_centered_line(
        ui,
        "hover the tools",
        center.x,
        y,
        FontId::proportional(theme.small_size * 0.7 * scale),
        Theme::with_opacity(theme.muted, opacity),
    );

    let count = slide.content.len().max(1);
    for (i, item) in slide.content.iter().enumerate() {
        let angle = i as f32 / count as f32 * std::f32::consts::TAU - std::f32::consts::FRAC_PI_2;
        let tool_center = center + egui::vec2(angle.cos(), angle.sin()) * orbit_radius;
        let tool_radius = 38.0 * scale;
        let tool_rect = egui::Rect::from_center_size(
            tool_center,
            egui::vec2(tool_radius * 2.0, tool_radius * 2.0),
        );

        let response = ui.interact(tool_rect, ui.id().with(("tool", i)), Sense::hover());
        if response.hovered() {
            toolbox.set_active(&item.id);
        } else {
            toolbox.clear(&item.id);
        }
        let active = toolbox.active() == Some(item.id.as_str());

        let grow = if active { 1.15 } else { 1.0 };
        ui.painter().circle_filled(
            tool_center,
            tool_radius * grow,
            Theme::with_opacity(theme.panel, opacity),
        );
        ui.painter().circle_stroke(
            tool_center,
            tool_radius * grow,
            egui::Stroke::new(
                1.5 * scale,
                if active {
                    Theme::with_opacity(accent, opacity)
                } else {
                    Theme::with_opacity(theme.panel_border, opacity)
                },
            ),
        );
        text::draw_centered_line(
            ui,
            icons::glyph(item.icon.as_deref()),
            tool_center.x,
            tool_center.y - 14.0 * scale,
            FontId::proportional(26.0 * scale),
            Theme::with_opacity(theme.foreground, opacity),
        );

        // Description card under the hovered tool
        if active {
            let card_rect = egui::Rect::from_min_size(
                Pos2::new(
                    tool_center.x - 130.0 * scale,
                    tool_rect.bottom() + 12.0 * scale,
                ),
                egui::vec2(260.0 * scale, 96.0 * scale),
            );
            ui.painter().rect_filled(
                card_rect,
                12.0 * scale,
                Theme::with_opacity(theme.background, opacity * 0.96),
            );
            ui.painter().rect_stroke(
                card_rect,
                12.0 * scale,
                egui::Stroke::new(1.0, Theme::with_opacity(accent, opacity * 0.6)),
                StrokeKind::Outside,
            );
            let mut cy = card_rect.top() + 14.0 * scale;
            cy += text::draw_centered_line(
                ui,
                &item.text,
                card_rect.center().x,
                cy,
                FontId::proportional(theme.small_size * 0.9 * scale),
                Theme::with_opacity(accent, opacity),
            );
            if let Some(subtext) = &item.subtext {
                cy += 6.0 * scale;
                text::draw_centered(
                    ui,
                    subtext,
                    card_rect.center().x,
                    cy,
                    FontId::proportional(theme.small_size * 0.75 * scale),
                    Theme::with_opacity(theme.foreground, opacity),
                    card_rect.width() - 24.0 * scale,
                );
            }
        }
    }
}
