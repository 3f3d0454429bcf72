use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::theme::Theme;

/// Centered-quote layout: one large panel with the first content item's text
/// as the quotation and its subtext as the attribution line.
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let Some(item) = slide.content.first() else {
        // No quote to show; the title is better than a blank screen.
        crate::render::layouts::title::render(ui, slide, theme, rect, opacity, scale);
        return;
    };

    let panel_width = rect.width() * 0.62;
    let panel_height = rect.height() * 0.52;
    let panel_rect = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(panel_width, panel_height),
    );

    ui.painter().rect_filled(
        panel_rect,
        40.0 * scale,
        Theme::with_opacity(theme.panel, opacity * 0.92),
    );
    ui.painter().rect_stroke(
        panel_rect,
        40.0 * scale,
        egui::Stroke::new(1.0, Theme::with_opacity(accent, opacity * 0.4)),
        StrokeKind::Outside,
    );

    // Icon medallion overlapping the top edge
    let medallion = Pos2::new(panel_rect.center().x, panel_rect.top());
    ui.painter().circle_filled(
        medallion,
        36.0 * scale,
        Theme::with_opacity(theme.background, opacity),
    );
    ui.painter().circle_stroke(
        medallion,
        36.0 * scale,
        egui::Stroke::new(1.5 * scale, Theme::with_opacity(accent, opacity * 0.7)),
    );
    let glyph = ui.painter().layout_no_wrap(
        icons::glyph(item.icon.as_deref()).to_string(),
        FontId::proportional(34.0 * scale),
        Theme::with_opacity(accent, opacity),
    );
    ui.painter().galley(
        Pos2::new(
            medallion.x - glyph.rect.width() / 2.0,
            medallion.y - glyph.rect.height() / 2.0,
        ),
        glyph,
        Theme::with_opacity(accent, opacity),
    );

    // Oversized decorative quotation mark
    let mark = ui.painter().layout_no_wrap(
        "\u{201C}".to_string(),
        FontId::proportional(200.0 * scale),
        Theme::with_opacity(accent, opacity * 0.12),
    );
    ui.painter().galley(
        Pos2::new(panel_rect.left() + 20.0 * scale, panel_rect.top() - 10.0 * scale),
        mark,
        Theme::with_opacity(accent, opacity * 0.12),
    );

    let inner_width = panel_width - 120.0 * scale;
    let quote = format!("\u{201C}{}\u{201D}", item.text);
    let mut y = panel_rect.top() + 90.0 * scale;
    y += text::draw_centered(
        ui,
        &quote,
        panel_rect.center().x,
        y,
        FontId::proportional(theme.body_size * 1.25 * scale),
        Theme::with_opacity(theme.heading_color, opacity),
        inner_width,
    );

    // Divider
    y += 34.0 * scale;
    let divider = egui::Rect::from_center_size(
        Pos2::new(panel_rect.center().x, y),
        egui::vec2(140.0 * scale, 3.0 * scale),
    );
    ui.painter()
        .rect_filled(divider, 2.0 * scale, Theme::with_opacity(accent, opacity * 0.7));
    y += 26.0 * scale;

    if let Some(subtext) = &item.subtext {
        text::draw_centered(
            ui,
            subtext,
            panel_rect.center().x,
            y,
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(accent, opacity * 0.9),
            inner_width,
        );
    }
}
