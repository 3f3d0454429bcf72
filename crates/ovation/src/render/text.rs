use eframe::egui::{self, Color32, FontId, Pos2};

use crate::deck::Slide;
use crate::theme::Theme;

/// Layout and paint wrapped text at `pos`. Returns the height used.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Layout wrapped text centered on `center_x`. Returns the height used.
pub fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, y);
    ui.painter().galley(pos, galley, color);
    height
}

/// Single-line text centered on `center_x`.
pub fn draw_centered_line(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    font: FontId,
    color: Color32,
) -> f32 {
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let height = galley.rect.height();
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, y);
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw the common slide header: title (in the slide's accent color) and
/// optional subtitle, centered at the top of the content area. Returns the
/// y coordinate where the body may start.
pub fn draw_header(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) -> f32 {
    let accent = Theme::with_opacity(
        theme.slide_accent(slide.theme_color.as_deref()),
        opacity,
    );
    let padding = 60.0 * scale;
    let max_width = rect.width() - padding * 2.0;
    let mut y = rect.top() + padding;

    y += draw_centered(
        ui,
        &slide.title,
        rect.center().x,
        y,
        FontId::proportional(theme.heading_size * 0.75 * scale),
        accent,
        max_width,
    );

    if let Some(subtitle) = &slide.subtitle {
        y += 12.0 * scale;
        y += draw_centered(
            ui,
            subtitle,
            rect.center().x,
            y,
            FontId::proportional(theme.body_size * 0.8 * scale),
            Theme::with_opacity(theme.muted, opacity),
            max_width,
        );
    }

    y + 36.0 * scale
}

/// Draw an icon glyph centered in a rounded badge. Used by list and card
/// templates for the opaque icon handles.
pub fn draw_icon_badge(
    ui: &egui::Ui,
    glyph: &str,
    center: Pos2,
    radius: f32,
    color: Color32,
    background: Color32,
    scale: f32,
) {
    let rect = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
    ui.painter().rect_filled(rect, 8.0 * scale, background);
    let galley = ui.painter().layout_no_wrap(
        glyph.to_string(),
        FontId::proportional(radius * 1.1),
        color,
    );
    let pos = Pos2::new(
        center.x - galley.rect.width() / 2.0,
        center.y - galley.rect.height() / 2.0,
    );
    ui.painter().galley(pos, galley, color);
}
