use eframe::egui::{self, FontId, StrokeKind};

use crate::deck::Slide;
use crate::render::text;
use crate::theme::Theme;

/// Title-only layout: big centered title, optional subtitle, optional author
/// panel (a content item with id `author`). Also the fallback for unknown
/// layout tags, so it must cope with any slide shape.
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let accent = Theme::with_opacity(theme.slide_accent(slide.theme_color.as_deref()), opacity);
    let max_width = rect.width() * 0.8;
    let center_x = rect.center().x;

    let title_font = FontId::proportional(theme.title_size * scale);
    let title_galley = ui.painter().layout(
        slide.title.clone(),
        title_font,
        Theme::with_opacity(theme.heading_color, opacity),
        max_width,
    );
    let author = slide.content.iter().find(|i| i.id == "author");

    // Rough total height for vertical centering
    let mut total = title_galley.rect.height();
    if slide.subtitle.is_some() {
        total += theme.body_size * scale * 2.5;
    }
    if author.is_some() {
        total += 140.0 * scale;
    }

    let mut y = (rect.center().y - total / 2.0).max(rect.top() + 80.0 * scale);

    let title_pos = egui::pos2(center_x - title_galley.rect.width() / 2.0, y);
    y += title_galley.rect.height() + 28.0 * scale;
    ui.painter().galley(
        title_pos,
        title_galley,
        Theme::with_opacity(theme.heading_color, opacity),
    );

    if let Some(subtitle) = &slide.subtitle {
        y += text::draw_centered(
            ui,
            subtitle,
            center_x,
            y,
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(theme.muted, opacity),
            max_width,
        );
        y += 36.0 * scale;
    }

    if let Some(author) = author {
        let panel_width = 460.0 * scale;
        let panel_height = 110.0 * scale;
        let panel_rect = egui::Rect::from_min_size(
            egui::pos2(center_x - panel_width / 2.0, y),
            egui::vec2(panel_width, panel_height),
        );
        ui.painter().rect_filled(
            panel_rect,
            14.0 * scale,
            Theme::with_opacity(theme.panel, opacity * 0.9),
        );
        ui.painter().rect_stroke(
            panel_rect,
            14.0 * scale,
            egui::Stroke::new(1.0, Theme::with_opacity(accent, opacity * 0.5)),
            StrokeKind::Outside,
        );

        let mut py = panel_rect.top() + 20.0 * scale;
        py += text::draw_centered_line(
            ui,
            &author.text,
            center_x,
            py,
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.foreground, opacity),
        );
        if let Some(subtext) = &author.subtext {
            py += 8.0 * scale;
            text::draw_centered_line(
                ui,
                subtext,
                center_x,
                py,
                FontId::proportional(theme.body_size * scale),
                accent,
            );
        }
    }
}
