use eframe::egui::{self, FontId, Pos2};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::theme::Theme;

/// Bullet-points layout: left-aligned header behind an accent bar, then one
/// row per item with an icon badge, primary text and optional subtext. Rows
/// fade in one after another while the slide is fresh.
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
    let padding = 100.0 * scale;
    let left = rect.left() + padding;
    let max_width = rect.width() - padding * 2.0;
    let mut y = rect.top() + 70.0 * scale;

    // Accent bar beside the header
    let bar_rect = egui::Rect::from_min_size(
        Pos2::new(left - 24.0 * scale, y),
        egui::vec2(8.0 * scale, theme.heading_size * scale),
    );
    ui.painter()
        .rect_filled(bar_rect, 3.0 * scale, Theme::with_opacity(accent, opacity));

    y += text::draw_wrapped(
        ui,
        &slide.title,
        Pos2::new(left, y),
        FontId::proportional(theme.heading_size * 0.8 * scale),
        Theme::with_opacity(accent, opacity),
        max_width,
    );
    if let Some(subtitle) = &slide.subtitle {
        y += 10.0 * scale;
        y += text::draw_wrapped(
            ui,
            subtitle,
            Pos2::new(left, y),
            FontId::proportional(theme.body_size * 0.75 * scale),
            Theme::with_opacity(theme.muted, opacity),
            max_width,
        );
    }
    y += 40.0 * scale;

    let row_gap = 24.0 * scale;
    for (i, item) in slide.content.iter().enumerate() {
        // Staggered entrance, settled after ~2s
        let reveal = ((age - 0.25 - i as f32 * 0.15) / 0.4).clamp(0.0, 1.0);
        let alpha = opacity * reveal;
        if alpha <= 0.0 {
            continue;
        }

        let badge_radius = 26.0 * scale;
        let text_left = left + badge_radius * 2.0 + 24.0 * scale;
        let text_width = max_width - (text_left - left);

        let mut row_h = text::draw_wrapped(
            ui,
            &item.text,
            Pos2::new(text_left, y),
            FontId::proportional(theme.body_size * 0.85 * scale),
            Theme::with_opacity(theme.heading_color, alpha),
            text_width,
        );
        if let Some(subtext) = &item.subtext {
            row_h += 6.0 * scale;
            row_h += text::draw_wrapped(
                ui,
                subtext,
                Pos2::new(text_left, y + row_h),
                FontId::proportional(theme.small_size * scale),
                Theme::with_opacity(theme.muted, alpha),
                text_width,
            );
        }

        text::draw_icon_badge(
            ui,
            icons::glyph(item.icon.as_deref()),
            Pos2::new(left + badge_radius, y + row_h / 2.0),
            badge_radius,
            Theme::with_opacity(accent, alpha),
            Theme::with_opacity(theme.panel, alpha),
            scale,
        );

        y += row_h + row_gap;
    }
}
