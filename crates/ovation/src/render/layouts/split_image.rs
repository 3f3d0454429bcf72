use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::theme::Theme;

/// Split layout: item rows on the left, a decorative visual panel on the
/// right standing in for the hero image.
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
    let column_width = rect.width() * 0.46 - padding;
    let left = rect.left() + padding;
    let mut y = rect.top() + 90.0 * scale;

    y += text::draw_wrapped(
        ui,
        &slide.title,
        Pos2::new(left, y),
        FontId::proportional(theme.heading_size * 0.85 * scale),
        Theme::with_opacity(accent, opacity),
        column_width,
    );
    if let Some(subtitle) = &slide.subtitle {
        y += 12.0 * scale;
        y += text::draw_wrapped(
            ui,
            subtitle,
            Pos2::new(left, y),
            FontId::proportional(theme.body_size * 0.75 * scale),
            Theme::with_opacity(theme.muted, opacity),
            column_width,
        );
    }
    y += 36.0 * scale;

    for (i, item) in slide.content.iter().enumerate() {
        let reveal = ((age - 0.3 - i as f32 * 0.15) / 0.4).clamp(0.0, 1.0);
        let alpha = opacity * reveal;
        if alpha <= 0.0 {
            continue;
        }

        let badge_radius = 24.0 * scale;
        let text_left = left + badge_radius * 2.0 + 20.0 * scale;
        let text_width = column_width - (text_left - left);

        let mut row_h = text::draw_wrapped(
            ui,
            &item.text,
            Pos2::new(text_left, y),
            FontId::proportional(theme.body_size * 0.75 * scale),
            Theme::with_opacity(theme.heading_color, alpha),
            text_width,
        );
        if let Some(subtext) = &item.subtext {
            row_h += 4.0 * scale;
            row_h += text::draw_wrapped(
                ui,
                subtext,
                Pos2::new(text_left, y + row_h),
                FontId::proportional(theme.small_size * 0.9 * scale),
                Theme::with_opacity(theme.muted, alpha),
                text_width,
            );
        }

        text::draw_icon_badge(
            ui,
            icons::glyph(item.icon.as_deref()),
            Pos2::new(left + badge_radius, y + row_h / 2.0),
            badge_radius,
            Theme::with_opacity(theme.foreground, alpha),
            Theme::with_opacity(theme.panel, alpha),
            scale,
        );

        y += row_h + 22.0 * scale;
    }

    // Right-hand visual panel
    let panel_rect = egui::Rect::from_min_max(
        Pos2::new(rect.center().x + 40.0 * scale, rect.top() + 120.0 * scale),
        Pos2::new(rect.right() - padding, rect.bottom() - 160.0 * scale),
    );
    ui.painter().rect_filled(
        panel_rect,
        36.0 * scale,
        Theme::with_opacity(theme.panel, opacity * 0.8),
    );
    ui.painter().rect_stroke(
        panel_rect,
        36.0 * scale,
        egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, opacity)),
        StrokeKind::Outside,
    );

    // Concentric rings and a floating centerpiece glyph
    for (i, radius) in [120.0_f32, 170.0].iter().enumerate() {
        ui.painter().circle_stroke(
            panel_rect.center(),
            radius * scale,
            egui::Stroke::new(
                1.0,
                Theme::with_opacity(accent, opacity * (0.25 - i as f32 * 0.1)),
            ),
        );
    }
    let bob = (age * 1.2).sin() * 12.0 * scale;
    let glyph = slide
        .content
        .first()
        .map(|i| icons::glyph(i.icon.as_deref()))
        .unwrap_or(icons::FALLBACK);
    let galley = ui.painter().layout_no_wrap(
        glyph.to_string(),
        FontId::proportional(90.0 * scale),
        Theme::with_opacity(accent, opacity),
    );
    let pos = Pos2::new(
        panel_rect.center().x - galley.rect.width() / 2.0,
        panel_rect.center().y - galley.rect.height() / 2.0 + bob,
    );
    ui.painter()
        .galley(pos, galley, Theme::with_opacity(accent, opacity));
}
