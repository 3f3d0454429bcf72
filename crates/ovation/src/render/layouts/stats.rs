use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::render::transition::ease_out;
use crate::theme::Theme;

/// How long the counters take to reach their target value.
const COUNT_UP_SECONDS: f32 = 1.6;

/// Stats-dashboard layout: one card per item with a count-up number plus
/// suffix, label and sublabel. The count-up is cosmetic; the target value
/// comes straight from the data.
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

    let padding = 130.0 * scale;
    let gap = 32.0 * scale;
    let cols = count.min(3);
    let card_width = (rect.width() - padding * 2.0 - gap * (cols as f32 - 1.0)) / cols as f32;
    let rows = count.div_ceil(cols);
    let card_height =
        (((rect.bottom() - 150.0 * scale - top) - gap * (rows as f32 - 1.0)) / rows as f32)
            .min(340.0 * scale);

    let counted = ease_out((age / COUNT_UP_SECONDS).clamp(0.0, 1.0));

    for (i, item) in slide.content.iter().enumerate() {
        let col = i % cols;
        let row = i / cols;
        let card_rect = egui::Rect::from_min_size(
            Pos2::new(
                rect.left() + padding + col as f32 * (card_width + gap),
                top + 10.0 * scale + row as f32 * (card_height + gap),
            ),
            egui::vec2(card_width, card_height),
        );

        ui.painter().rect_filled(
            card_rect,
            22.0 * scale,
            Theme::with_opacity(theme.panel, opacity * 0.9),
        );
        ui.painter().rect_stroke(
            card_rect,
            22.0 * scale,
            egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, opacity)),
            StrokeKind::Outside,
        );

        let mut y = card_rect.top() + 26.0 * scale;
        y += text::draw_centered_line(
            ui,
            icons::glyph(item.icon.as_deref()),
            card_rect.center().x,
            y,
            FontId::proportional(36.0 * scale),
            Theme::with_opacity(accent, opacity * 0.9),
        );
        y += 16.0 * scale;

        // Count-up display value
        let target = item.value.unwrap_or(0.0);
        let shown = (target * counted as f64).round();
        let display = match &item.suffix {
            Some(suffix) => format!("{shown}{suffix}"),
            None => format!("{shown}"),
        };
        y += text::draw_centered_line(
            ui,
            &display,
            card_rect.center().x,
            y,
            FontId::monospace(theme.heading_size * 0.95 * scale),
            Theme::with_opacity(theme.heading_color, opacity),
        );
        y += 18.0 * scale;

        let inner_width = card_width - 36.0 * scale;
        y += text::draw_centered(
            ui,
            &item.text,
            card_rect.center().x,
            y,
            FontId::proportional(theme.body_size * 0.72 * scale),
            Theme::with_opacity(theme.foreground, opacity),
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
                Theme::with_opacity(theme.muted, opacity),
                inner_width,
            );
        }
    }
}
