use eframe::egui::{self, FontId, Pos2, StrokeKind};

use crate::deck::Slide;
use crate::render::text;
use crate::theme::Theme;

/// Seconds between one bubble appearing and the next.
const BUBBLE_STAGGER: f32 = 0.6;

/// Chat-bubbles layout: a conversation replayed top to bottom in content
/// order, one avatar-and-bubble row per item.
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

    let column_width = (rect.width() * 0.5).min(860.0 * scale);
    let left = rect.center().x - column_width / 2.0;
    let avatar_radius = 26.0 * scale;
    let mut y = top + 10.0 * scale;

    for (i, item) in slide.content.iter().enumerate() {
        let reveal = ((age - i as f32 * BUBBLE_STAGGER) / 0.35).clamp(0.0, 1.0);
        let alpha = opacity * reveal;
        if alpha <= 0.0 {
            break;
        }
        let slide_in = (1.0 - reveal) * 30.0 * scale;

        // Avatar disc with the sender's initial
        let avatar_color = theme.slide_accent(item.avatar_color.as_deref());
        let avatar_center = Pos2::new(left + avatar_radius - slide_in, y + avatar_radius);
        ui.painter().circle_filled(
            avatar_center,
            avatar_radius,
            Theme::with_opacity(avatar_color, alpha * 0.85),
        );
        let initial = item
            .sender
            .as_deref()
            .and_then(|s| s.chars().next())
            .unwrap_or('?');
        text::draw_centered_line(
            ui,
            &initial.to_string(),
            avatar_center.x,
            avatar_center.y - 13.0 * scale,
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.background, alpha),
        );

        // Bubble
        let bubble_left = left + avatar_radius * 2.0 + 18.0 * scale - slide_in;
        let bubble_width = column_width - avatar_radius * 2.0 - 18.0 * scale;
        let text_galley = ui.painter().layout(
            format!("\u{201C}{}\u{201D}", item.text),
            FontId::proportional(theme.body_size * 0.72 * scale),
            Theme::with_opacity(theme.foreground, alpha),
            bubble_width - 48.0 * scale,
        );
        let bubble_height = text_galley.rect.height() + 64.0 * scale;
        let bubble_rect = egui::Rect::from_min_size(
            Pos2::new(bubble_left, y),
            egui::vec2(bubble_width, bubble_height),
        );
        ui.painter().rect_filled(
            bubble_rect,
            18.0 * scale,
            Theme::with_opacity(theme.panel, alpha * 0.94),
        );
        ui.painter().rect_stroke(
            bubble_rect,
            18.0 * scale,
            egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, alpha)),
            StrokeKind::Outside,
        );
        ui.painter().galley(
            Pos2::new(bubble_left + 24.0 * scale, y + 18.0 * scale),
            text_galley,
            Theme::with_opacity(theme.foreground, alpha),
        );

        if let Some(sender) = &item.sender {
            let sender_galley = ui.painter().layout_no_wrap(
                sender.clone(),
                FontId::proportional(theme.small_size * 0.75 * scale),
                Theme::with_opacity(accent, alpha * 0.9),
            );
            ui.painter().galley(
                Pos2::new(
                    bubble_rect.right() - sender_galley.rect.width() - 24.0 * scale,
                    bubble_rect.bottom() - sender_galley.rect.height() - 12.0 * scale,
                ),
                sender_galley,
                Theme::with_opacity(accent, alpha * 0.9),
            );
        }

        y += bubble_height + 22.0 * scale;
    }
}
