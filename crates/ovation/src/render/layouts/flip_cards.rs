use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::icons;
use crate::render::text;
use crate::render::transition::ease_in_out;
use crate::state::FlipSet;
use crate::theme::Theme;

const FLIP_SECONDS: f32 = 0.35;

/// Expectation-vs-reality flip cards. The front carries the expectation
/// (text + subtext), the back the reality. Clicking a card flips only that
/// card.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    set: &mut FlipSet,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    anim: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let count = slide.content.len();
    if count == 0 {
        return;
    }

    let padding = 120.0 * scale;
    let gap = 32.0 * scale;
    let cols = count.min(3);
    let card_width = (rect.width() - padding * 2.0 - gap * (cols as f32 - 1.0)) / cols as f32;
    let card_height = (rect.bottom() - 160.0 * scale - top).min(380.0 * scale);

    // The crossfade between faces reuses the time since the last state
    // change; only the card that changed most recently animates, the rest
    // sit at their settled face.
    let settle = ease_in_out((anim / FLIP_SECONDS).clamp(0.0, 1.0));

    for (i, item) in slide.content.iter().enumerate() {
        let card_rect = egui::Rect::from_min_size(
            Pos2::new(
                rect.left() + padding + (i % cols) as f32 * (card_width + gap),
                top + (i / cols) as f32 * (card_height + gap),
            ),
            egui::vec2(card_width, card_height),
        );

        let response = ui.interact(card_rect, ui.id().with(("flip", i)), Sense::click());
        if response.clicked() {
            set.toggle(&item.id);
        }

        let flipped = set.is_flipped(&item.id);
        // Horizontal squash stands in for the 3D flip
        let squash = (settle * 2.0 - 1.0).abs().max(0.6);
        let face_rect = egui::Rect::from_center_size(
            card_rect.center(),
            egui::vec2(card_rect.width() * squash, card_rect.height()),
        );

        let border = if flipped {
            Theme::with_opacity(accent, opacity)
        } else if response.hovered() {
            Theme::with_opacity(theme.panel_border, opacity)
        } else {
            Theme::with_opacity(theme.panel_border, opacity * 0.7)
        };
        ui.painter().rect_filled(
            face_rect,
            18.0 * scale,
            Theme::with_opacity(theme.panel, opacity * 0.95),
        );
        ui.painter().rect_stroke(
            face_rect,
            18.0 * scale,
            egui::Stroke::new(if flipped { 2.0 } else { 1.0 } * scale, border),
            StrokeKind::Outside,
        );

        let inner_width = face_rect.width() - 36.0 * scale;
        let mut y = face_rect.top() + 30.0 * scale;

        if flipped {
            // Back face: the reality
            y += text::draw_centered_line(
                ui,
                "\u{2713}",
                face_rect.center().x,
                y,
                FontId::proportional(34.0 * scale),
                Theme::with_opacity(accent, opacity),
            );
            y += 14.0 * scale;
            y += text::draw_centered_line(
                ui,
                "Reality",
                face_rect.center().x,
                y,
                FontId::proportional(theme.small_size * scale),
                Theme::with_opacity(theme.muted, opacity),
            );
            y += 14.0 * scale;
            if let Some(reality) = &item.reality {
                y += text::draw_centered(
                    ui,
                    reality,
                    face_rect.center().x,
                    y,
                    FontId::proportional(theme.body_size * 0.85 * scale),
                    Theme::with_opacity(accent, opacity),
                    inner_width,
                );
            }
            if let Some(subtext) = &item.subtext {
                y += 12.0 * scale;
                text::draw_centered(
                    ui,
                    subtext,
                    face_rect.center().x,
                    y,
                    FontId::proportional(theme.small_size * 0.9 * scale),
                    Theme::with_opacity(theme.foreground, opacity),
                    inner_width,
                );
            }
        } else {
            // Front face: the expectation
            y += text::draw_centered_line(
                ui,
                icons::glyph(item.icon.as_deref()),
                face_rect.center().x,
                y,
                FontId::proportional(34.0 * scale),
                Theme::with_opacity(theme.negative, opacity * 0.85),
            );
            y += 14.0 * scale;
            y += text::draw_centered_line(
                ui,
                "What people think",
                face_rect.center().x,
                y,
                FontId::proportional(theme.small_size * scale),
                Theme::with_opacity(theme.muted, opacity),
            );
            y += 14.0 * scale;
            y += text::draw_centered(
                ui,
                &format!("\u{201C}{}\u{201D}", item.text),
                face_rect.center().x,
                y,
                FontId::proportional(theme.body_size * 0.85 * scale),
                Theme::with_opacity(theme.heading_color, opacity),
                inner_width,
            );
            if let Some(subtext) = &item.subtext {
                y += 12.0 * scale;
                text::draw_centered(
                    ui,
                    subtext,
                    face_rect.center().x,
                    y,
                    FontId::proportional(theme.small_size * 0.9 * scale),
                    Theme::with_opacity(theme.muted, opacity),
                    inner_width,
                );
            }

            // Flip hint pinned near the bottom edge
            text::draw_centered_line(
                ui,
                "\u{21BB} click to flip",
                face_rect.center().x,
                face_rect.bottom() - 34.0 * scale,
                FontId::proportional(theme.small_size * 0.75 * scale),
                Theme::with_opacity(theme.muted, opacity * 0.8),
            );
        }
    }
}
