use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::Slide;
use crate::render::text;
use crate::state::Timeline;
use crate::theme::Theme;

/// Timeline-scrubber layout: a display panel for the active entry above a
/// dotted track. Dots are random-access; the fill grows to the active dot.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    timeline: &mut Timeline,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let padding = 150.0 * scale;
    let center_x = rect.center().x;

    // Active entry display
    let panel_rect = egui::Rect::from_min_size(
        Pos2::new(rect.left() + padding, top + 10.0 * scale),
        egui::vec2(rect.width() - padding * 2.0, 190.0 * scale),
    );
    ui.painter().rect_filled(
        panel_rect,
        20.0 * scale,
        Theme::with_opacity(theme.panel, opacity * 0.92),
    );
    ui.painter().rect_stroke(
        panel_rect,
        20.0 * scale,
        egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, opacity)),
        StrokeKind::Outside,
    );

    if let Some(active) = slide.content.get(timeline.active()) {
        let mut y = panel_rect.top() + 34.0 * scale;
        y += text::draw_centered_line(
            ui,
            &active.text,
            center_x,
            y,
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(theme.heading_color, opacity),
        );
        if let Some(subtext) = &active.subtext {
            y += 14.0 * scale;
            text::draw_centered(
                ui,
                subtext,
                center_x,
                y,
                FontId::proportional(theme.body_size * 0.7 * scale),
                Theme::with_opacity(theme.foreground, opacity),
                panel_rect.width() - 120.0 * scale,
            );
        }
    }

    // Track
    let track_y = panel_rect.bottom() + 110.0 * scale;
    let track_left = rect.left() + padding;
    let track_right = rect.right() - padding;
    ui.painter().line_segment(
        [Pos2::new(track_left, track_y), Pos2::new(track_right, track_y)],
        egui::Stroke::new(4.0 * scale, Theme::with_opacity(theme.panel_border, opacity)),
    );

    // Fill up to the active dot
    let fill_end = track_left + (track_right - track_left) * timeline.fraction();
    if timeline.fraction() > 0.0 {
        ui.painter().line_segment(
            [Pos2::new(track_left, track_y), Pos2::new(fill_end, track_y)],
            egui::Stroke::new(4.0 * scale, Theme::with_opacity(accent, opacity)),
        );
    }

    // Dots with date labels
    let count = slide.content.len();
    for (i, item) in slide.content.iter().enumerate() {
        let x = if count <= 1 {
            track_left
        } else {
            track_left + (track_right - track_left) * i as f32 / (count - 1) as f32
        };
        let dot = Pos2::new(x, track_y);
        let hit_rect = egui::Rect::from_center_size(dot, egui::vec2(56.0 * scale, 56.0 * scale));
        let response = ui.interact(hit_rect, ui.id().with(("timeline-dot", i)), Sense::click());
        if response.clicked() {
            timeline.set_active(i);
        }

        let reached = i <= timeline.active();
        let is_active = i == timeline.active();
        let radius = if is_active { 14.0 } else { 9.0 } * scale;

        ui.painter().circle_filled(
            dot,
            radius,
            Theme::with_opacity(theme.background, opacity),
        );
        ui.painter().circle_stroke(
            dot,
            radius,
            egui::Stroke::new(
                4.0 * scale,
                if reached {
                    Theme::with_opacity(accent, opacity)
                } else if response.hovered() {
                    Theme::with_opacity(accent, opacity * 0.5)
                } else {
                    Theme::with_opacity(theme.panel_border, opacity)
                },
            ),
        );

        if let Some(date) = &item.timeline_date {
            text::draw_centered_line(
                ui,
                date,
                x,
                track_y + 26.0 * scale,
                FontId::proportional(theme.small_size * 0.8 * scale),
                if is_active {
                    Theme::with_opacity(accent, opacity)
                } else {
                    Theme::with_opacity(theme.muted, opacity)
                },
            );
        }
    }
}
