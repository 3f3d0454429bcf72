use eframe::egui::{self, FontId, Pos2, Sense};

use crate::deck::Slide;
use crate::render::text;
use crate::render::transition::ease_in_out;
use crate::state::BalanceScale;
use crate::theme::Theme;

/// Balance-scale layout: a beam with two pans labeled from the first two
/// content items. Clicking anywhere on the apparatus levels the beam and
/// drops the counterweight in; the rendered angle eases toward the machine's
/// derived tilt.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    state: &mut BalanceScale,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    anim: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let stage = egui::Rect::from_center_size(
        Pos2::new(rect.center().x, (top + rect.bottom() - 140.0 * scale) / 2.0),
        egui::vec2(700.0 * scale, 420.0 * scale),
    );

    let response = ui.interact(stage, ui.id().with("balance-stage"), Sense::click());
    if response.clicked() {
        state.toggle();
    }

    // Eased beam angle toward the machine's target tilt
    let target = state.tilt_degrees();
    let from = if state.balanced() { -12.0 } else { 0.0 };
    let t = ease_in_out((anim / 0.5).clamp(0.0, 1.0));
    let angle_deg = from + (target - from) * t;
    let angle = angle_deg.to_radians();

    let base = Pos2::new(stage.center().x, stage.bottom());
    let pillar_top = Pos2::new(base.x, base.y - 300.0 * scale);

    // Base and pillar
    ui.painter().rect_filled(
        egui::Rect::from_center_size(
            Pos2::new(base.x, base.y - 6.0 * scale),
            egui::vec2(180.0 * scale, 12.0 * scale),
        ),
        6.0 * scale,
        Theme::with_opacity(theme.panel_border, opacity),
    );
    ui.painter().line_segment(
        [base, pillar_top],
        egui::Stroke::new(10.0 * scale, Theme::with_opacity(theme.panel_border, opacity)),
    );

    // Beam rotated around the pillar top
    let half_beam = 260.0 * scale;
    let beam_dir = egui::vec2(angle.cos(), angle.sin());
    let left_end = pillar_top - beam_dir * half_beam;
    let right_end = pillar_top + beam_dir * half_beam;
    ui.painter().line_segment(
        [left_end, right_end],
        egui::Stroke::new(8.0 * scale, Theme::with_opacity(theme.muted, opacity)),
    );
    ui.painter().circle_filled(
        pillar_top,
        10.0 * scale,
        Theme::with_opacity(theme.muted, opacity),
    );

    // Pans hang straight down from the beam ends
    let pan_drop = 90.0 * scale;
    let pan_radius = 62.0 * scale;
    let labels = [
        slide.content.first().map(|i| i.text.as_str()).unwrap_or(""),
        slide.content.get(1).map(|i| i.text.as_str()).unwrap_or(""),
    ];
    for (end, label) in [(left_end, labels[0]), (right_end, labels[1])] {
        let pan_center = Pos2::new(end.x, end.y + pan_drop);
        ui.painter().line_segment(
            [end, Pos2::new(pan_center.x, pan_center.y - pan_radius)],
            egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.muted, opacity * 0.8)),
        );
        ui.painter().circle_filled(
            pan_center,
            pan_radius,
            Theme::with_opacity(theme.panel, opacity * 0.95),
        );
        ui.painter().circle_stroke(
            pan_center,
            pan_radius,
            egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.panel_border, opacity)),
        );
        text::draw_centered(
            ui,
            label,
            pan_center.x,
            pan_center.y - theme.small_size * scale * 0.7,
            FontId::proportional(theme.small_size * 0.85 * scale),
            Theme::with_opacity(theme.heading_color, opacity),
            pan_radius * 1.7,
        );
    }

    // Counterweight drops in once balanced
    if state.balanced() {
        let drop = ease_in_out((anim / 0.5).clamp(0.0, 1.0));
        let weight_center = Pos2::new(
            pillar_top.x,
            pillar_top.y - 120.0 * scale + drop * 70.0 * scale,
        );
        let weight_rect =
            egui::Rect::from_center_size(weight_center, egui::vec2(64.0 * scale, 64.0 * scale));
        ui.painter().rect_filled(
            weight_rect,
            12.0 * scale,
            Theme::with_opacity(theme.positive, opacity * drop),
        );
        text::draw_centered_line(
            ui,
            "\u{2696}",
            weight_center.x,
            weight_center.y - 16.0 * scale,
            FontId::proportional(28.0 * scale),
            Theme::with_opacity(theme.background, opacity * drop),
        );
        if let Some(third) = slide.content.get(2) {
            text::draw_centered_line(
                ui,
                &third.text,
                weight_center.x,
                weight_rect.bottom() + 10.0 * scale,
                FontId::proportional(theme.small_size * 0.8 * scale),
                Theme::with_opacity(theme.positive, opacity * drop),
            );
        }
    } else {
        text::draw_centered_line(
            ui,
            "Click to restore the balance",
            stage.center().x,
            stage.bottom() + 28.0 * scale,
            FontId::proportional(theme.body_size * 0.65 * scale),
            Theme::with_opacity(accent, opacity * 0.9),
        );
    }
}
