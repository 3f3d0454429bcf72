use eframe::egui::{self, FontId, Pos2};

use crate::deck::{Slide, WordSize};
use crate::render::text;
use crate::theme::Theme;

/// Fixed percent positions spread to avoid overlap, reused cyclically when a
/// deck supplies more words than slots.
const CLOUD_POSITIONS: [(f32, f32); 13] = [
    (20.0, 20.0),
    (50.0, 15.0),
    (80.0, 20.0),
    (10.0, 40.0),
    (90.0, 40.0),
    (30.0, 50.0),
    (50.0, 50.0),
    (70.0, 50.0),
    (20.0, 70.0),
    (50.0, 85.0),
    (80.0, 70.0),
    (70.0, 30.0),
    (40.0, 65.0),
];

/// Word-cloud layout: floating word bubbles whose size tag drives emphasis.
/// The largest words get the warning tint; position comes from the fixed
/// table, not the data.
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
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let field = egui::Rect::from_min_max(
        Pos2::new(rect.left() + 120.0 * scale, top),
        Pos2::new(rect.right() - 120.0 * scale, rect.bottom() - 150.0 * scale),
    );

    for (i, item) in slide.content.iter().enumerate() {
        let (px, py) = CLOUD_POSITIONS[i % CLOUD_POSITIONS.len()];
        let size = item.size.unwrap_or(WordSize::Sm);
        let emphasis = size.scale();

        // Gentle drift, phase-shifted per word
        let phase = i as f32 * 1.7;
        let drift = egui::vec2(
            (age * 0.6 + phase).sin() * 8.0 * scale,
            (age * 0.45 + phase).cos() * 10.0 * scale,
        );
        let center = Pos2::new(
            field.left() + field.width() * px / 100.0,
            field.top() + field.height() * py / 100.0,
        ) + drift;

        let pop = ((age - i as f32 * 0.12) / 0.3).clamp(0.0, 1.0);
        let alpha = opacity * pop;
        if alpha <= 0.0 {
            continue;
        }

        let tint = match size {
            WordSize::Xl => theme.negative,
            WordSize::Lg => theme.slide_accent(Some("orange")),
            _ => theme.muted,
        };

        let galley = ui.painter().layout_no_wrap(
            item.text.clone(),
            FontId::proportional(theme.small_size * emphasis * scale),
            Theme::with_opacity(theme.heading_color, alpha),
        );
        let bubble = egui::Rect::from_center_size(
            center,
            galley.rect.size() + egui::vec2(44.0 * scale, 26.0 * scale) * emphasis.sqrt(),
        );
        ui.painter().rect_filled(
            bubble,
            bubble.height() / 2.0,
            Theme::with_opacity(tint, alpha * 0.18),
        );
        ui.painter().rect_stroke(
            bubble,
            bubble.height() / 2.0,
            egui::Stroke::new(1.0, Theme::with_opacity(tint, alpha * 0.6)),
            egui::StrokeKind::Outside,
        );
        ui.painter().galley(
            Pos2::new(
                center.x - galley.rect.width() / 2.0,
                center.y - galley.rect.height() / 2.0,
            ),
            galley,
            Theme::with_opacity(theme.heading_color, alpha),
        );
    }
}
