use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::deck::{Slide, SlideItem};
use crate::icons;
use crate::render::text;
use crate::render::transition::ease_in_out;
use crate::state::HubDiagram;
use crate::theme::Theme;

const EXPAND_SECONDS: f32 = 0.5;

/// Diagram-hub layout: a central hub node with leaf nodes that fan out to
/// their declared percent positions when the hub is clicked. Edges are drawn
/// only toward expansion; collapsing pulls every leaf back onto the hub.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    hub: &mut HubDiagram,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    anim: f32,
    scale: f32,
) {
    let accent = theme.slide_accent(slide.theme_color.as_deref());
    let top = text::draw_header(ui, slide, theme, rect, opacity, scale);

    let Some(hub_item) = slide.hub_item() else {
        return;
    };
    let leaves = slide.leaf_items();

    // Canvas for percent coordinates
    let canvas = egui::Rect::from_min_max(
        Pos2::new(rect.left() + 120.0 * scale, top),
        Pos2::new(rect.right() - 120.0 * scale, rect.bottom() - 150.0 * scale),
    );
    let at = |item: &SlideItem| -> Pos2 {
        let p = item.position.unwrap_or(crate::deck::Position { x: 50.0, y: 50.0 });
        Pos2::new(
            canvas.left() + canvas.width() * p.x / 100.0,
            canvas.top() + canvas.height() * p.y / 100.0,
        )
    };

    let hub_pos = at(hub_item);
    // Eased expansion amount: 1 = fanned out, 0 = collapsed onto the hub
    let t = ease_in_out((anim / EXPAND_SECONDS).clamp(0.0, 1.0));
    let spread = if hub.expanded() { t } else { 1.0 - t };

    // Edges from hub to each leaf, visible only while spread out
    if spread > 0.01 {
        for leaf in &leaves {
            let leaf_pos = leaf_position(hub_pos, at(leaf), spread);
            ui.painter().line_segment(
                [hub_pos, leaf_pos],
                egui::Stroke::new(
                    2.0 * scale,
                    Theme::with_opacity(accent, opacity * spread * 0.55),
                ),
            );
        }
    }

    // Leaf nodes
    let leaf_size = egui::vec2(170.0 * scale, 110.0 * scale);
    for leaf in &leaves {
        let alpha = opacity * spread;
        if alpha <= 0.01 {
            continue;
        }
        let pos = leaf_position(hub_pos, at(leaf), spread);
        let leaf_rect = egui::Rect::from_center_size(pos, leaf_size * (0.5 + 0.5 * spread));

        ui.painter().rect_filled(
            leaf_rect,
            14.0 * scale,
            Theme::with_opacity(theme.panel, alpha * 0.95),
        );
        ui.painter().rect_stroke(
            leaf_rect,
            14.0 * scale,
            egui::Stroke::new(1.0, Theme::with_opacity(theme.panel_border, alpha)),
            StrokeKind::Outside,
        );

        let mut y = leaf_rect.top() + 10.0 * scale;
        y += text::draw_centered_line(
            ui,
            icons::glyph(leaf.icon.as_deref()),
            leaf_rect.center().x,
            y,
            FontId::proportional(22.0 * scale),
            Theme::with_opacity(accent, alpha),
        );
        y += 4.0 * scale;
        y += text::draw_centered(
            ui,
            &leaf.text,
            leaf_rect.center().x,
            y,
            FontId::proportional(theme.small_size * 0.95 * scale),
            Theme::with_opacity(theme.heading_color, alpha),
            leaf_rect.width() - 16.0 * scale,
        );
        if let Some(subtext) = &leaf.subtext {
            y += 2.0 * scale;
            text::draw_centered(
                ui,
                subtext,
                leaf_rect.center().x,
                y,
                FontId::proportional(theme.small_size * 0.7 * scale),
                Theme::with_opacity(theme.muted, alpha),
                leaf_rect.width() - 16.0 * scale,
            );
        }
    }

    // Hub node on top, clickable
    let hub_radius = 84.0 * scale;
    let hub_rect = egui::Rect::from_center_size(
        hub_pos,
        egui::vec2(hub_radius * 2.0, hub_radius * 2.0),
    );
    let response = ui.interact(hub_rect, ui.id().with("diagram-hub"), Sense::click());
    if response.clicked() {
        hub.toggle();
    }

    let hover_grow = if response.hovered() { 1.06 } else { 1.0 };
    ui.painter().circle_filled(
        hub_pos,
        hub_radius * hover_grow,
        Theme::with_opacity(theme.panel, opacity),
    );
    ui.painter().circle_stroke(
        hub_pos,
        hub_radius * hover_grow,
        egui::Stroke::new(2.5 * scale, Theme::with_opacity(accent, opacity)),
    );
    // Dashed-feel outer ring
    ui.painter().circle_stroke(
        hub_pos,
        hub_radius * 1.18,
        egui::Stroke::new(1.0, Theme::with_opacity(accent, opacity * 0.35)),
    );

    let mut y = hub_pos.y - 34.0 * scale;
    y += text::draw_centered_line(
        ui,
        icons::glyph(hub_item.icon.as_deref()),
        hub_pos.x,
        y,
        FontId::proportional(30.0 * scale),
        Theme::with_opacity(accent, opacity),
    );
    y += 6.0 * scale;
    text::draw_centered(
        ui,
        &hub_item.text,
        hub_pos.x,
        y,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.heading_color, opacity),
        hub_radius * 1.7,
    );

    if !hub.expanded() {
        text::draw_centered_line(
            ui,
            hub_item.subtext.as_deref().unwrap_or("Click to expand"),
            hub_pos.x,
            hub_pos.y + hub_radius + 14.0 * scale,
            FontId::proportional(theme.small_size * 0.8 * scale),
            Theme::with_opacity(accent, opacity * 0.8),
        );
    }
}

/// Where a leaf sits for a given spread: on the hub at 0, at its own
/// declared position at 1.
fn leaf_position(hub: Pos2, declared: Pos2, spread: f32) -> Pos2 {
    hub + (declared - hub) * spread
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_leaves_sit_on_the_hub() {
        let hub = Pos2::new(400.0, 300.0);
        let declared = Pos2::new(700.0, 100.0);
        assert_eq!(leaf_position(hub, declared, 0.0), hub);
    }

    #[test]
    fn expanded_leaves_reach_their_declared_position() {
        let hub = Pos2::new(400.0, 300.0);
        let declared = Pos2::new(700.0, 100.0);
        assert_eq!(leaf_position(hub, declared, 1.0), declared);
    }

    #[test]
    fn spread_interpolates_between_hub_and_position() {
        let hub = Pos2::new(0.0, 0.0);
        let declared = Pos2::new(100.0, 50.0);
        let mid = leaf_position(hub, declared, 0.5);
        assert_eq!(mid, Pos2::new(50.0, 25.0));
    }
}
