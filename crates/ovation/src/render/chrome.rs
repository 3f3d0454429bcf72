use eframe::egui::{self, FontId, Pos2, Sense, StrokeKind};

use crate::theme::Theme;

/// What the navigation bar wants the controller to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    Next,
    Prev,
}

/// Draw the bottom navigation chrome: prev/next controls, the
/// `current + 1 / N` counter, the proportional progress fill and the deck
/// footer. Buttons at their boundary are dimmed and inert, so neither input
/// surface can move past the first or last slide.
pub fn draw_nav_bar(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    index: usize,
    len: usize,
    progress: f32,
    footer: Option<&str>,
) -> NavAction {
    let bar_width = 520.0 * scale;
    let bar_height = 72.0 * scale;
    let bar_rect = egui::Rect::from_center_size(
        Pos2::new(rect.center().x, rect.bottom() - 64.0 * scale),
        egui::vec2(bar_width, bar_height),
    );

    ui.painter().rect_filled(
        bar_rect,
        16.0 * scale,
        Theme::with_opacity(theme.panel, 0.92),
    );
    ui.painter().rect_stroke(
        bar_rect,
        16.0 * scale,
        egui::Stroke::new(1.0, theme.panel_border),
        StrokeKind::Outside,
    );

    let button_size = 44.0 * scale;
    let inset = 20.0 * scale;
    let button_y = bar_rect.top() + 12.0 * scale;

    let prev_rect = egui::Rect::from_min_size(
        Pos2::new(bar_rect.left() + inset, button_y),
        egui::vec2(button_size, button_size),
    );
    let next_rect = egui::Rect::from_min_size(
        Pos2::new(bar_rect.right() - inset - button_size, button_y),
        egui::vec2(button_size, button_size),
    );

    let mut action = NavAction::None;
    if draw_button(ui, theme, prev_rect, "\u{2039}", index > 0, scale) {
        action = NavAction::Prev;
    }
    if draw_button(ui, theme, next_rect, "\u{203A}", index + 1 < len, scale) {
        action = NavAction::Next;
    }

    // Counter between the buttons
    let counter = format!("{} / {}", index + 1, len);
    let counter_galley = ui.painter().layout_no_wrap(
        counter,
        FontId::monospace(22.0 * scale),
        theme.foreground,
    );
    let counter_pos = Pos2::new(
        bar_rect.center().x - counter_galley.rect.width() / 2.0,
        button_y + (button_size - counter_galley.rect.height()) / 2.0,
    );
    ui.painter()
        .galley(counter_pos, counter_galley, theme.foreground);

    // Progress fill along the bottom of the bar
    let track_rect = egui::Rect::from_min_max(
        Pos2::new(bar_rect.left() + inset, bar_rect.bottom() - 10.0 * scale),
        Pos2::new(bar_rect.right() - inset, bar_rect.bottom() - 6.0 * scale),
    );
    ui.painter().rect_filled(
        track_rect,
        2.0 * scale,
        Theme::with_opacity(theme.panel_border, 0.8),
    );
    let fill_rect = egui::Rect::from_min_max(
        track_rect.min,
        Pos2::new(
            track_rect.left() + track_rect.width() * progress.clamp(0.0, 1.0),
            track_rect.bottom(),
        ),
    );
    ui.painter().rect_filled(fill_rect, 2.0 * scale, theme.accent);

    // Deck footer, below the bar
    if let Some(footer) = footer {
        let color = Theme::with_opacity(theme.muted, 0.7);
        let galley =
            ui.painter()
                .layout_no_wrap(footer.to_string(), FontId::proportional(14.0 * scale), color);
        let pos = Pos2::new(
            rect.center().x - galley.rect.width() / 2.0,
            bar_rect.bottom() + 8.0 * scale,
        );
        ui.painter().galley(pos, galley, color);
    }

    action
}

/// One chevron button. Returns true on click; a disabled button draws dimmed
/// and never reports a click.
fn draw_button(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    glyph: &str,
    enabled: bool,
    scale: f32,
) -> bool {
    let response = ui.interact(rect, ui.id().with(("nav", glyph)), Sense::click());
    let hovered = enabled && response.hovered();

    let fill = if !enabled {
        Theme::with_opacity(theme.panel_border, 0.3)
    } else if hovered {
        Theme::with_opacity(theme.accent, 0.25)
    } else {
        Theme::with_opacity(theme.panel_border, 0.6)
    };
    ui.painter().rect_filled(rect, 10.0 * scale, fill);

    let glyph_color = if enabled {
        theme.heading_color
    } else {
        Theme::with_opacity(theme.muted, 0.4)
    };
    let galley = ui.painter().layout_no_wrap(
        glyph.to_string(),
        FontId::proportional(30.0 * scale),
        glyph_color,
    );
    let pos = Pos2::new(
        rect.center().x - galley.rect.width() / 2.0,
        rect.center().y - galley.rect.height() / 2.0,
    );
    ui.painter().galley(pos, galley, glyph_color);

    enabled && response.clicked()
}
