use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::deck::{self, Deck};
use crate::deck::controller::DeckController;
use crate::render;
use crate::render::chrome::{self, NavAction};
use crate::render::transition::{ActiveTransition, TransitionDirection, TransitionKind};
use crate::state::SlideState;
use crate::theme::Theme;

/// How long cosmetic entrance animations keep requesting repaints.
const SETTLE_SECONDS: f32 = 6.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct PresentationApp {
    deck: Deck,
    controller: DeckController,
    /// Interaction state owned by the current slide's template. Rebuilt on
    /// every navigation; nothing else reads or writes it.
    slide_state: SlideState,
    theme: Theme,
    default_transition: TransitionKind,
    transition: Option<ActiveTransition>,
    /// When the current slide became current (entrance animations).
    entered: Instant,
    /// When the slide's interaction state last changed (toggle animations).
    state_changed: Instant,
    show_hud: bool,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
}

impl PresentationApp {
    fn new(deck: Deck, theme: Theme, default_transition: TransitionKind) -> Self {
        let controller = DeckController::new(deck.slides.len());
        let slide_state = SlideState::for_slide(&deck.slides[0]);
        let now = Instant::now();
        Self {
            deck,
            controller,
            slide_state,
            theme,
            default_transition,
            transition: None,
            entered: now,
            state_changed: now,
            show_hud: false,
            toast: None,
            last_esc: None,
        }
    }

    /// The index change already happened on the controller; this resets the
    /// per-slide state and starts the cosmetic transition.
    fn slide_changed(&mut self, from: usize, direction: TransitionDirection) {
        let to = self.controller.index();
        self.slide_state = SlideState::for_slide(&self.deck.slides[to]);
        let now = Instant::now();
        self.entered = now;
        self.state_changed = now;
        self.transition = Some(ActiveTransition::new(
            from,
            to,
            self.default_transition,
            direction,
        ));
    }

    fn navigate_next(&mut self) {
        if self.transition.is_some() {
            return;
        }
        let from = self.controller.index();
        if self.controller.next() {
            self.slide_changed(from, TransitionDirection::Forward);
        }
    }

    fn navigate_prev(&mut self) {
        if self.transition.is_some() {
            return;
        }
        let from = self.controller.index();
        if self.controller.prev() {
            self.slide_changed(from, TransitionDirection::Backward);
        }
    }

    fn jump_to(&mut self, index: usize) {
        if self.transition.is_some() {
            return;
        }
        let from = self.controller.index();
        if self.controller.go_to(index) {
            let direction = if index > from {
                TransitionDirection::Forward
            } else {
                TransitionDirection::Backward
            };
            self.slide_changed(from, direction);
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn cycle_transition(&mut self) {
        self.default_transition = self.default_transition.cycled();
        self.toast = Some(Toast::new(format!(
            "Transition: {}",
            self.default_transition.name()
        )));
    }

    fn draw_slide(
        &mut self,
        ui: &egui::Ui,
        index: usize,
        rect: egui::Rect,
        opacity: f32,
        scale: f32,
    ) {
        if index >= self.deck.slides.len() {
            return;
        }
        let age = self.entered.elapsed().as_secs_f32();
        let anim = self.state_changed.elapsed().as_secs_f32();
        if index == self.controller.index() {
            // Split borrow: the slide is read-only, the state is the
            // template's to mutate.
            let slide = &self.deck.slides[index];
            render::render_slide(
                ui,
                slide,
                &mut self.slide_state,
                &self.theme,
                rect,
                opacity,
                age,
                anim,
                scale,
            );
        } else {
            // Outgoing slide during a transition: drawn with a throwaway
            // initial state, so its interactions are visually reset and inert.
            let slide = &self.deck.slides[index];
            let mut temp = SlideState::for_slide(slide);
            render::render_slide(
                ui, slide, &mut temp, &self.theme, rect, opacity, age, anim, scale,
            );
        }
    }

    fn draw_presentation(&mut self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        if let Some(t) = self.transition.take() {
            let progress = t.progress();
            match t.kind {
                TransitionKind::Fade => {
                    self.draw_slide(ui, t.from, rect, 1.0 - progress, scale);
                    self.draw_slide(ui, t.to, rect, progress, scale);
                }
                TransitionKind::SlideHorizontal => {
                    let w = rect.width();
                    let sign = match t.direction {
                        TransitionDirection::Forward => -1.0,
                        TransitionDirection::Backward => 1.0,
                    };
                    let from_offset = sign * progress * w;
                    let to_offset = from_offset - sign * w;

                    let from_rect = rect.translate(egui::vec2(from_offset, 0.0));
                    let to_rect = rect.translate(egui::vec2(to_offset, 0.0));

                    self.draw_slide(ui, t.from, from_rect, 1.0, scale);
                    self.draw_slide(ui, t.to, to_rect, 1.0, scale);
                }
                TransitionKind::None => {
                    self.draw_slide(ui, t.to, rect, 1.0, scale);
                }
            }
            ctx.request_repaint();
            self.transition = Some(t);
        } else {
            let index = self.controller.index();
            self.draw_slide(ui, index, rect, 1.0, scale);
        }
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            // Quit: Q from anywhere
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // ESC double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Fullscreen toggle: F
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            // Theme toggle: D
            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }

            // Cycle transition: T
            if i.key_pressed(egui::Key::T) {
                self.cycle_transition();
                return;
            }

            // Toggle HUD: H
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
                return;
            }

            // Forward: Right, Space
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                self.navigate_next();
            }
            // Backward: Left
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.navigate_prev();
            }
            // Home/End jump
            if i.key_pressed(egui::Key::Home) {
                self.jump_to(0);
            }
            if i.key_pressed(egui::Key::End) {
                self.jump_to(self.controller.len() - 1);
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        // Complete transition
        if self.transition.as_ref().is_some_and(|t| t.is_complete()) {
            self.transition = None;
        }

        // Expire toast
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = render::compute_scale(rect);

                // Detect interaction-state changes made by the template this
                // frame, to restart the toggle animation clock.
                let before = self.slide_state.clone();
                self.draw_presentation(ui, ctx, rect, scale);
                if before != self.slide_state {
                    self.state_changed = Instant::now();
                }

                // Navigation chrome; inert while a transition runs
                let action = chrome::draw_nav_bar(
                    ui,
                    &self.theme,
                    rect,
                    scale,
                    self.controller.index(),
                    self.controller.len(),
                    self.controller.progress(),
                    self.deck.footer.as_deref(),
                );
                match action {
                    NavAction::Next => self.navigate_next(),
                    NavAction::Prev => self.navigate_prev(),
                    NavAction::None => {}
                }

                // Toast notification
                if let Some(ref toast) = self.toast {
                    let opacity = toast.opacity();
                    if opacity > 0.0 {
                        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
                        let toast_bg = Theme::with_opacity(self.theme.panel, opacity * 0.9);
                        let galley = ui.painter().layout_no_wrap(
                            toast.message.clone(),
                            egui::FontId::proportional(20.0 * scale),
                            toast_color,
                        );
                        let padding = 16.0 * scale;
                        let toast_rect = egui::Rect::from_min_size(
                            egui::pos2(
                                rect.center().x - galley.rect.width() / 2.0 - padding,
                                rect.top() + 40.0 * scale,
                            ),
                            egui::vec2(
                                galley.rect.width() + padding * 2.0,
                                galley.rect.height() + padding * 2.0,
                            ),
                        );
                        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
                        let text_pos =
                            egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
                        ui.painter().galley(text_pos, galley, toast_color);
                        ctx.request_repaint();
                    }
                }

                if self.show_hud {
                    draw_hud(ui, &self.theme, rect, scale);
                }
            });

        // Keep repainting while entrance/toggle animations play out
        if self.entered.elapsed().as_secs_f32() < SETTLE_SECONDS
            || self.state_changed.elapsed().as_secs_f32() < 1.0
        {
            ctx.request_repaint();
        }
    }
}

fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("Space / \u{2192}", "Next slide"),
        ("\u{2190}", "Previous slide"),
        ("Home / End", "First / last slide"),
        ("Click", "Interact with the slide"),
        ("T", "Cycle transition"),
        ("D", "Toggle theme"),
        ("F", "Toggle fullscreen"),
        ("H", "Toggle this HUD"),
        ("Q / Esc \u{00d7}2", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.panel, 0.92);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 400.0 * scale;

    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));

    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;

    for (key, desc) in &shortcuts {
        let key_galley = ui.painter().layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding, y),
            key_galley,
            key_color,
        );

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(15.0 * scale),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding + 170.0 * scale, y),
            desc_galley,
            text_color,
        );

        y += line_height;
    }
}

pub fn run(file: PathBuf, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let deck = deck::load(&file)?;

    let config = Config::load_or_default();
    let defaults = config.defaults.as_ref();

    // Deck metadata wins over user config for theme and transition
    let theme_name = deck
        .theme
        .clone()
        .or_else(|| defaults.and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "dark".to_string());
    let theme = Theme::from_name(&theme_name);

    let transition_name = deck
        .transition
        .clone()
        .or_else(|| defaults.and_then(|d| d.transition.clone()))
        .unwrap_or_else(|| "slide".to_string());
    let default_transition = TransitionKind::from_name(&transition_name);

    // CLI flag overrides the configured start slide; both are 1-indexed
    let initial_slide = start_slide
        .or_else(|| {
            defaults
                .and_then(|d| d.start_mode.as_deref())
                .and_then(|m| m.parse::<usize>().ok())
        })
        .map(|s| s.saturating_sub(1))
        .unwrap_or(0)
        .min(deck.slides.len() - 1);

    let title = deck.title.clone().unwrap_or_else(|| {
        format!(
            "ovation \u{2014} {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        )
    });

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = PresentationApp::new(deck, theme, default_transition);
            if initial_slide > 0 {
                app.controller.go_to(initial_slide);
                app.slide_state = SlideState::for_slide(&app.deck.slides[initial_slide]);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
