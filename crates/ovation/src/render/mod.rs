pub mod chrome;
pub mod layouts;
pub mod text;
pub mod transition;

use eframe::egui;

use crate::deck::{LayoutKind, Slide};
use crate::state::SlideState;
use crate::theme::Theme;

/// The layout registry: one closed match from tag to template. `Unknown`
/// tags (and a state/layout mismatch, which only a bug could produce) land
/// on the title-only template — this dispatch never fails.
///
/// `age` is seconds since the slide became current and `anim` seconds since
/// the slide's interaction state last changed; both drive cosmetic easing
/// only.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    state: &mut SlideState,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    age: f32,
    anim: f32,
    scale: f32,
) {
    match slide.layout {
        LayoutKind::TitleOnly | LayoutKind::Unknown => {
            layouts::title::render(ui, slide, theme, rect, opacity, scale);
        }
        LayoutKind::BulletPoints => {
            layouts::bullets::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::GridCards => {
            layouts::grid_cards::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::SplitImage => {
            layouts::split_image::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::CenteredQuote => {
            layouts::quote::render(ui, slide, theme, rect, opacity, scale);
        }
        LayoutKind::ProcessSteps => {
            layouts::process::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::StatsDashboard => {
            layouts::stats::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::WordCloud => {
            layouts::word_cloud::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::ChatBubbles => {
            layouts::chat::render(ui, slide, theme, rect, opacity, age, scale);
        }
        LayoutKind::DiagramHub => {
            if let SlideState::Hub(hub) = state {
                layouts::diagram::render(ui, slide, hub, theme, rect, opacity, anim, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::InteractiveQuiz => {
            if let SlideState::Quiz(quiz) = state {
                layouts::quiz::render(ui, slide, quiz, theme, rect, opacity, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::FlipCards => {
            if let SlideState::Flip(set) = state {
                layouts::flip_cards::render(ui, slide, set, theme, rect, opacity, anim, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::IcebergReveal => {
            if let SlideState::Iceberg(berg) = state {
                layouts::iceberg::render(ui, slide, berg, theme, rect, opacity, anim, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::BalanceScale => {
            if let SlideState::Balance(scale_state) = state {
                layouts::balance::render(ui, slide, scale_state, theme, rect, opacity, anim, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::ToolboxOrbit => {
            if let SlideState::Toolbox(toolbox) = state {
                layouts::toolbox::render(ui, slide, toolbox, theme, rect, opacity, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::CaseStudy => {
            if let SlideState::Case(case) = state {
                layouts::case_study::render(ui, slide, case, theme, rect, opacity, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
        LayoutKind::TimelineScrubber => {
            if let SlideState::Timeline(timeline) = state {
                layouts::timeline::render(ui, slide, timeline, theme, rect, opacity, scale);
            } else {
                layouts::title::render(ui, slide, theme, rect, opacity, scale);
            }
        }
    }
}

/// Scale factor relative to a 1920x1080 reference viewport.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / 1920.0).min(rect.height() / 1080.0)
}
