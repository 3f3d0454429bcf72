//! Per-slide interaction state.
//!
//! Each stateful template owns one small machine, created fresh when its
//! slide becomes current and discarded on every navigation. Transitions are
//! driven by trusted UI events; a violated guard is always a silent no-op,
//! never an error.

pub mod case_study;
pub mod flip;
pub mod quiz;
pub mod timeline;
pub mod toggles;
pub mod toolbox;

#[cfg(test)]
mod tests;

pub use case_study::{CasePhase, CaseStudy};
pub use flip::FlipSet;
pub use quiz::{Quiz, QuizPhase};
pub use timeline::Timeline;
pub use toggles::{BalanceScale, HubDiagram, Iceberg};
pub use toolbox::Toolbox;

use crate::deck::{LayoutKind, Slide};

/// Interaction state for the currently displayed slide.
///
/// `Static` covers the templates with no interaction of their own. The rest
/// wrap exactly one machine each; the renderer hands the machine to the
/// matching template and nothing else ever touches it.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideState {
    Static,
    Flip(FlipSet),
    Quiz(Quiz),
    Case(CaseStudy),
    Iceberg(Iceberg),
    Balance(BalanceScale),
    Toolbox(Toolbox),
    Timeline(Timeline),
    Hub(HubDiagram),
}

impl SlideState {
    /// Build the initial state for a slide. Called on every navigation, so
    /// flipped cards, quiz progress and the like never survive a slide change.
    pub fn for_slide(slide: &Slide) -> Self {
        match slide.layout {
            LayoutKind::FlipCards => Self::Flip(FlipSet::default()),
            LayoutKind::InteractiveQuiz => Self::Quiz(Quiz::new(slide.content.len())),
            LayoutKind::CaseStudy => Self::Case(CaseStudy::new(slide.case_options().len())),
            LayoutKind::IcebergReveal => Self::Iceberg(Iceberg::default()),
            LayoutKind::BalanceScale => Self::Balance(BalanceScale::default()),
            LayoutKind::ToolboxOrbit => Self::Toolbox(Toolbox::default()),
            LayoutKind::TimelineScrubber => Self::Timeline(Timeline::new(slide.content.len())),
            LayoutKind::DiagramHub => Self::Hub(HubDiagram::default()),
            _ => Self::Static,
        }
    }
}
