use std::time::Instant;

const TRANSITION_DURATION: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    SlideHorizontal,
    Fade,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::SlideHorizontal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SlideHorizontal => "Slide",
            Self::Fade => "Fade",
            Self::None => "None",
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            Self::SlideHorizontal => Self::Fade,
            Self::Fade => Self::None,
            Self::None => Self::SlideHorizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Backward,
}

/// A running slide change. Purely cosmetic: the controller index has already
/// moved when one of these starts, and no core behavior waits on it.
pub struct ActiveTransition {
    pub from: usize,
    pub to: usize,
    pub kind: TransitionKind,
    pub direction: TransitionDirection,
    start: Instant,
}

impl ActiveTransition {
    pub fn new(
        from: usize,
        to: usize,
        kind: TransitionKind,
        direction: TransitionDirection,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            direction,
            start: Instant::now(),
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let raw = (self.start.elapsed().as_secs_f32() / TRANSITION_DURATION).clamp(0.0, 1.0);
        ease_in_out(raw)
    }

    pub fn is_complete(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TRANSITION_DURATION
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn easing_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn kind_cycle_visits_all_and_wraps() {
        let mut kind = TransitionKind::SlideHorizontal;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(kind);
            kind = kind.cycled();
        }
        assert_eq!(kind, TransitionKind::SlideHorizontal);
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn unknown_transition_name_defaults_to_slide() {
        assert_eq!(
            TransitionKind::from_name("teleport"),
            TransitionKind::SlideHorizontal
        );
    }
}
