pub mod controller;

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Reserved item id marking the central node of a `diagram-hub` slide.
pub const HUB_ID: &str = "hub";

#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub transition: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    /// Declared slide count; must match `slides.len()` exactly.
    pub total_slides: usize,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub layout: LayoutKind,
    /// Opaque accent token resolved by the theme; not behaviorally significant.
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub content: Vec<SlideItem>,
}

/// The closed set of rendering templates. Tags outside this set deserialize
/// to `Unknown` and fall back to the title-only template at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    TitleOnly,
    BulletPoints,
    GridCards,
    SplitImage,
    CenteredQuote,
    DiagramHub,
    ProcessSteps,
    InteractiveQuiz,
    StatsDashboard,
    FlipCards,
    IcebergReveal,
    WordCloud,
    BalanceScale,
    ToolboxOrbit,
    CaseStudy,
    TimelineScrubber,
    ChatBubbles,
    #[serde(other)]
    Unknown,
}

/// One content entry. Layouts pick out the fields they understand and must
/// tolerate every other field being absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideItem {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub subtext: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub reality: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<CaseOption>>,
    #[serde(default)]
    pub timeline_date: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub size: Option<WordSize>,
}

/// Percent coordinates within the layout area.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseOption {
    pub id: String,
    pub text: String,
    pub result: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSize {
    Sm,
    Md,
    Lg,
    Xl,
}

impl WordSize {
    pub fn scale(self) -> f32 {
        match self {
            WordSize::Sm => 1.0,
            WordSize::Md => 1.3,
            WordSize::Lg => 1.6,
            WordSize::Xl => 2.0,
        }
    }
}

impl Slide {
    /// The designated hub item of a diagram slide, if present.
    pub fn hub_item(&self) -> Option<&SlideItem> {
        self.content.iter().find(|i| i.id == HUB_ID)
    }

    /// All non-hub items of a diagram slide, in declared order.
    pub fn leaf_items(&self) -> Vec<&SlideItem> {
        self.content.iter().filter(|i| i.id != HUB_ID).collect()
    }

    /// The branching options of a case-study slide.
    pub fn case_options(&self) -> &[CaseOption] {
        self.content
            .iter()
            .find_map(|i| i.options.as_deref())
            .unwrap_or(&[])
    }
}

/// Load and validate a deck file. YAML by default, JSON for `.json`.
pub fn load(path: &Path) -> Result<Deck> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let deck: Deck = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("Invalid deck JSON in {}", path.display()))?,
        _ => serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid deck YAML in {}", path.display()))?,
    };
    validate(&deck)?;
    Ok(deck)
}

/// Check the structural invariants of a deck. Violations are configuration
/// defects in the data file, reported at load time; nothing here is a
/// runtime-recoverable condition.
pub fn validate(deck: &Deck) -> Result<()> {
    if deck.slides.is_empty() {
        bail!("Deck contains no slides");
    }
    if deck.total_slides != deck.slides.len() {
        bail!(
            "Deck declares total_slides = {} but contains {} slides",
            deck.total_slides,
            deck.slides.len()
        );
    }

    for (index, slide) in deck.slides.iter().enumerate() {
        if slide.id as usize != index {
            bail!(
                "Slide at position {} has id {} (ids must match position)",
                index,
                slide.id
            );
        }

        let mut seen: Vec<&str> = Vec::with_capacity(slide.content.len());
        for item in &slide.content {
            if seen.contains(&item.id.as_str()) {
                bail!("Slide {}: duplicate item id '{}'", index, item.id);
            }
            seen.push(&item.id);
        }

        match slide.layout {
            LayoutKind::DiagramHub => {
                let hubs = slide.content.iter().filter(|i| i.id == HUB_ID).count();
                if hubs != 1 {
                    bail!(
                        "Slide {}: diagram-hub requires exactly one item with id '{}', found {}",
                        index,
                        HUB_ID,
                        hubs
                    );
                }
                for item in &slide.content {
                    if item.id != HUB_ID && item.position.is_none() {
                        bail!(
                            "Slide {}: diagram leaf '{}' is missing a position",
                            index,
                            item.id
                        );
                    }
                }
            }
            LayoutKind::CaseStudy => {
                let carriers = slide
                    .content
                    .iter()
                    .filter(|i| i.options.is_some())
                    .count();
                if carriers != 1 {
                    bail!(
                        "Slide {}: case-study requires exactly one item carrying options, found {}",
                        index,
                        carriers
                    );
                }
                if slide.case_options().is_empty() {
                    bail!("Slide {}: case-study options list is empty", index);
                }
            }
            LayoutKind::InteractiveQuiz => {
                if slide.content.is_empty() {
                    bail!("Slide {}: interactive-quiz requires at least one question", index);
                }
            }
            LayoutKind::TimelineScrubber => {
                if slide.content.is_empty() {
                    bail!("Slide {}: timeline-scrubber requires at least one entry", index);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_deck(yaml: &str) -> Result<Deck> {
        let deck: Deck = serde_yaml::from_str(yaml)?;
        validate(&deck)?;
        Ok(deck)
    }

    #[test]
    fn sample_deck_parses_and_validates() {
        let contents = include_str!("../../../../sample-decks/field-guide.yaml");
        let deck: Deck = serde_yaml::from_str(contents).expect("sample deck should parse");
        validate(&deck).expect("sample deck should validate");
        assert_eq!(deck.total_slides, deck.slides.len());
        assert!(matches!(deck.slides[0].layout, LayoutKind::TitleOnly));
    }

    #[test]
    fn sample_deck_covers_every_layout() {
        let contents = include_str!("../../../../sample-decks/field-guide.yaml");
        let deck: Deck = serde_yaml::from_str(contents).unwrap();
        let all = [
            LayoutKind::TitleOnly,
            LayoutKind::BulletPoints,
            LayoutKind::GridCards,
            LayoutKind::SplitImage,
            LayoutKind::CenteredQuote,
            LayoutKind::DiagramHub,
            LayoutKind::ProcessSteps,
            LayoutKind::InteractiveQuiz,
            LayoutKind::StatsDashboard,
            LayoutKind::FlipCards,
            LayoutKind::IcebergReveal,
            LayoutKind::WordCloud,
            LayoutKind::BalanceScale,
            LayoutKind::ToolboxOrbit,
            LayoutKind::CaseStudy,
            LayoutKind::TimelineScrubber,
            LayoutKind::ChatBubbles,
        ];
        for kind in all {
            assert!(
                deck.slides.iter().any(|s| s.layout == kind),
                "sample deck is missing layout {kind:?}"
            );
        }
    }

    #[test]
    fn unknown_layout_tag_degrades_to_unknown() {
        let deck = minimal_deck(
            "total_slides: 1\n\
             slides:\n\
             - id: 0\n  \
               title: Hello\n  \
               layout: hologram-carousel\n",
        )
        .unwrap();
        assert_eq!(deck.slides[0].layout, LayoutKind::Unknown);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let err = minimal_deck(
            "total_slides: 3\n\
             slides:\n\
             - id: 0\n  \
               title: Only one\n  \
               layout: title-only\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("total_slides"));
    }

    #[test]
    fn out_of_order_ids_are_rejected() {
        let err = minimal_deck(
            "total_slides: 2\n\
             slides:\n\
             - id: 0\n  \
               title: First\n  \
               layout: title-only\n\
             - id: 5\n  \
               title: Second\n  \
               layout: title-only\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("ids must match position"));
    }

    #[test]
    fn diagram_without_hub_is_rejected() {
        let err = minimal_deck(
            "total_slides: 1\n\
             slides:\n\
             - id: 0\n  \
               title: Web\n  \
               layout: diagram-hub\n  \
               content:\n  \
               - id: a\n    \
                 text: Leaf\n    \
                 position: { x: 20, y: 30 }\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly one item with id 'hub'"));
    }

    #[test]
    fn diagram_leaf_requires_position() {
        let err = minimal_deck(
            "total_slides: 1\n\
             slides:\n\
             - id: 0\n  \
               title: Web\n  \
               layout: diagram-hub\n  \
               content:\n  \
               - id: hub\n    \
                 text: Center\n    \
                 position: { x: 50, y: 50 }\n  \
               - id: a\n    \
                 text: Leaf\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing a position"));
    }

    #[test]
    fn case_study_requires_one_options_carrier() {
        let err = minimal_deck(
            "total_slides: 1\n\
             slides:\n\
             - id: 0\n  \
               title: Case\n  \
               layout: case-study\n  \
               content:\n  \
               - id: scenario\n    \
                 text: A student stops attending\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly one item carrying options"));
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let err = minimal_deck(
            "total_slides: 1\n\
             slides:\n\
             - id: 0\n  \
               title: Dup\n  \
               layout: bullet-points\n  \
               content:\n  \
               - id: a\n    \
                 text: One\n  \
               - id: a\n    \
                 text: Two\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate item id"));
    }

    #[test]
    fn optional_fields_default_cleanly() {
        let deck = minimal_deck(
            "total_slides: 1\n\
             slides:\n\
             - id: 0\n  \
               title: Sparse\n  \
               layout: bullet-points\n  \
               content:\n  \
               - id: a\n    \
                 text: Just text\n",
        )
        .unwrap();
        let item = &deck.slides[0].content[0];
        assert!(item.subtext.is_none());
        assert!(item.icon.is_none());
        assert!(item.connections.is_empty());
        assert!(item.options.is_none());
    }
}
