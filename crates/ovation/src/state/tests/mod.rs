mod case_study;
mod flip;
mod quiz;
mod reset;
mod timeline;
mod toggles;
mod toolbox;

use crate::deck::{CaseOption, LayoutKind, Slide, SlideItem};

/// Helper to create a bare SlideItem with just an id and text.
fn item(id: &str, text: &str) -> SlideItem {
    SlideItem {
        id: id.to_string(),
        text: text.to_string(),
        ..SlideItem::default()
    }
}

/// Helper to create a quiz question item.
fn question(id: &str, text: &str, is_correct: bool) -> SlideItem {
    SlideItem {
        is_correct: Some(is_correct),
        explanation: Some(format!("because {text}")),
        ..item(id, text)
    }
}

/// Helper to create a case option.
fn option(id: &str, text: &str, is_correct: bool) -> CaseOption {
    CaseOption {
        id: id.to_string(),
        text: text.to_string(),
        result: format!("outcome of {id}"),
        is_correct,
    }
}

/// Helper to create a slide with the given layout and content.
fn slide(layout: LayoutKind, content: Vec<SlideItem>) -> Slide {
    Slide {
        id: 0,
        title: "Test slide".to_string(),
        subtitle: None,
        layout,
        theme_color: None,
        content,
    }
}
