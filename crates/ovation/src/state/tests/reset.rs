use super::{item, option, question, slide};
use crate::deck::{LayoutKind, SlideItem};
use crate::state::{CasePhase, QuizPhase, SlideState};

#[test]
fn each_layout_gets_its_own_machine() {
    let cases = [
        (LayoutKind::FlipCards, "Flip"),
        (LayoutKind::InteractiveQuiz, "Quiz"),
        (LayoutKind::CaseStudy, "Case"),
        (LayoutKind::IcebergReveal, "Iceberg"),
        (LayoutKind::BalanceScale, "Balance"),
        (LayoutKind::ToolboxOrbit, "Toolbox"),
        (LayoutKind::TimelineScrubber, "Timeline"),
        (LayoutKind::DiagramHub, "Hub"),
    ];
    for (layout, expect) in cases {
        let content = match layout {
            LayoutKind::InteractiveQuiz => vec![question("q1", "water is wet", true)],
            LayoutKind::CaseStudy => vec![SlideItem {
                options: Some(vec![option("a", "wait", false)]),
                ..item("scenario", "a quiet student")
            }],
            _ => vec![item("a", "one")],
        };
        let state = SlideState::for_slide(&slide(layout, content));
        let name = match state {
            SlideState::Static => "Static",
            SlideState::Flip(_) => "Flip",
            SlideState::Quiz(_) => "Quiz",
            SlideState::Case(_) => "Case",
            SlideState::Iceberg(_) => "Iceberg",
            SlideState::Balance(_) => "Balance",
            SlideState::Toolbox(_) => "Toolbox",
            SlideState::Timeline(_) => "Timeline",
            SlideState::Hub(_) => "Hub",
        };
        assert_eq!(name, expect, "layout {layout:?}");
    }
}

#[test]
fn non_interactive_layouts_are_static() {
    for layout in [
        LayoutKind::TitleOnly,
        LayoutKind::BulletPoints,
        LayoutKind::GridCards,
        LayoutKind::SplitImage,
        LayoutKind::CenteredQuote,
        LayoutKind::ProcessSteps,
        LayoutKind::StatsDashboard,
        LayoutKind::WordCloud,
        LayoutKind::ChatBubbles,
        LayoutKind::Unknown,
    ] {
        let state = SlideState::for_slide(&slide(layout, vec![item("a", "one")]));
        assert_eq!(state, SlideState::Static, "layout {layout:?}");
    }
}

#[test]
fn rebuilding_state_discards_interaction() {
    // Navigating away and back hands the template a freshly built machine:
    // a flipped card shows its front again.
    let flip_slide = slide(
        LayoutKind::FlipCards,
        vec![item("myth-1", "one"), item("myth-2", "two")],
    );
    let mut state = SlideState::for_slide(&flip_slide);
    if let SlideState::Flip(set) = &mut state {
        set.toggle("myth-1");
        assert!(set.is_flipped("myth-1"));
    }

    let rebuilt = SlideState::for_slide(&flip_slide);
    if let SlideState::Flip(set) = &rebuilt {
        assert!(!set.is_flipped("myth-1"));
    } else {
        panic!("expected flip state");
    }
}

#[test]
fn rebuilt_quiz_restarts_from_question_one() {
    let quiz_slide = slide(
        LayoutKind::InteractiveQuiz,
        vec![
            question("q1", "first", true),
            question("q2", "second", false),
        ],
    );
    let mut state = SlideState::for_slide(&quiz_slide);
    if let SlideState::Quiz(quiz) = &mut state {
        quiz.answer(true);
        quiz.advance();
        assert_eq!(quiz.index(), 1);
    }

    if let SlideState::Quiz(quiz) = SlideState::for_slide(&quiz_slide) {
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        assert_eq!(quiz.selected(), None);
    } else {
        panic!("expected quiz state");
    }
}

#[test]
fn case_study_machine_sized_from_the_options_carrier() {
    let case_slide = slide(
        LayoutKind::CaseStudy,
        vec![SlideItem {
            options: Some(vec![
                option("call", "call home", false),
                option("listen", "listen first", true),
            ]),
            ..item("scenario", "a quiet student")
        }],
    );
    if let SlideState::Case(mut case) = SlideState::for_slide(&case_slide) {
        case.begin();
        case.choose(2);
        assert_eq!(case.phase(), CasePhase::Options);
        case.choose(1);
        assert_eq!(case.chosen(), Some(1));
    } else {
        panic!("expected case state");
    }
}
