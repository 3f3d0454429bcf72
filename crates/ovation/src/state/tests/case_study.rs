use crate::state::{CasePhase, CaseStudy};

#[test]
fn starts_at_intro() {
    let case = CaseStudy::new(3);
    assert_eq!(case.phase(), CasePhase::Intro);
    assert_eq!(case.chosen(), None);
}

#[test]
fn choosing_is_unreachable_before_begin() {
    let mut case = CaseStudy::new(3);
    case.choose(0);
    assert_eq!(case.phase(), CasePhase::Intro);
    assert_eq!(case.chosen(), None);
}

#[test]
fn begin_then_choose_reaches_result() {
    let mut case = CaseStudy::new(3);
    case.begin();
    assert_eq!(case.phase(), CasePhase::Options);
    case.choose(1);
    assert_eq!(case.phase(), CasePhase::Result);
    assert_eq!(case.chosen(), Some(1));
}

#[test]
fn retry_returns_to_options_never_intro() {
    let mut case = CaseStudy::new(2);
    case.begin();
    case.choose(0);
    case.retry();
    assert_eq!(case.phase(), CasePhase::Options);
    assert_eq!(case.chosen(), None);
    // begin() must not drag us back either
    case.begin();
    assert_eq!(case.phase(), CasePhase::Options);
}

#[test]
fn retry_outside_result_is_ignored() {
    let mut case = CaseStudy::new(2);
    case.retry();
    assert_eq!(case.phase(), CasePhase::Intro);
    case.begin();
    case.retry();
    assert_eq!(case.phase(), CasePhase::Options);
}

#[test]
fn out_of_range_choice_is_ignored() {
    let mut case = CaseStudy::new(2);
    case.begin();
    case.choose(5);
    assert_eq!(case.phase(), CasePhase::Options);
    assert_eq!(case.chosen(), None);
}

#[test]
fn can_re_choose_a_different_option() {
    let mut case = CaseStudy::new(3);
    case.begin();
    case.choose(2);
    case.retry();
    case.choose(0);
    assert_eq!(case.chosen(), Some(0));
}
