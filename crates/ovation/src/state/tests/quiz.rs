use crate::state::{Quiz, QuizPhase};

#[test]
fn starts_on_first_question_unanswered() {
    let quiz = Quiz::new(3);
    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.phase(), QuizPhase::Answering);
    assert_eq!(quiz.selected(), None);
}

#[test]
fn answering_records_choice_and_shows_explanation() {
    let mut quiz = Quiz::new(3);
    quiz.answer(true);
    assert_eq!(quiz.phase(), QuizPhase::Explained);
    assert_eq!(quiz.selected(), Some(true));
}

#[test]
fn first_answer_is_final() {
    let mut quiz = Quiz::new(2);
    quiz.answer(false);
    quiz.answer(true);
    assert_eq!(quiz.selected(), Some(false));
}

#[test]
fn correctness_matches_the_question_truth_value() {
    // Answering "true" on a true statement is correct; on a false one it isn't.
    let mut quiz = Quiz::new(1);
    assert_eq!(quiz.answered_correctly(true), None);
    quiz.answer(true);
    assert_eq!(quiz.answered_correctly(true), Some(true));
    assert_eq!(quiz.answered_correctly(false), Some(false));
}

#[test]
fn advance_requires_an_answer() {
    let mut quiz = Quiz::new(3);
    quiz.advance();
    assert_eq!(quiz.index(), 0);
    quiz.answer(true);
    quiz.advance();
    assert_eq!(quiz.index(), 1);
    assert_eq!(quiz.phase(), QuizPhase::Answering);
    assert_eq!(quiz.selected(), None);
}

#[test]
fn advance_is_a_no_op_on_the_last_question() {
    let mut quiz = Quiz::new(2);
    quiz.answer(true);
    quiz.advance();
    quiz.answer(false);
    assert!(quiz.is_terminal());
    quiz.advance();
    assert_eq!(quiz.index(), 1);
    assert_eq!(quiz.phase(), QuizPhase::Explained);
}

#[test]
fn three_question_walkthrough() {
    // Question 2 (index 1) is a true statement; answering "true" is correct,
    // and advancing lands on question 3 ready to answer.
    let mut quiz = Quiz::new(3);
    quiz.answer(false);
    quiz.advance();
    assert_eq!(quiz.index(), 1);
    quiz.answer(true);
    assert_eq!(quiz.answered_correctly(true), Some(true));
    quiz.advance();
    assert_eq!(quiz.index(), 2);
    assert_eq!(quiz.phase(), QuizPhase::Answering);
}

#[test]
fn index_never_decreases_within_a_visit() {
    let mut quiz = Quiz::new(3);
    quiz.answer(true);
    quiz.advance();
    let reached = quiz.index();
    quiz.advance();
    quiz.answer(false);
    quiz.advance();
    assert!(quiz.index() >= reached);
}

#[test]
fn single_question_quiz_is_terminal_after_one_answer() {
    let mut quiz = Quiz::new(1);
    assert!(quiz.is_last());
    quiz.answer(true);
    assert!(quiz.is_terminal());
}
