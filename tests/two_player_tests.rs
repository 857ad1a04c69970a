//! Two-player mode tests.
//!
//! These tests drive full sessions through the public action surface:
//! - Manual scoring end to end
//! - Virtual-board scoring without a director
//! - Role alternation and the round-boundary continuation prompt

use spectrum_engine::{
    Category, GameMode, GameSession, InMemoryQuestionBank, Question, QuestionId, ResultRecord,
    ScoringPath, SessionAction, SetupInput, Step,
};

fn bank(count: u32) -> InMemoryQuestionBank {
    (1..=count)
        .map(|i| Question::new(QuestionId::new(i), Category::Funny, format!("question {i}")))
        .collect()
}

fn start(scoring: ScoringPath, questions: u32) -> GameSession<InMemoryQuestionBank> {
    let mut session = GameSession::new(bank(questions), 42);
    session
        .apply(SessionAction::SelectMode {
            mode: GameMode::TwoPlayer,
            scoring,
        })
        .unwrap();
    session
        .apply(SessionAction::SubmitSetup(SetupInput::Players(vec![
            "Ala".into(),
            "Bartek".into(),
        ])))
        .unwrap();
    session
        .apply(SessionAction::ToggleCategory(Category::Funny))
        .unwrap();
    session.apply(SessionAction::StartGame).unwrap();
    session
}

/// Manual path: one full round, exact point totals and the continuation
/// prompt at the boundary.
#[test]
fn test_manual_round_end_to_end() {
    let mut session = start(ScoringPath::Manual, 8);

    // Question 1: Ala responds, Bartek guesses; a perfect guess.
    let roles = session.role_names().unwrap();
    assert_eq!(roles.responder, "Ala");
    assert_eq!(roles.guesser, "Bartek");
    assert_eq!(roles.director, None);

    session
        .apply(SessionAction::SelectGuesserPoints(4))
        .unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();

    let state = session.state().unwrap();
    assert_eq!(state.scoreboard.get("Bartek"), 4);
    assert_eq!(state.scoreboard.get("Ala"), 2);
    assert!(!state.ask_continue);

    // Question 2: roles swap.
    let roles = session.role_names().unwrap();
    assert_eq!(roles.responder, "Bartek");
    assert_eq!(roles.guesser, "Ala");

    session
        .apply(SessionAction::SelectGuesserPoints(2))
        .unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();

    let state = session.state().unwrap();
    assert_eq!(state.scoreboard.get("Ala"), 2 + 2);
    assert_eq!(state.scoreboard.get("Bartek"), 4 + 1);

    // Round of 2 complete: the continuation prompt is raised.
    assert!(state.ask_continue);
    assert_eq!(session.rounds_played(), Some(1));

    session.apply(SessionAction::ShowResults).unwrap();
    assert_eq!(session.step(), Step::End);

    let ranking = session.final_ranking();
    assert_eq!(ranking[0], ("Bartek".to_string(), 5));
    assert_eq!(ranking[1], ("Ala".to_string(), 4));
}

/// Board path: a near-miss guess scores 4/2 without any director step.
#[test]
fn test_board_round_without_director() {
    let mut session = start(ScoringPath::VirtualBoard, 8);

    session
        .apply(SessionAction::ConfirmAnswer { slider: 10 })
        .unwrap();
    session
        .apply(SessionAction::ConfirmGuess { slider: 12 })
        .unwrap();
    // |10 - 12| = 2 is inside the 4-point band; no direction sub-step.
    session.apply(SessionAction::ConfirmBoardScore).unwrap();

    let state = session.state().unwrap();
    assert_eq!(state.scoreboard.get("Bartek"), 4);
    assert_eq!(state.scoreboard.get("Ala"), 2);
    assert_eq!(state.questions_asked, 1);
}

/// Direction actions are rejected in a mode without the role.
#[test]
fn test_board_direction_rejected() {
    let mut session = start(ScoringPath::VirtualBoard, 8);
    session
        .apply(SessionAction::ConfirmAnswer { slider: 0 })
        .unwrap();
    session
        .apply(SessionAction::ConfirmGuess { slider: 50 })
        .unwrap();
    assert!(session.apply(SessionAction::ConfirmDirection).is_err());
}

/// Abandoning the board discards committed input and returns to the
/// answer sub-step without awarding anything.
#[test]
fn test_board_abandon_discards_input() {
    let mut session = start(ScoringPath::VirtualBoard, 8);
    session
        .apply(SessionAction::ConfirmAnswer { slider: 77 })
        .unwrap();
    session
        .apply(SessionAction::ConfirmGuess { slider: -30 })
        .unwrap();
    session.apply(SessionAction::AbandonBoard).unwrap();

    let state = session.state().unwrap();
    assert_eq!(state.scoreboard.get("Ala"), 0);
    assert_eq!(state.scoreboard.get("Bartek"), 0);
    assert_eq!(state.questions_asked, 0);

    // The same question is still on the table and can be scored again.
    session
        .apply(SessionAction::ConfirmAnswer { slider: 0 })
        .unwrap();
    session
        .apply(SessionAction::ConfirmGuess { slider: 0 })
        .unwrap();
    session.apply(SessionAction::ConfirmBoardScore).unwrap();
    assert_eq!(session.state().unwrap().questions_asked, 1);
}

/// Every drawn question id is unique; exhausting the pool lands on End.
#[test]
fn test_draws_unique_until_exhaustion() {
    let mut session = start(ScoringPath::Manual, 4);
    let mut seen = Vec::new();

    loop {
        match session.step() {
            Step::End => break,
            Step::Game => {}
            other => panic!("unexpected step {other:?}"),
        }
        if session.state().unwrap().ask_continue {
            session.apply(SessionAction::ContinueRound).unwrap();
            continue;
        }
        let id = session.current_question().unwrap().id;
        assert!(!seen.contains(&id), "question {id} drawn twice");
        seen.push(id);
        session
            .apply(SessionAction::SelectGuesserPoints(0))
            .unwrap();
        session.apply(SessionAction::ConfirmManualScore).unwrap();
    }

    assert_eq!(seen.len(), 4);
    assert_eq!(session.export_rows().len(), 4);
}

/// The question can be swapped before a guess is underway, not after.
#[test]
fn test_redraw_gating() {
    let mut session = start(ScoringPath::Manual, 8);
    let first = session.current_question().unwrap().id;

    session.apply(SessionAction::RedrawQuestion).unwrap();
    let second = session.current_question().unwrap().id;
    assert_ne!(first, second);

    // A pending selection blocks the swap.
    session
        .apply(SessionAction::SelectGuesserPoints(3))
        .unwrap();
    assert!(session.apply(SessionAction::RedrawQuestion).is_err());
}

/// On the board path the swap closes once the guess sub-step is reached.
#[test]
fn test_redraw_gating_on_board() {
    let mut session = start(ScoringPath::VirtualBoard, 8);

    session.apply(SessionAction::RedrawQuestion).unwrap();
    session
        .apply(SessionAction::ConfirmAnswer { slider: 5 })
        .unwrap();
    assert!(session.apply(SessionAction::RedrawQuestion).is_err());
}

/// A surrendered question never comes back.
#[test]
fn test_redrawn_question_stays_used() {
    let mut session = start(ScoringPath::Manual, 2);
    let first = session.current_question().unwrap().id;
    session.apply(SessionAction::RedrawQuestion).unwrap();
    let second = session.current_question().unwrap().id;
    assert_ne!(first, second);

    // Both ids are used now; scoring this question exhausts the pool.
    session
        .apply(SessionAction::SelectGuesserPoints(0))
        .unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();
    assert_eq!(session.step(), Step::End);
}

/// Ledger rows carry the per-question role and point columns.
#[test]
fn test_ledger_records() {
    let mut session = start(ScoringPath::Manual, 8);
    session
        .apply(SessionAction::SelectGuesserPoints(3))
        .unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();

    let rows = session.export_rows();
    assert_eq!(rows.len(), 1);
    match &rows[0] {
        ResultRecord::TwoPlayer {
            round,
            question_number,
            responder,
            guesser,
            responder_points,
            guesser_points,
            ..
        } => {
            assert_eq!(*round, 1);
            assert_eq!(*question_number, 1);
            assert_eq!(responder, "Ala");
            assert_eq!(guesser, "Bartek");
            assert_eq!(*guesser_points, 3);
            assert_eq!(*responder_points, 1);
        }
        other => panic!("unexpected record {other:?}"),
    }
}
