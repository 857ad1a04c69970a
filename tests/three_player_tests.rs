//! Three-player mode tests.
//!
//! The mode adds the director role: a fixed 6-question cycle assigns the
//! roles, and a correct left/perfect/right call earns a bonus point for both
//! the director and the responder.

use spectrum_engine::{
    Category, DirectorChoice, GameMode, GameSession, InMemoryQuestionBank, Question, QuestionId,
    ResultRecord, ScoringPath, SessionAction, SetupInput, Step,
};

fn bank(count: u32) -> InMemoryQuestionBank {
    (1..=count)
        .map(|i| Question::new(QuestionId::new(i), Category::Worldview, format!("question {i}")))
        .collect()
}

fn start(scoring: ScoringPath, questions: u32) -> GameSession<InMemoryQuestionBank> {
    let mut session = GameSession::new(bank(questions), 11);
    session
        .apply(SessionAction::SelectMode {
            mode: GameMode::ThreePlayer,
            scoring,
        })
        .unwrap();
    session
        .apply(SessionAction::SubmitSetup(SetupInput::Players(vec![
            "P0".into(),
            "P1".into(),
            "P2".into(),
        ])))
        .unwrap();
    session
        .apply(SessionAction::ToggleCategory(Category::Worldview))
        .unwrap();
    session.apply(SessionAction::StartGame).unwrap();
    session
}

/// The first assignment of the cycle: P0 responds, P2 guesses, P1 directs.
#[test]
fn test_first_role_assignment() {
    let session = start(ScoringPath::Manual, 8);
    let roles = session.role_names().unwrap();
    assert_eq!(roles.responder, "P0");
    assert_eq!(roles.guesser, "P2");
    assert_eq!(roles.director, Some("P1".to_string()));
}

/// Manual path with the director bonus: all three roles get points.
#[test]
fn test_manual_scoring_with_bonus() {
    let mut session = start(ScoringPath::Manual, 8);

    session
        .apply(SessionAction::SelectGuesserPoints(3))
        .unwrap();
    session.apply(SessionAction::SelectExtraPoint(1)).unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();

    let state = session.state().unwrap();
    assert_eq!(state.scoreboard.get("P2"), 3); // guesser
    assert_eq!(state.scoreboard.get("P0"), 2); // responder: base 1 + bonus 1
    assert_eq!(state.scoreboard.get("P1"), 1); // director
}

/// The confirmation requires both selections when the mode has a director.
#[test]
fn test_manual_confirmation_needs_both_selections() {
    let mut session = start(ScoringPath::Manual, 8);
    session
        .apply(SessionAction::SelectGuesserPoints(4))
        .unwrap();
    assert!(session.apply(SessionAction::ConfirmManualScore).is_err());

    session.apply(SessionAction::SelectExtraPoint(0)).unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();
    assert_eq!(session.state().unwrap().questions_asked, 1);
}

/// Board path: a wide miss with a correct left call.
#[test]
fn test_board_scoring_with_direction() {
    let mut session = start(ScoringPath::VirtualBoard, 8);

    session
        .apply(SessionAction::ConfirmAnswer { slider: 0 })
        .unwrap();
    session
        .apply(SessionAction::ConfirmGuess { slider: 20 })
        .unwrap();

    // diff = answer - guess = -20: the guess overshot to the right, the
    // answer lies to the left of it.
    session
        .apply(SessionAction::ChooseDirection(DirectorChoice::Left))
        .unwrap();
    session.apply(SessionAction::ConfirmDirection).unwrap();
    session.apply(SessionAction::ConfirmBoardScore).unwrap();

    let state = session.state().unwrap();
    assert_eq!(state.scoreboard.get("P2"), 0); // guesser, out of every band
    assert_eq!(state.scoreboard.get("P0"), 1); // responder: bonus only
    assert_eq!(state.scoreboard.get("P1"), 1); // director
}

/// The score cannot be confirmed before the direction is.
#[test]
fn test_board_score_waits_for_direction() {
    let mut session = start(ScoringPath::VirtualBoard, 8);
    session
        .apply(SessionAction::ConfirmAnswer { slider: 0 })
        .unwrap();
    session
        .apply(SessionAction::ConfirmGuess { slider: 20 })
        .unwrap();

    assert!(session.apply(SessionAction::ConfirmBoardScore).is_err());
    // Confirming with no call recorded is also rejected.
    assert!(session.apply(SessionAction::ConfirmDirection).is_err());

    // The call itself can be revised before confirmation.
    session
        .apply(SessionAction::ChooseDirection(DirectorChoice::Right))
        .unwrap();
    session
        .apply(SessionAction::ChooseDirection(DirectorChoice::Left))
        .unwrap();
    session.apply(SessionAction::ConfirmDirection).unwrap();
    session.apply(SessionAction::ConfirmBoardScore).unwrap();
    assert_eq!(session.state().unwrap().scoreboard.get("P1"), 1);
}

/// A full 6-question round visits every role pairing and raises the
/// continuation prompt exactly at the end.
#[test]
fn test_six_question_round() {
    let mut session = start(ScoringPath::Manual, 12);

    for q in 0..6 {
        let state = session.state().unwrap();
        assert!(!state.ask_continue, "premature prompt before question {q}");
        session
            .apply(SessionAction::SelectGuesserPoints(4))
            .unwrap();
        session.apply(SessionAction::SelectExtraPoint(0)).unwrap();
        session.apply(SessionAction::ConfirmManualScore).unwrap();
    }

    let state = session.state().unwrap();
    assert!(state.ask_continue);
    assert_eq!(session.rounds_played(), Some(1));

    // Over the full cycle each player guessed twice (4 each) and responded
    // twice (2 each): 12 points per player.
    for name in ["P0", "P1", "P2"] {
        assert_eq!(state.scoreboard.get(name), 12, "{name}");
    }
}

/// Records carry the director column in this mode.
#[test]
fn test_record_has_director() {
    let mut session = start(ScoringPath::Manual, 8);
    session
        .apply(SessionAction::SelectGuesserPoints(2))
        .unwrap();
    session.apply(SessionAction::SelectExtraPoint(1)).unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();

    match &session.export_rows()[0] {
        ResultRecord::ThreePlayer {
            responder,
            guesser,
            director,
            responder_points,
            guesser_points,
            director_points,
            ..
        } => {
            assert_eq!(responder, "P0");
            assert_eq!(guesser, "P2");
            assert_eq!(director, "P1");
            assert_eq!(*guesser_points, 2);
            assert_eq!(*responder_points, 2);
            assert_eq!(*director_points, 1);
        }
        other => panic!("unexpected record {other:?}"),
    }
}

/// Ending the game mid-board is rejected until the board is abandoned.
#[test]
fn test_end_game_blocked_mid_board() {
    let mut session = start(ScoringPath::VirtualBoard, 8);
    session
        .apply(SessionAction::ConfirmAnswer { slider: 40 })
        .unwrap();

    assert!(session.apply(SessionAction::EndGame).is_err());

    session.apply(SessionAction::AbandonBoard).unwrap();
    session.apply(SessionAction::EndGame).unwrap();
    assert_eq!(session.step(), Step::ModeSelect);
    assert!(session.state().is_none());
}
