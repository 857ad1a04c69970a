//! Team mode tests.
//!
//! Teams alternate the guessing side by question parity; the responder is
//! drawn from the guessing team's own roster and scored individually under
//! a team-qualified key, while guesser and director points go to the teams.

use spectrum_engine::{
    Category, GameMode, GameSession, InMemoryQuestionBank, Question, QuestionId, ResultRecord,
    ScoringPath, SessionAction, SetupInput, Team, TeamSide,
};

fn bank(count: u32) -> InMemoryQuestionBank {
    (1..=count)
        .map(|i| Question::new(QuestionId::new(i), Category::Casual, format!("question {i}")))
        .collect()
}

fn start(questions: u32) -> GameSession<InMemoryQuestionBank> {
    let mut session = GameSession::new(bank(questions), 3);
    session
        .apply(SessionAction::SelectMode {
            mode: GameMode::Team,
            scoring: ScoringPath::Manual,
        })
        .unwrap();
    session
        .apply(SessionAction::SubmitSetup(SetupInput::Teams {
            team_a: Team::with_players("Blue", ["Ala", "Ola"]),
            team_b: Team::with_players("Red", ["Jan", "Piotr"]),
        }))
        .unwrap();
    session
        .apply(SessionAction::ToggleCategory(Category::Casual))
        .unwrap();
    session.apply(SessionAction::StartGame).unwrap();
    session
}

fn score(session: &mut GameSession<InMemoryQuestionBank>, guesser: u8, extra: u8) {
    session
        .apply(SessionAction::SelectGuesserPoints(guesser))
        .unwrap();
    session
        .apply(SessionAction::SelectExtraPoint(extra))
        .unwrap();
    session.apply(SessionAction::ConfirmManualScore).unwrap();
}

/// Odd questions go to team B, even to team A; the responder cycles
/// through the guessing team's roster.
#[test]
fn test_role_rotation() {
    let mut session = start(16);

    let expected = [
        (TeamSide::B, "Jan_Red"),
        (TeamSide::A, "Ola_Blue"),
        (TeamSide::B, "Piotr_Red"),
        (TeamSide::A, "Ala_Blue"),
    ];
    for (side, responder) in expected {
        let roles = session.role_names().unwrap();
        let team_name = match side {
            TeamSide::A => "Blue",
            TeamSide::B => "Red",
        };
        assert_eq!(roles.guesser, team_name);
        assert_eq!(roles.responder, responder);
        let other = match side {
            TeamSide::A => "Red",
            TeamSide::B => "Blue",
        };
        assert_eq!(roles.director.as_deref(), Some(other));
        score(&mut session, 0, 0);
    }
}

/// A full round: team points and individual responder points accumulate
/// under separate keys, with dual rankings at the end.
#[test]
fn test_full_round_scoring() {
    let mut session = start(16);
    assert_eq!(session.questions_per_round(), Some(4));

    for _ in 0..4 {
        score(&mut session, 4, 1);
    }

    let state = session.state().unwrap();
    assert!(state.ask_continue);

    // Each team guessed twice (4 + 4) and directed twice (1 + 1).
    assert_eq!(state.scoreboard.get("Blue"), 10);
    assert_eq!(state.scoreboard.get("Red"), 10);
    // Each player responded once: base 2 + bonus 1.
    for key in ["Ala_Blue", "Ola_Blue", "Jan_Red", "Piotr_Red"] {
        assert_eq!(state.scoreboard.get(key), 3, "{key}");
    }

    session.apply(SessionAction::ShowResults).unwrap();

    let teams = session.team_ranking().unwrap();
    assert_eq!(
        teams,
        vec![("Blue".to_string(), 10), ("Red".to_string(), 10)]
    );

    let players = session.player_ranking().unwrap();
    assert_eq!(players.len(), 4);
    assert!(players.iter().all(|(_, p)| *p == 3));
    assert!(players.iter().all(|(n, _)| n != "Blue" && n != "Red"));
}

/// Round length follows the larger roster: 2 × max(|A|, |B|).
#[test]
fn test_round_length_uneven_rosters() {
    let mut session = GameSession::new(bank(16), 5);
    session
        .apply(SessionAction::SelectMode {
            mode: GameMode::Team,
            scoring: ScoringPath::Manual,
        })
        .unwrap();
    let warnings = session
        .apply(SessionAction::SubmitSetup(SetupInput::Teams {
            team_a: Team::with_players("Blue", ["Ala", "Ola", "Ewa"]),
            team_b: Team::with_players("Red", ["Jan", "Piotr"]),
        }))
        .unwrap();
    assert_eq!(warnings.len(), 1);
    session
        .apply(SessionAction::ToggleCategory(Category::Casual))
        .unwrap();
    session.apply(SessionAction::StartGame).unwrap();

    assert_eq!(session.questions_per_round(), Some(6));
}

/// Roster sizes beyond one apart are a hard configuration error.
#[test]
fn test_lopsided_rosters_rejected() {
    let mut session = GameSession::new(bank(16), 5);
    session
        .apply(SessionAction::SelectMode {
            mode: GameMode::Team,
            scoring: ScoringPath::Manual,
        })
        .unwrap();
    assert!(session
        .apply(SessionAction::SubmitSetup(SetupInput::Teams {
            team_a: Team::with_players("Blue", ["Ala", "Ola", "Ewa", "Iga"]),
            team_b: Team::with_players("Red", ["Jan", "Piotr"]),
        }))
        .is_err());
}

/// Team records name the guessing and directing teams and the qualified
/// responder.
#[test]
fn test_team_record_shape() {
    let mut session = start(16);
    score(&mut session, 3, 0);

    match &session.export_rows()[0] {
        ResultRecord::Team {
            responder,
            guessing_team,
            directing_team,
            responder_points,
            guesser_points,
            director_points,
            ..
        } => {
            assert_eq!(responder, "Jan_Red");
            assert_eq!(guessing_team, "Red");
            assert_eq!(directing_team, "Blue");
            assert_eq!(*guesser_points, 3);
            assert_eq!(*responder_points, 1);
            assert_eq!(*director_points, 0);
        }
        other => panic!("unexpected record {other:?}"),
    }
}
