//! The game session: top-level finite-state machine.
//!
//! `ModeSelect → Setup → Categories → Game → End`, with `End → ModeSelect`
//! on explicit termination and a `Game ⇄ Game` self-loop on continuation.
//!
//! Every externally triggered input is one [`SessionAction`] consumed
//! atomically by [`GameSession::apply`]: score application, record append,
//! and the transient reset happen in one indivisible step, so a replayed
//! confirmation can never double-count (it is rejected as an illegal
//! action instead).
//!
//! The `ModeSelect` step is represented by the absence of a
//! [`SessionState`]; selecting a mode creates the state, ending the game
//! discards it unconditionally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::ledger::{ResultRecord, ResultsLedger};
use super::state::{Participants, SessionState, Step};
use crate::board::{BoardStep, DirectorChoice};
use crate::core::{
    validate_player_names, validate_teams, Category, GameMode, GameRng, GameRngState, Question,
    ScoringPath, SetupWarning, Team, TeamSide,
};
use crate::error::GameError;
use crate::export::{archive_filename, QuestionBank, RemoteArchive};
use crate::schedule::{RoleAssignment, TurnScheduler};
use crate::scoring::{self, ScoreBreakdown, GUESSER_POINT_VALUES};

/// Setup payload submitted from the setup screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupInput {
    /// Player names, in turn order. Length must match the mode.
    Players(Vec<String>),
    /// The two teams.
    Teams { team_a: Team, team_b: Team },
}

/// One externally triggered input event (button press, slider commit).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Create a session in the given mode and scoring path.
    SelectMode { mode: GameMode, scoring: ScoringPath },
    /// Submit player/team names from the setup screen.
    SubmitSetup(SetupInput),
    /// Return one step: Setup → ModeSelect (discarding the session),
    /// Categories → Setup (clearing the selection).
    Back,
    /// Select or deselect a question category.
    ToggleCategory(Category),
    /// Leave the category screen and draw the first question.
    StartGame,
    /// Swap the current question for a fresh draw.
    RedrawQuestion,
    /// Manual path: pick the guesser's points from {0, 2, 3, 4}.
    SelectGuesserPoints(u8),
    /// Manual path, director modes: pick the bonus from {0, 1}.
    SelectExtraPoint(u8),
    /// Manual path: apply the pending selections and move on.
    ConfirmManualScore,
    /// Board path: commit the responder's answer slider.
    ConfirmAnswer { slider: i32 },
    /// Board path: commit the guesser's slider.
    ConfirmGuess { slider: i32 },
    /// Board path: record the director's call.
    ChooseDirection(DirectorChoice),
    /// Board path: confirm the director's call.
    ConfirmDirection,
    /// Board path: derive points from the committed sliders and move on.
    ConfirmBoardScore,
    /// Board path: discard committed input, back to the answer sub-step.
    AbandonBoard,
    /// Continuation prompt: keep playing, draw the next question.
    ContinueRound,
    /// Continuation prompt or mid-game: stop and show the results.
    ShowResults,
    /// End screen: start a blank session in the same mode and scoring path.
    PlayAgain,
    /// Discard all session state and return to mode selection.
    EndGame,
}

/// Resolved scoring-entity names for the current question's roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleNames {
    /// Who places the hidden answer. Team mode: qualified player key.
    pub responder: String,
    /// Who guesses. Team mode: the guessing team's name.
    pub guesser: String,
    /// Who directs, where the mode has the role.
    pub director: Option<String>,
}

/// Outcome of an archive upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Stored under the returned filename.
    Uploaded(String),
    /// The collaborator failed; local export remains available.
    Failed(String),
    /// An attempt was already made this session.
    AlreadyAttempted,
}

/// One active session driving a question bank.
pub struct GameSession<B> {
    bank: B,
    rng: GameRng,
    session: Option<SessionState>,
}

impl<B: QuestionBank> GameSession<B> {
    /// Create a session driver over the given bank.
    ///
    /// The seed makes question draws reproducible for a fixed bank and
    /// action sequence.
    #[must_use]
    pub fn new(bank: B, seed: u64) -> Self {
        Self {
            bank,
            rng: GameRng::new(seed),
            session: None,
        }
    }

    /// Rebuild a driver from persisted parts.
    ///
    /// The scoreboard index is rebuilt and the RNG resumes at its captured
    /// position, so draws continue exactly where the saved session stopped.
    #[must_use]
    pub fn resume(bank: B, rng_state: &GameRngState, mut state: SessionState) -> Self {
        state.scoreboard.rebuild_index();
        Self {
            bank,
            rng: GameRng::from_state(rng_state),
            session: Some(state),
        }
    }

    /// Capture the RNG position for session persistence.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Current top-level step. `ModeSelect` when no session exists.
    #[must_use]
    pub fn step(&self) -> Step {
        self.session.as_ref().map_or(Step::ModeSelect, |s| s.step)
    }

    /// The active session state, if any.
    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// The question currently on the table.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref()?.current_question.as_ref()
    }

    /// Questions per round for the active session.
    #[must_use]
    pub fn questions_per_round(&self) -> Option<u32> {
        let state = self.session.as_ref()?;
        Some(Self::scheduler_of(state).ok()?.questions_per_round())
    }

    /// Completed rounds so far.
    #[must_use]
    pub fn rounds_played(&self) -> Option<u32> {
        let state = self.session.as_ref()?;
        Some(state.questions_asked / Self::scheduler_of(state).ok()?.questions_per_round())
    }

    /// Role assignment for the next question.
    #[must_use]
    pub fn current_roles(&self) -> Option<RoleAssignment> {
        let state = self.session.as_ref()?;
        Some(Self::scheduler_of(state).ok()?.assign(state.questions_asked))
    }

    /// Resolved role names for the next question.
    #[must_use]
    pub fn role_names(&self) -> Option<RoleNames> {
        let state = self.session.as_ref()?;
        Self::resolve_roles(state, self.current_roles()?).ok()
    }

    /// The accumulated results ledger.
    #[must_use]
    pub fn ledger(&self) -> Option<&ResultsLedger> {
        self.session.as_ref().map(|s| &s.ledger)
    }

    /// Records in question order, for export collaborators.
    #[must_use]
    pub fn export_rows(&self) -> Vec<ResultRecord> {
        self.session
            .as_ref()
            .map_or_else(Vec::new, |s| s.ledger.to_rows())
    }

    /// Descending final ranking over all scoring entities; ties keep
    /// registration order.
    #[must_use]
    pub fn final_ranking(&self) -> Vec<(String, u32)> {
        self.session
            .as_ref()
            .map_or_else(Vec::new, |s| s.scoreboard.ranking())
    }

    /// Team-mode ranking restricted to the two teams.
    #[must_use]
    pub fn team_ranking(&self) -> Option<Vec<(String, u32)>> {
        let (team_names, ranking) = self.team_names_and_ranking()?;
        Some(
            ranking
                .into_iter()
                .filter(|(n, _)| team_names.contains(&n.as_str()))
                .collect(),
        )
    }

    /// Team-mode ranking restricted to individual players.
    #[must_use]
    pub fn player_ranking(&self) -> Option<Vec<(String, u32)>> {
        let (team_names, ranking) = self.team_names_and_ranking()?;
        Some(
            ranking
                .into_iter()
                .filter(|(n, _)| !team_names.contains(&n.as_str()))
                .collect(),
        )
    }

    fn team_names_and_ranking(&self) -> Option<([&str; 2], Vec<(String, u32)>)> {
        let state = self.session.as_ref()?;
        match state.participants.as_ref()? {
            Participants::Teams { team_a, team_b } => Some((
                [team_a.name.as_str(), team_b.name.as_str()],
                state.scoreboard.ranking(),
            )),
            Participants::Players(_) => None,
        }
    }

    /// Consume one input event.
    ///
    /// Returns setup warnings (currently only the uneven-teams soft
    /// warning); most actions return an empty list.
    pub fn apply(&mut self, action: SessionAction) -> Result<Vec<SetupWarning>, GameError> {
        match action {
            SessionAction::SelectMode { mode, scoring } => {
                if self.session.is_some() {
                    return Err(GameError::illegal_action(
                        self.step(),
                        "a session is already active",
                    ));
                }
                info!(%mode, ?scoring, "session created");
                self.session = Some(SessionState::new(mode, scoring));
                Ok(Vec::new())
            }
            SessionAction::Back => self.back(),
            SessionAction::PlayAgain => self.play_again(),
            SessionAction::EndGame => self.end_game(),
            other => {
                let Self { bank, rng, session } = self;
                let state = session.as_mut().ok_or_else(|| {
                    GameError::illegal_action(Step::ModeSelect, "no active session")
                })?;
                Self::apply_in_session(bank, rng, state, other)
            }
        }
        .map(|warnings| {
            for w in &warnings {
                warn!(%w, "setup warning");
            }
            warnings
        })
    }

    /// Archive the exported results, at most once per session.
    ///
    /// Only legal from the end screen. Collaborator failures are downgraded
    /// to [`UploadOutcome::Failed`]; the local export path is unaffected.
    /// The attempt guard is never reset within the session.
    pub fn upload_results(
        &mut self,
        archive: &mut dyn RemoteArchive,
        bytes: &[u8],
        date: NaiveDate,
    ) -> Result<UploadOutcome, GameError> {
        let state = self
            .session
            .as_mut()
            .ok_or_else(|| GameError::illegal_action(Step::ModeSelect, "no active session"))?;
        if state.step != Step::End {
            return Err(GameError::illegal_action(
                state.step,
                "results can only be archived from the end screen",
            ));
        }
        if state.uploaded {
            return Ok(UploadOutcome::AlreadyAttempted);
        }
        state.uploaded = true;

        let existing = match archive.existing_names(date) {
            Ok(existing) => existing,
            Err(err) => {
                warn!(%err, "archive listing failed");
                return Ok(UploadOutcome::Failed(err.to_string()));
            }
        };
        let filename = archive_filename(date, &existing);
        match archive.upload(&filename, bytes) {
            Ok(()) => {
                info!(%filename, "results archived");
                Ok(UploadOutcome::Uploaded(filename))
            }
            Err(err) => {
                warn!(%err, "archive upload failed");
                Ok(UploadOutcome::Failed(err.to_string()))
            }
        }
    }

    // === Global transitions ===

    fn back(&mut self) -> Result<Vec<SetupWarning>, GameError> {
        match self.step() {
            Step::Setup => {
                self.session = None;
                Ok(Vec::new())
            }
            Step::Categories => {
                let state = self.session.as_mut().expect("session exists in Categories");
                state.chosen_categories.clear();
                state.step = Step::Setup;
                Ok(Vec::new())
            }
            step => Err(GameError::illegal_action(step, "cannot go back here")),
        }
    }

    fn play_again(&mut self) -> Result<Vec<SetupWarning>, GameError> {
        match self.session.as_ref() {
            Some(state) if state.step == Step::End => {
                info!(mode = %state.mode, "starting a fresh session in the same mode");
                self.session = Some(SessionState::new(state.mode, state.scoring));
                Ok(Vec::new())
            }
            _ => Err(GameError::illegal_action(
                self.step(),
                "play-again is only offered on the end screen",
            )),
        }
    }

    fn end_game(&mut self) -> Result<Vec<SetupWarning>, GameError> {
        let state = self
            .session
            .as_ref()
            .ok_or_else(|| GameError::illegal_action(Step::ModeSelect, "no active session"))?;
        // Mid-board confirmation must be completed or abandoned first.
        if state.step == Step::Game
            && state.scoring == ScoringPath::VirtualBoard
            && state.board.step() != BoardStep::Answer
        {
            return Err(GameError::illegal_action(
                state.step,
                "complete or abandon the board before ending the game",
            ));
        }
        info!("session discarded");
        self.session = None;
        Ok(Vec::new())
    }

    // === In-session transitions ===

    fn apply_in_session(
        bank: &B,
        rng: &mut GameRng,
        state: &mut SessionState,
        action: SessionAction,
    ) -> Result<Vec<SetupWarning>, GameError> {
        match state.step {
            Step::Setup => match action {
                SessionAction::SubmitSetup(input) => Self::submit_setup(state, input),
                other => Err(Self::illegal(state, &other)),
            },
            Step::Categories => match action {
                SessionAction::ToggleCategory(category) => {
                    if !state.chosen_categories.remove(&category) {
                        state.chosen_categories.insert(category);
                    }
                    Ok(Vec::new())
                }
                SessionAction::StartGame => {
                    if state.chosen_categories.is_empty() {
                        return Err(GameError::illegal_action(
                            state.step,
                            "select at least one category first",
                        ));
                    }
                    info!(categories = state.chosen_categories.len(), "game started");
                    state.step = Step::Game;
                    Self::ensure_question(bank, rng, state);
                    Ok(Vec::new())
                }
                other => Err(Self::illegal(state, &other)),
            },
            Step::Game => Self::apply_in_game(bank, rng, state, action).map(|()| Vec::new()),
            Step::End | Step::ModeSelect => Err(Self::illegal(state, &action)),
        }
    }

    fn apply_in_game(
        bank: &B,
        rng: &mut GameRng,
        state: &mut SessionState,
        action: SessionAction,
    ) -> Result<(), GameError> {
        if state.ask_continue {
            return match action {
                SessionAction::ContinueRound => {
                    state.ask_continue = false;
                    Self::ensure_question(bank, rng, state);
                    Ok(())
                }
                SessionAction::ShowResults => {
                    state.step = Step::End;
                    Ok(())
                }
                other => Err(GameError::illegal_action(
                    state.step,
                    format!("awaiting continuation decision, got {other:?}"),
                )),
            };
        }

        match action {
            SessionAction::ShowResults => {
                state.step = Step::End;
                Ok(())
            }
            SessionAction::RedrawQuestion => Self::redraw_question(bank, rng, state),
            SessionAction::SelectGuesserPoints(points) => {
                Self::expect_path(state, ScoringPath::Manual)?;
                if !GUESSER_POINT_VALUES.contains(&points) {
                    return Err(GameError::invalid_input(format!(
                        "guesser points must be one of 0, 2, 3, 4; got {points}"
                    )));
                }
                state.pending_guesser_points = Some(points);
                Ok(())
            }
            SessionAction::SelectExtraPoint(points) => {
                Self::expect_path(state, ScoringPath::Manual)?;
                if !state.mode.has_director() {
                    return Err(GameError::illegal_action(
                        state.step,
                        "two-player mode has no director bonus",
                    ));
                }
                scoring::validate_extra_points(points)?;
                state.pending_extra_points = Some(points);
                Ok(())
            }
            SessionAction::ConfirmManualScore => {
                Self::expect_path(state, ScoringPath::Manual)?;
                let guesser_points = state.pending_guesser_points.ok_or_else(|| {
                    GameError::illegal_action(state.step, "no guesser points selected")
                })?;
                let extra = if state.mode.has_director() {
                    Some(state.pending_extra_points.ok_or_else(|| {
                        GameError::illegal_action(state.step, "no extra point selected")
                    })?)
                } else {
                    None
                };
                let breakdown = scoring::score_manual(guesser_points, extra)?;
                Self::finish_question(bank, rng, state, breakdown)
            }
            SessionAction::ConfirmAnswer { slider } => {
                Self::expect_path(state, ScoringPath::VirtualBoard)?;
                state.board.confirm_answer(slider)
            }
            SessionAction::ConfirmGuess { slider } => {
                Self::expect_path(state, ScoringPath::VirtualBoard)?;
                state.board.confirm_guess(slider)
            }
            SessionAction::ChooseDirection(choice) => {
                Self::expect_path(state, ScoringPath::VirtualBoard)?;
                state.board.choose_direction(choice)
            }
            SessionAction::ConfirmDirection => {
                Self::expect_path(state, ScoringPath::VirtualBoard)?;
                state.board.confirm_direction()
            }
            SessionAction::ConfirmBoardScore => {
                Self::expect_path(state, ScoringPath::VirtualBoard)?;
                if state.board.step() != BoardStep::Score {
                    return Err(GameError::illegal_action(
                        state.step,
                        "board has no committed score yet",
                    ));
                }
                let breakdown =
                    scoring::score_geometric(state.board.diff(), state.board.director_choice())?;
                Self::finish_question(bank, rng, state, breakdown)
            }
            SessionAction::AbandonBoard => {
                Self::expect_path(state, ScoringPath::VirtualBoard)?;
                state.board.abandon();
                Ok(())
            }
            other => Err(Self::illegal(state, &other)),
        }
    }

    fn submit_setup(
        state: &mut SessionState,
        input: SetupInput,
    ) -> Result<Vec<SetupWarning>, GameError> {
        let warnings = match (state.mode, input) {
            (GameMode::TwoPlayer | GameMode::ThreePlayer, SetupInput::Players(names)) => {
                let expected = state
                    .mode
                    .fixed_player_count()
                    .expect("player modes have a fixed count");
                if names.len() != expected {
                    return Err(GameError::configuration(format!(
                        "{} mode needs exactly {expected} players, got {}",
                        state.mode,
                        names.len()
                    )));
                }
                validate_player_names(&names)?;
                let names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
                for name in &names {
                    state.scoreboard.register(name);
                }
                state.participants = Some(Participants::Players(names));
                Vec::new()
            }
            (GameMode::Team, SetupInput::Teams { team_a, team_b }) => {
                let warnings = validate_teams(&team_a, &team_b)?;
                state.scoreboard.register(&team_a.name);
                state.scoreboard.register(&team_b.name);
                for name in team_a.qualified_names().chain(team_b.qualified_names()) {
                    state.scoreboard.register(name);
                }
                state.participants = Some(Participants::Teams { team_a, team_b });
                warnings
            }
            (mode, _) => {
                return Err(GameError::configuration(format!(
                    "setup input does not match {mode} mode"
                )));
            }
        };
        debug!(mode = %state.mode, "setup accepted");
        state.step = Step::Categories;
        Ok(warnings)
    }

    /// Draw a question if none is on the table. Pool exhaustion transitions
    /// straight to `End`, bypassing the continuation prompt.
    fn ensure_question(bank: &B, rng: &mut GameRng, state: &mut SessionState) {
        if state.current_question.is_some() {
            return;
        }
        match Self::draw(bank, rng, state) {
            Some(question) => {
                debug!(id = %question.id, "question drawn");
                state.current_question = Some(question);
            }
            None => {
                info!("question pool exhausted");
                state.step = Step::End;
            }
        }
    }

    /// Swap the current question for a fresh draw. The surrendered id stays
    /// used; if the pool is empty the current question is kept.
    fn redraw_question(
        bank: &B,
        rng: &mut GameRng,
        state: &mut SessionState,
    ) -> Result<(), GameError> {
        let blocked = match state.scoring {
            ScoringPath::Manual => {
                state.pending_guesser_points.is_some() || state.pending_extra_points.is_some()
            }
            ScoringPath::VirtualBoard => {
                matches!(state.board.step(), BoardStep::Guess | BoardStep::Score)
            }
        };
        if blocked {
            return Err(GameError::illegal_action(
                state.step,
                "cannot swap the question once a guess is underway",
            ));
        }
        if let Some(question) = Self::draw(bank, rng, state) {
            debug!(id = %question.id, "question swapped");
            state.current_question = Some(question);
        }
        Ok(())
    }

    /// Uniform draw from the unused subset of the active pool, recording
    /// the drawn id as used.
    fn draw(bank: &B, rng: &mut GameRng, state: &mut SessionState) -> Option<Question> {
        let pool: Vec<&Question> = state
            .chosen_categories
            .iter()
            .flat_map(|&category| bank.questions_by_category(category))
            .filter(|q| !state.used_question_ids.contains(&q.id))
            .collect();
        let question = (*rng.choose(&pool)?).clone();
        state.used_question_ids.insert(question.id);
        Some(question)
    }

    /// Apply one question's points: award, record, advance, reset.
    ///
    /// Once this returns, the transient selections are gone and a replayed
    /// confirmation finds nothing to apply.
    fn finish_question(
        bank: &B,
        rng: &mut GameRng,
        state: &mut SessionState,
        breakdown: ScoreBreakdown,
    ) -> Result<(), GameError> {
        let question = state
            .current_question
            .clone()
            .ok_or_else(|| GameError::illegal_action(state.step, "no current question"))?;
        let scheduler = Self::scheduler_of(state)?;
        let roles = Self::resolve_roles(state, scheduler.assign(state.questions_asked))?;

        state.scoreboard.award(&roles.guesser, breakdown.guesser)?;
        state.scoreboard.award(&roles.responder, breakdown.responder)?;
        if let Some(director) = &roles.director {
            state.scoreboard.award(director, breakdown.extra)?;
        }

        let questions_per_round = scheduler.questions_per_round();
        let round = state.questions_asked / questions_per_round + 1;
        let question_number = state.questions_asked + 1;
        let record = Self::build_record(state.mode, round, question_number, &question, &roles, breakdown);
        state.ledger.append(record);

        debug!(
            question = question_number,
            guesser = breakdown.guesser,
            responder = breakdown.responder,
            extra = breakdown.extra,
            "question scored"
        );

        state.questions_asked += 1;
        state.current_question = None;
        state.clear_transient();

        if state.questions_asked % questions_per_round == 0 {
            info!(round, "round complete, raising continuation prompt");
            state.ask_continue = true;
        } else {
            Self::ensure_question(bank, rng, state);
        }
        Ok(())
    }

    fn build_record(
        mode: GameMode,
        round: u32,
        question_number: u32,
        question: &Question,
        roles: &RoleNames,
        breakdown: ScoreBreakdown,
    ) -> ResultRecord {
        match mode {
            GameMode::TwoPlayer => ResultRecord::TwoPlayer {
                round,
                question_number,
                category: question.category,
                text: question.text.clone(),
                responder: roles.responder.clone(),
                guesser: roles.guesser.clone(),
                responder_points: breakdown.responder,
                guesser_points: breakdown.guesser,
            },
            GameMode::ThreePlayer => ResultRecord::ThreePlayer {
                round,
                question_number,
                category: question.category,
                text: question.text.clone(),
                responder: roles.responder.clone(),
                guesser: roles.guesser.clone(),
                director: roles.director.clone().expect("three-player has a director"),
                responder_points: breakdown.responder,
                guesser_points: breakdown.guesser,
                director_points: breakdown.extra,
            },
            GameMode::Team => ResultRecord::Team {
                round,
                question_number,
                category: question.category,
                text: question.text.clone(),
                responder: roles.responder.clone(),
                guessing_team: roles.guesser.clone(),
                directing_team: roles.director.clone().expect("team mode has a director"),
                responder_points: breakdown.responder,
                guesser_points: breakdown.guesser,
                director_points: breakdown.extra,
            },
        }
    }

    fn scheduler_of(state: &SessionState) -> Result<TurnScheduler, GameError> {
        match state.mode {
            GameMode::TwoPlayer => Ok(TurnScheduler::two_player()),
            GameMode::ThreePlayer => Ok(TurnScheduler::three_player()),
            GameMode::Team => {
                let (roster_a, roster_b) = state.roster_sizes();
                if roster_a == 0 || roster_b == 0 {
                    return Err(GameError::configuration(
                        "team rosters are not set up yet",
                    ));
                }
                Ok(TurnScheduler::team(roster_a, roster_b))
            }
        }
    }

    fn resolve_roles(
        state: &SessionState,
        assignment: RoleAssignment,
    ) -> Result<RoleNames, GameError> {
        let participants = state
            .participants
            .as_ref()
            .ok_or_else(|| GameError::configuration("participants are not set up yet"))?;
        match (participants, assignment) {
            (Participants::Players(names), RoleAssignment::TwoPlayer { responder, guesser }) => {
                Ok(RoleNames {
                    responder: names[responder].clone(),
                    guesser: names[guesser].clone(),
                    director: None,
                })
            }
            (
                Participants::Players(names),
                RoleAssignment::ThreePlayer {
                    responder,
                    guesser,
                    director,
                },
            ) => Ok(RoleNames {
                responder: names[responder].clone(),
                guesser: names[guesser].clone(),
                director: Some(names[director].clone()),
            }),
            (
                Participants::Teams { team_a, team_b },
                RoleAssignment::Team {
                    guessing,
                    responder_index,
                    directing,
                },
            ) => {
                let side = |s: TeamSide| match s {
                    TeamSide::A => team_a,
                    TeamSide::B => team_b,
                };
                let guessing_team = side(guessing);
                Ok(RoleNames {
                    responder: guessing_team.qualified_name(responder_index),
                    guesser: guessing_team.name.clone(),
                    director: Some(side(directing).name.clone()),
                })
            }
            _ => Err(GameError::configuration(
                "role assignment does not match participants",
            )),
        }
    }

    fn expect_path(state: &SessionState, path: ScoringPath) -> Result<(), GameError> {
        if state.scoring == path {
            Ok(())
        } else {
            Err(GameError::illegal_action(
                state.step,
                "action belongs to the other scoring path",
            ))
        }
    }

    fn illegal(state: &SessionState, action: &SessionAction) -> GameError {
        GameError::illegal_action(state.step, format!("{action:?} is not legal here"))
    }
}
