use serde::Serialize;

use crate::adaptive::{AdaptiveController, ControllerStatus, PScoreConfig, UpdateResult};
use crate::config::Config;
use crate::puzzle::{Puzzle, PuzzleError, PuzzleGenerator, PuzzleSource};
use crate::simulator::{Response, ResponseSimulator, ResponseSource};
use crate::tracker::PerformanceTracker;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    pub turn: usize,
    pub puzzle: Puzzle,
    pub response: Response,
    pub update: UpdateResult,
    pub status: ControllerStatus,
}

/// One learner's practice session. Owns its controller; sessions share no
/// state with each other.
pub struct Session<P, R> {
    controller: AdaptiveController,
    tracker: PerformanceTracker,
    puzzles: P,
    responses: R,
    turn: usize,
}

impl<P: PuzzleSource, R: ResponseSource> Session<P, R> {
    pub fn new(controller: AdaptiveController, puzzles: P, responses: R) -> Self {
        Self {
            controller,
            tracker: PerformanceTracker::new(),
            puzzles,
            responses,
            turn: 0,
        }
    }

    pub fn controller(&self) -> &AdaptiveController {
        &self.controller
    }

    pub fn tracker(&self) -> &PerformanceTracker {
        &self.tracker
    }

    pub fn turns_played(&self) -> usize {
        self.turn
    }

    pub fn play_turn(&mut self) -> Result<TurnReport, PuzzleError> {
        let turn = self.turn + 1;
        let difficulty = self.controller.difficulty();

        let puzzle = self.puzzles.generate(self.controller.current_difficulty())?;
        let response = self.responses.respond(&puzzle, difficulty);
        let update = self.controller.apply(response.outcome());
        let status = self.controller.status();

        self.tracker.record_attempt(&puzzle, &response, &status);
        if update.transition_occurred {
            self.tracker.record_transition(
                update.previous_difficulty,
                update.new_difficulty,
                update.previous_score,
                turn,
            );
        }
        self.turn = turn;

        tracing::debug!(
            turn,
            question = %puzzle.question,
            is_correct = response.is_correct,
            response_time_secs = response.response_time_secs,
            score = status.score,
            "turn played"
        );

        Ok(TurnReport {
            turn,
            puzzle,
            response,
            update,
            status,
        })
    }

    pub fn run(&mut self, turns: usize) -> Result<Vec<TurnReport>, PuzzleError> {
        (0..turns).map(|_| self.play_turn()).collect()
    }
}

impl Session<PuzzleGenerator, ResponseSimulator> {
    /// Generator and simulator draw from separate streams derived from `seed`.
    pub fn seeded(seed: u64, pscore: PScoreConfig) -> Self {
        Self::new(
            AdaptiveController::with_config(pscore),
            PuzzleGenerator::with_seed(seed),
            ResponseSimulator::with_seed(seed.wrapping_add(1)),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed, config.pscore.clone()),
            None => Self::new(
                AdaptiveController::with_config(config.pscore.clone()),
                PuzzleGenerator::new(),
                ResponseSimulator::new(),
            ),
        }
    }
}
