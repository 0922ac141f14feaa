use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::adaptive::{DifficultyLevel, Outcome};
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub user_answer: i64,
    pub response_time_secs: f64,
    pub is_correct: bool,
}

impl Response {
    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.is_correct, self.response_time_secs)
    }
}

pub trait ResponseSource {
    fn respond(&mut self, puzzle: &Puzzle, difficulty: DifficultyLevel) -> Response;
}

/// Base-time range (seconds) and accuracy chance of the simulated learner.
#[derive(Debug, Clone, Copy)]
struct LearnerProfile {
    base_time: (f64, f64),
    accuracy: f64,
}

fn profile_for(difficulty: DifficultyLevel) -> LearnerProfile {
    match difficulty {
        DifficultyLevel::Easy => LearnerProfile {
            base_time: (2.0, 6.0),
            accuracy: 0.85,
        },
        DifficultyLevel::Medium => LearnerProfile {
            base_time: (4.0, 10.0),
            accuracy: 0.70,
        },
        DifficultyLevel::Hard => LearnerProfile {
            base_time: (6.0, 15.0),
            accuracy: 0.55,
        },
    }
}

const SLIP_OFFSETS: [i64; 4] = [-2, -1, 1, 2];

/// Synthetic learner: answers correctly with a difficulty-dependent
/// probability, faster when right and slower when confused.
pub struct ResponseSimulator {
    rng: ChaCha8Rng,
}

impl ResponseSimulator {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn wrong_answer(&mut self, correct: i64) -> i64 {
        let guess = if self.rng.gen_bool(0.5) {
            correct + SLIP_OFFSETS[self.rng.gen_range(0..SLIP_OFFSETS.len())]
        } else {
            (correct as f64 * self.rng.gen_range(0.5..1.5)).trunc() as i64
        };

        if guess == correct {
            guess + 1
        } else {
            guess
        }
    }
}

impl ResponseSource for ResponseSimulator {
    fn respond(&mut self, puzzle: &Puzzle, difficulty: DifficultyLevel) -> Response {
        let profile = profile_for(difficulty);
        let base_time = self.rng.gen_range(profile.base_time.0..profile.base_time.1);
        let answers_correctly = self.rng.gen::<f64>() < profile.accuracy;

        let (user_answer, response_time_secs) = if answers_correctly {
            (puzzle.answer, base_time * self.rng.gen_range(0.7..1.0))
        } else {
            let answer = self.wrong_answer(puzzle.answer);
            (answer, base_time * self.rng.gen_range(1.0..1.4))
        };

        Response {
            user_answer,
            response_time_secs,
            is_correct: user_answer == puzzle.answer,
        }
    }
}

impl Default for ResponseSimulator {
    fn default() -> Self {
        Self::new()
    }
}
