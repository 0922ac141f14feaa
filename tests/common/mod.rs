#![allow(dead_code)]

use std::collections::VecDeque;

use math_adventures::adaptive::{DifficultyLevel, Outcome};
use math_adventures::puzzle::{Puzzle, PuzzleSource};
use math_adventures::simulator::{Response, ResponseSource};

/// Always asks `2 + 2` at whatever level is requested.
pub struct FixedPuzzles;

impl PuzzleSource for FixedPuzzles {
    fn generate_for(&mut self, difficulty: DifficultyLevel) -> Puzzle {
        Puzzle {
            question: "2 + 2".to_string(),
            answer: 4,
            difficulty,
        }
    }
}

/// Replays a fixed list of outcomes, then keeps answering wrong.
pub struct ScriptedResponses {
    script: VecDeque<Outcome>,
}

impl ScriptedResponses {
    pub fn new(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        Self {
            script: outcomes.into_iter().collect(),
        }
    }
}

impl ResponseSource for ScriptedResponses {
    fn respond(&mut self, puzzle: &Puzzle, _difficulty: DifficultyLevel) -> Response {
        let outcome = self.script.pop_front().unwrap_or(Outcome::new(false, 10.0));
        Response {
            user_answer: if outcome.is_correct {
                puzzle.answer
            } else {
                puzzle.answer + 1
            },
            response_time_secs: outcome.response_time_secs,
            is_correct: outcome.is_correct,
        }
    }
}

pub fn fast_correct(n: usize) -> Vec<Outcome> {
    vec![Outcome::new(true, 2.0); n]
}

pub fn misses(n: usize) -> Vec<Outcome> {
    vec![Outcome::new(false, 1.0); n]
}
