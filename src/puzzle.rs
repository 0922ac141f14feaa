//! Arithmetic puzzle generation.
//!
//! Scaling by difficulty:
//! - Easy: single-digit addition or subtraction
//! - Medium: two-digit addition/subtraction, small multiplication
//! - Hard: `(a + b) × c`, three-digit addition/subtraction, exact division

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::adaptive::DifficultyLevel;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub question: String,
    pub answer: i64,
    pub difficulty: DifficultyLevel,
}

pub trait PuzzleSource {
    fn generate_for(&mut self, difficulty: DifficultyLevel) -> Puzzle;

    fn generate(&mut self, label: &str) -> Result<Puzzle, PuzzleError> {
        let difficulty = DifficultyLevel::parse(label)
            .ok_or_else(|| PuzzleError::InvalidDifficulty(label.to_string()))?;
        Ok(self.generate_for(difficulty))
    }
}

pub struct PuzzleGenerator {
    rng: ChaCha8Rng,
}

impl PuzzleGenerator {
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

    fn easy(&mut self) -> (String, i64) {
        if self.rng.gen_bool(0.5) {
            let a = self.rng.gen_range(1..=9);
            let b = self.rng.gen_range(1..=9);
            (format!("{a} + {b}"), a + b)
        } else {
            let a = self.rng.gen_range(5..=9);
            let b = self.rng.gen_range(1..=a);
            (format!("{a} - {b}"), a - b)
        }
    }

    fn medium(&mut self) -> (String, i64) {
        match self.rng.gen_range(0..3) {
            0 => {
                let a = self.rng.gen_range(10..=50);
                let b = self.rng.gen_range(10..=50);
                (format!("{a} + {b}"), a + b)
            }
            1 => {
                let a = self.rng.gen_range(20..=99);
                let b = self.rng.gen_range(10..=a);
                (format!("{a} - {b}"), a - b)
            }
            _ => {
                let a = self.rng.gen_range(2..=9);
                let b = self.rng.gen_range(2..=12);
                (format!("{a} × {b}"), a * b)
            }
        }
    }

    fn hard(&mut self) -> (String, i64) {
        match self.rng.gen_range(0..3) {
            0 => {
                let a = self.rng.gen_range(5..=15);
                let b = self.rng.gen_range(5..=15);
                let c = self.rng.gen_range(2..=8);
                (format!("({a} + {b}) × {c}"), (a + b) * c)
            }
            1 => {
                if self.rng.gen_bool(0.5) {
                    let a = self.rng.gen_range(100..=500);
                    let b = self.rng.gen_range(100..=500);
                    (format!("{a} + {b}"), a + b)
                } else {
                    let a = self.rng.gen_range(200..=999);
                    let b = self.rng.gen_range(100..=a);
                    (format!("{a} - {b}"), a - b)
                }
            }
            _ => {
                let quotient = self.rng.gen_range(5..=20);
                let divisor = self.rng.gen_range(3..=12);
                let dividend = quotient * divisor;
                (format!("{dividend} ÷ {divisor}"), quotient)
            }
        }
    }
}

impl PuzzleSource for PuzzleGenerator {
    fn generate_for(&mut self, difficulty: DifficultyLevel) -> Puzzle {
        let (question, answer) = match difficulty {
            DifficultyLevel::Easy => self.easy(),
            DifficultyLevel::Medium => self.medium(),
            DifficultyLevel::Hard => self.hard(),
        };

        Puzzle {
            question,
            answer,
            difficulty,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
