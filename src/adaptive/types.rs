use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next level up, or `None` at the ceiling.
    pub fn harder(&self) -> Option<Self> {
        match self {
            Self::Easy => Some(Self::Medium),
            Self::Medium => Some(Self::Hard),
            Self::Hard => None,
        }
    }

    /// Next level down, or `None` at the floor.
    pub fn easier(&self) -> Option<Self> {
        match self {
            Self::Hard => Some(Self::Medium),
            Self::Medium => Some(Self::Easy),
            Self::Easy => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a turn moved the score the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rationale {
    HighFluency,
    Accuracy,
    Inaccurate,
}

impl Rationale {
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighFluency => "High Fluency - Correct answer with quick response",
            Self::Accuracy => "Accuracy - Correct but slow response",
            Self::Inaccurate => "Inaccurate - Incorrect answer indicates knowledge gap",
        }
    }
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub is_correct: bool,
    pub response_time_secs: f64,
}

impl Outcome {
    pub fn new(is_correct: bool, response_time_secs: f64) -> Self {
        Self {
            is_correct,
            response_time_secs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub previous_score: f64,
    pub new_score: f64,
    /// `new_score - previous_score * decay_factor`. After a reset this is
    /// not the reward scaled by decay; downstream consumers rely on it as is.
    pub score_change: f64,
    pub previous_difficulty: DifficultyLevel,
    pub new_difficulty: DifficultyLevel,
    pub transition_occurred: bool,
    pub rationale: Rationale,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerStatus {
    pub score: f64,
    pub difficulty: DifficultyLevel,
    pub difficulty_index: usize,
    pub increase_threshold: f64,
    pub decrease_threshold: f64,
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
