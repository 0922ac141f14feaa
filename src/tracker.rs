use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adaptive::types::round_to;
use crate::adaptive::{ControllerStatus, DifficultyLevel};
use crate::puzzle::Puzzle;
use crate::simulator::Response;

const FAST_RESPONSE_SECS: f64 = 5.0;
const IMPROVING_ACCURACY: f64 = 0.6;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("no attempts recorded")]
    NoAttempts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub attempt_number: usize,
    pub elapsed_secs: f64,
    pub question: String,
    pub correct_answer: i64,
    pub user_answer: i64,
    pub response_time_secs: f64,
    pub is_correct: bool,
    pub difficulty: DifficultyLevel,
    pub score_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRecord {
    pub attempt_number: usize,
    pub from: DifficultyLevel,
    pub to: DifficultyLevel,
    pub trigger_score: f64,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub total_attempts: usize,
    pub correct_attempts: usize,
    pub accuracy_rate: f64,
    pub avg_response_time: f64,
    pub fast_responses: usize,
    pub fast_response_rate: f64,
    pub difficulty_distribution: BTreeMap<DifficultyLevel, usize>,
    pub difficulty_transitions: usize,
    pub final_score: f64,
    pub score_range: ScoreRange,
    pub session_duration_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTrend {
    Improving,
    Struggling,
}

impl PerformanceTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Struggling => "struggling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPerformance {
    pub attempts_analyzed: usize,
    pub recent_accuracy: f64,
    pub recent_correct: usize,
    pub trend: PerformanceTrend,
}

/// Session log of attempts and difficulty transitions. Read-only with
/// respect to the controller: it only consumes statuses.
pub struct PerformanceTracker {
    started_at: DateTime<Utc>,
    clock: Instant,
    attempts: Vec<AttemptRecord>,
    transitions: Vec<TransitionRecord>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            clock: Instant::now(),
            attempts: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    pub fn record_attempt(&mut self, puzzle: &Puzzle, response: &Response, status: &ControllerStatus) {
        let record = AttemptRecord {
            attempt_number: self.attempts.len() + 1,
            elapsed_secs: self.elapsed_secs(),
            question: puzzle.question.clone(),
            correct_answer: puzzle.answer,
            user_answer: response.user_answer,
            response_time_secs: response.response_time_secs,
            is_correct: response.is_correct,
            difficulty: puzzle.difficulty,
            score_after: status.score,
        };
        self.attempts.push(record);
    }

    pub fn record_transition(
        &mut self,
        from: DifficultyLevel,
        to: DifficultyLevel,
        trigger_score: f64,
        attempt_number: usize,
    ) {
        self.transitions.push(TransitionRecord {
            attempt_number,
            from,
            to,
            trigger_score,
            elapsed_secs: self.elapsed_secs(),
        });
    }

    pub fn session_summary(&self) -> Result<SessionSummary, TrackerError> {
        if self.attempts.is_empty() {
            return Err(TrackerError::NoAttempts);
        }

        let total = self.attempts.len();
        let total_f = total as f64;
        let correct = self.attempts.iter().filter(|a| a.is_correct).count();

        let avg_response_time =
            self.attempts.iter().map(|a| a.response_time_secs).sum::<f64>() / total_f;
        let fast_responses = self
            .attempts
            .iter()
            .filter(|a| a.response_time_secs <= FAST_RESPONSE_SECS)
            .count();

        let mut difficulty_distribution = BTreeMap::new();
        for attempt in &self.attempts {
            *difficulty_distribution.entry(attempt.difficulty).or_insert(0) += 1;
        }

        let scores = self.attempts.iter().map(|a| a.score_after);
        let min = scores.clone().fold(f64::INFINITY, f64::min);
        let max = scores.fold(f64::NEG_INFINITY, f64::max);
        let final_score = self.attempts.last().map(|a| a.score_after).unwrap_or(0.0);

        Ok(SessionSummary {
            started_at: self.started_at,
            total_attempts: total,
            correct_attempts: correct,
            accuracy_rate: round_to(correct as f64 / total_f * 100.0, 1),
            avg_response_time: round_to(avg_response_time, 2),
            fast_responses,
            fast_response_rate: round_to(fast_responses as f64 / total_f * 100.0, 1),
            difficulty_distribution,
            difficulty_transitions: self.transitions.len(),
            final_score: round_to(final_score, 2),
            score_range: ScoreRange {
                min: round_to(min, 2),
                max: round_to(max, 2),
            },
            session_duration_secs: round_to(self.elapsed_secs(), 1),
        })
    }

    /// Accuracy over the last `last_n` attempts (all of them if fewer).
    pub fn recent_performance(&self, last_n: usize) -> Result<RecentPerformance, TrackerError> {
        let window = last_n.max(1);
        let start = self.attempts.len().saturating_sub(window);
        let recent = &self.attempts[start..];

        if recent.is_empty() {
            return Err(TrackerError::NoAttempts);
        }

        let recent_correct = recent.iter().filter(|a| a.is_correct).count();
        let accuracy = recent_correct as f64 / recent.len() as f64;

        Ok(RecentPerformance {
            attempts_analyzed: recent.len(),
            recent_accuracy: round_to(accuracy * 100.0, 1),
            recent_correct,
            trend: if accuracy > IMPROVING_ACCURACY {
                PerformanceTrend::Improving
            } else {
                PerformanceTrend::Struggling
            },
        })
    }

    pub fn detailed_log(&self) -> String {
        let rule = "=".repeat(80);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}\nDETAILED SESSION LOG\n{rule}");

        for a in &self.attempts {
            let mark = if a.is_correct { "✓" } else { "✗" };
            let _ = writeln!(
                out,
                "#{:2} [{:6}] {:15} = {:3} {} ({:.1}s) P-Score: {:+.1}",
                a.attempt_number,
                a.difficulty.as_str(),
                a.question,
                a.user_answer,
                mark,
                a.response_time_secs,
                a.score_after
            );
        }

        let _ = writeln!(out, "\nDifficulty Transitions:");
        for t in &self.transitions {
            let _ = writeln!(
                out,
                "  Attempt #{}: {} → {} (P-Score: {:+.1})",
                t.attempt_number, t.from, t.to, t.trigger_score
            );
        }

        let _ = writeln!(out, "{rule}");
        out
    }
}

impl Default for PerformanceTracker {
    fn default() -> Self {
        Self::new()
    }
}
