use crate::adaptive::config::PScoreConfig;
use crate::adaptive::types::*;

/// Decaying performance score (P-Score) engine.
///
/// Every update adds a reward or penalty, multiplies the result by the decay
/// factor, then checks the two thresholds. A crossing moves difficulty one
/// level and clears the score to exactly `0.0`; at the ceiling or floor the
/// score is left alone and keeps accumulating.
#[derive(Debug, Clone)]
pub struct AdaptiveController {
    config: PScoreConfig,
    score: f64,
    difficulty: DifficultyLevel,
}

impl AdaptiveController {
    pub fn new() -> Self {
        Self::with_config(PScoreConfig::default())
    }

    pub fn with_config(config: PScoreConfig) -> Self {
        Self {
            config,
            score: 0.0,
            difficulty: DifficultyLevel::Easy,
        }
    }

    pub fn config(&self) -> &PScoreConfig {
        &self.config
    }

    /// Unrounded score.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn current_difficulty(&self) -> &'static str {
        self.difficulty.as_str()
    }

    pub fn update(&mut self, is_correct: bool, response_time_secs: f64) -> UpdateResult {
        let previous_score = self.score;
        let previous_difficulty = self.difficulty;

        let (delta, rationale) = self.classify(is_correct, response_time_secs);

        self.score = (self.score + delta) * self.config.decay_factor;

        let transition_occurred = self.check_transition();

        tracing::debug!(
            is_correct,
            response_time_secs,
            delta,
            previous_score,
            new_score = self.score,
            difficulty = %self.difficulty,
            "p-score updated"
        );

        UpdateResult {
            previous_score,
            new_score: self.score,
            score_change: self.score - previous_score * self.config.decay_factor,
            previous_difficulty,
            new_difficulty: self.difficulty,
            transition_occurred,
            rationale,
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> UpdateResult {
        self.update(outcome.is_correct, outcome.response_time_secs)
    }

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            score: round_to(self.score, 2),
            difficulty: self.difficulty,
            difficulty_index: self.difficulty.index(),
            increase_threshold: self.config.increase_threshold,
            decrease_threshold: self.config.decrease_threshold,
        }
    }

    fn classify(&self, is_correct: bool, response_time_secs: f64) -> (f64, Rationale) {
        if !is_correct {
            return (-self.config.incorrect_penalty, Rationale::Inaccurate);
        }

        // Negative and NaN times count as slow.
        let fluent = response_time_secs >= 0.0
            && response_time_secs <= self.config.fluency_threshold_secs;

        if fluent {
            (self.config.fluent_reward, Rationale::HighFluency)
        } else {
            (self.config.accurate_reward, Rationale::Accuracy)
        }
    }

    /// Each direction requires room to move. Increase is checked first, and a
    /// blocked increase at the ceiling still falls through to the decrease check.
    fn check_transition(&mut self) -> bool {
        let harder = if self.score >= self.config.increase_threshold {
            self.difficulty.harder()
        } else {
            None
        };
        let target = harder.or_else(|| {
            if self.score <= self.config.decrease_threshold {
                self.difficulty.easier()
            } else {
                None
            }
        });

        let Some(next) = target else {
            return false;
        };

        tracing::info!(
            from = %self.difficulty,
            to = %next,
            trigger_score = self.score,
            "difficulty transition"
        );

        self.difficulty = next;
        self.score = 0.0;
        true
    }
}

impl Default for AdaptiveController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn promoted_to(level: DifficultyLevel) -> AdaptiveController {
        let mut controller = AdaptiveController::new();
        while controller.difficulty() != level {
            controller.update(true, 1.0);
        }
        controller
    }

    #[test]
    fn test_initial_state_is_easy_and_zero() {
        let controller = AdaptiveController::new();
        assert_eq!(controller.score(), 0.0);
        assert_eq!(controller.difficulty(), DifficultyLevel::Easy);
        assert_eq!(controller.current_difficulty(), "Easy");
    }

    #[test]
    fn test_fast_correct_streak_promotes_on_fourth_turn() {
        let mut controller = AdaptiveController::new();
        let expected = [1.8, 3.42, 4.878];

        for want in expected {
            let result = controller.update(true, 2.0);
            assert!((result.new_score - want).abs() < EPS, "got {}", result.new_score);
            assert!(!result.transition_occurred);
            assert_eq!(result.rationale, Rationale::HighFluency);
        }

        let result = controller.update(true, 2.0);
        assert!(result.transition_occurred);
        assert_eq!(result.previous_difficulty, DifficultyLevel::Easy);
        assert_eq!(result.new_difficulty, DifficultyLevel::Medium);
        assert_eq!(result.new_score, 0.0);
        assert_eq!(controller.score(), 0.0);
    }

    #[test]
    fn test_two_misses_demote_from_medium() {
        let mut controller = promoted_to(DifficultyLevel::Medium);
        assert_eq!(controller.score(), 0.0);

        let first = controller.update(false, 1.0);
        assert!((first.new_score + 2.7).abs() < EPS);
        assert!(!first.transition_occurred);
        assert_eq!(first.rationale, Rationale::Inaccurate);

        let second = controller.update(false, 1.0);
        assert!(second.transition_occurred);
        assert_eq!(second.new_difficulty, DifficultyLevel::Easy);
        assert_eq!(controller.score(), 0.0);
    }

    #[test]
    fn test_slow_correct_earns_accuracy_reward() {
        let mut controller = AdaptiveController::new();
        let result = controller.update(true, 5.01);
        assert_eq!(result.rationale, Rationale::Accuracy);
        assert!((result.new_score - 0.9).abs() < EPS);
    }

    #[test]
    fn test_fluency_boundary_is_inclusive() {
        let mut controller = AdaptiveController::new();
        assert_eq!(controller.update(true, 5.0).rationale, Rationale::HighFluency);
    }

    #[test]
    fn test_negative_and_nan_times_count_as_slow() {
        let mut controller = AdaptiveController::new();
        assert_eq!(controller.update(true, -1.0).rationale, Rationale::Accuracy);
        assert_eq!(controller.update(true, f64::NAN).rationale, Rationale::Accuracy);
    }

    #[test]
    fn test_incorrect_ignores_response_time() {
        let mut a = AdaptiveController::new();
        let mut b = AdaptiveController::new();
        let fast = a.update(false, 0.5);
        let slow = b.update(false, 60.0);
        assert_eq!(fast.new_score, slow.new_score);
        assert!((fast.new_score + 2.7).abs() < EPS);
    }

    #[test]
    fn test_score_change_uses_decayed_previous_score() {
        let mut controller = AdaptiveController::new();
        controller.update(true, 1.0);
        let result = controller.update(true, 8.0);
        let expected = result.new_score - result.previous_score * 0.9;
        assert_eq!(result.score_change, expected);
        assert!((result.score_change - 0.9).abs() < EPS);
    }

    #[test]
    fn test_score_change_after_reset_is_negative_decayed_previous() {
        let mut controller = AdaptiveController::new();
        for _ in 0..3 {
            controller.update(true, 1.0);
        }
        let result = controller.update(true, 1.0);
        assert!(result.transition_occurred);
        assert!((result.score_change + result.previous_score * 0.9).abs() < EPS);
    }

    #[test]
    fn test_score_keeps_growing_at_ceiling() {
        let mut controller = promoted_to(DifficultyLevel::Hard);
        let mut last = controller.score();
        for _ in 0..20 {
            let result = controller.update(true, 1.0);
            assert!(!result.transition_occurred);
            assert!(result.new_score > last);
            last = result.new_score;
        }
        assert!(controller.score() > 5.0);
        assert_eq!(controller.difficulty(), DifficultyLevel::Hard);
    }

    #[test]
    fn test_score_keeps_falling_at_floor() {
        let mut controller = AdaptiveController::new();
        for _ in 0..10 {
            let result = controller.update(false, 3.0);
            assert!(!result.transition_occurred);
        }
        assert!(controller.score() < -3.0);
        assert_eq!(controller.difficulty(), DifficultyLevel::Easy);
    }

    #[test]
    fn test_status_rounds_but_state_keeps_precision() {
        let mut controller = AdaptiveController::new();
        controller.update(true, 1.0);
        controller.update(true, 1.0);
        controller.update(true, 1.0);

        let status = controller.status();
        assert_eq!(status.score, 4.88);
        assert!((controller.score() - 4.878).abs() < EPS);
        assert_eq!(status.difficulty, DifficultyLevel::Easy);
        assert_eq!(status.difficulty_index, 0);
        assert_eq!(status.increase_threshold, 5.0);
        assert_eq!(status.decrease_threshold, -3.0);
    }

    #[test]
    fn test_increase_wins_when_thresholds_overlap() {
        let config = PScoreConfig {
            increase_threshold: 0.5,
            decrease_threshold: 1.0,
            ..Default::default()
        };
        let mut controller = AdaptiveController::with_config(config);
        let result = controller.update(true, 1.0);
        assert!(result.transition_occurred);
        assert_eq!(result.new_difficulty, DifficultyLevel::Medium);
    }

    #[test]
    fn test_overlap_at_ceiling_falls_through_to_decrease() {
        let config = PScoreConfig {
            increase_threshold: 0.5,
            decrease_threshold: 1.0,
            ..Default::default()
        };
        let mut controller = AdaptiveController::with_config(config);
        controller.update(true, 1.0);
        controller.update(true, 1.0);
        assert_eq!(controller.difficulty(), DifficultyLevel::Hard);

        let result = controller.update(true, 10.0);
        assert!(result.transition_occurred);
        assert_eq!(result.previous_difficulty, DifficultyLevel::Hard);
        assert_eq!(result.new_difficulty, DifficultyLevel::Medium);
        assert_eq!(controller.score(), 0.0);
    }

    #[test]
    fn test_apply_matches_update() {
        let mut a = AdaptiveController::new();
        let mut b = AdaptiveController::new();
        assert_eq!(a.apply(Outcome::new(true, 7.0)), b.update(true, 7.0));
    }
}
