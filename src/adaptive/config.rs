use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PScoreConfig {
    pub fluent_reward: f64,
    pub accurate_reward: f64,
    pub incorrect_penalty: f64,
    pub fluency_threshold_secs: f64,
    pub decay_factor: f64,
    pub increase_threshold: f64,
    pub decrease_threshold: f64,
}

impl Default for PScoreConfig {
    fn default() -> Self {
        Self {
            fluent_reward: 2.0,
            accurate_reward: 1.0,
            incorrect_penalty: 3.0,
            fluency_threshold_secs: 5.0,
            decay_factor: 0.9,
            increase_threshold: 5.0,
            decrease_threshold: -3.0,
        }
    }
}

impl PScoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("PSCORE_DECAY_FACTOR") {
            config.decay_factor = val.parse().unwrap_or(config.decay_factor);
        }
        if let Some(val) = lookup("PSCORE_INCREASE_THRESHOLD") {
            config.increase_threshold = val.parse().unwrap_or(config.increase_threshold);
        }
        if let Some(val) = lookup("PSCORE_DECREASE_THRESHOLD") {
            config.decrease_threshold = val.parse().unwrap_or(config.decrease_threshold);
        }
        if let Some(val) = lookup("PSCORE_FLUENCY_SECS") {
            config.fluency_threshold_secs = val.parse().unwrap_or(config.fluency_threshold_secs);
        }

        config
    }
}
