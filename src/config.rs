use crate::adaptive::PScoreConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub turns: usize,
    pub seed: Option<u64>,
    pub turn_delay_ms: u64,
    pub recent_window: usize,
    pub json_summary: bool,
    pub pscore: PScoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            turns: 15,
            seed: None,
            turn_delay_ms: 100,
            recent_window: 5,
            json_summary: false,
            pscore: PScoreConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let turns = lookup("MATH_TURNS")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(defaults.turns);

        let seed = lookup("MATH_SEED").and_then(|value| value.parse::<u64>().ok());

        let turn_delay_ms = lookup("MATH_TURN_DELAY_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.turn_delay_ms);

        let recent_window = lookup("MATH_RECENT_WINDOW")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.recent_window);

        let json_summary = lookup("MATH_JSON_SUMMARY")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        Self {
            log_level,
            turns,
            seed,
            turn_delay_ms,
            recent_window,
            json_summary,
            pscore: PScoreConfig::from_lookup(&lookup),
        }
    }
}
