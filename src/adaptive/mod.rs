pub mod config;
pub mod engine;
pub mod types;

pub use config::PScoreConfig;
pub use engine::AdaptiveController;
pub use types::*;
