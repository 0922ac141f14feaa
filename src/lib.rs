//! # math-adventures
//!
//! Adaptive arithmetic practice driven by a decaying performance score
//! (P-Score).
//!
//! - [`adaptive`] - the P-Score controller: reward/penalty, decay, threshold
//!   transitions between Easy, Medium and Hard
//! - [`puzzle`] - seedable arithmetic puzzle generation per difficulty
//! - [`simulator`] - seedable synthetic learner responses
//! - [`tracker`] - per-session attempt log and aggregate statistics
//! - [`session`] - wires the pieces into a turn loop
//! - [`report`] - console rendering for the demo binary
//!
//! ```rust
//! use math_adventures::adaptive::{AdaptiveController, DifficultyLevel};
//!
//! let mut controller = AdaptiveController::new();
//! for _ in 0..4 {
//!     controller.update(true, 2.0);
//! }
//! assert_eq!(controller.difficulty(), DifficultyLevel::Medium);
//! assert_eq!(controller.score(), 0.0);
//! ```

pub mod adaptive;
pub mod config;
pub mod error;
pub mod logging;
pub mod puzzle;
pub mod report;
pub mod session;
pub mod simulator;
pub mod tracker;

pub use adaptive::{AdaptiveController, DifficultyLevel, PScoreConfig, UpdateResult};
pub use error::AppError;
pub use session::Session;
