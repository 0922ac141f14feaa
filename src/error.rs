use crate::puzzle::PuzzleError;
use crate::tracker::TrackerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
