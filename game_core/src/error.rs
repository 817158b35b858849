use thiserror::Error;

/// Failures surfaced by the game and its host adapters
#[derive(Debug, Error)]
pub enum GameError {
    /// Drawing surface or its 2D context is unavailable; the game cannot run
    #[error("failed to initialize rendering surface: {0}")]
    Initialization(String),
    /// The host refused to schedule the next frame
    #[error("failed to schedule frame: {0}")]
    Scheduling(String),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    /// Score store read or write failed; gameplay continues on local state
    #[error("score store unavailable: {0}")]
    Persistence(String),
}
