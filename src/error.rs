use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unsupported variant: {0} (only NLHE is supported)")]
    UnsupportedVariant(String),

    #[error("Invalid player count: {0} (must be 2-10)")]
    InvalidPlayerCount(usize),

    #[error("Invalid {what} card count: {got} (expected {expected})")]
    InvalidCardCount {
        what: &'static str,
        got: usize,
        expected: &'static str,
    },

    #[error("Invalid card code: {0}")]
    InvalidCardCode(String),

    #[error("Duplicate card: {0}")]
    DuplicateCard(String),

    #[error("Insufficient cards: need {required} unknown cards, only {available} available")]
    InsufficientCards { required: usize, available: usize },

    #[error("Need at least {need} cards to evaluate, got {got}")]
    NotEnoughCards { need: usize, got: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
