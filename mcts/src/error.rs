use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("illegal action requested: {0}")]
    IllegalMoveRequested(String),
    #[error("evaluator unavailable: {0}")]
    EvaluatorUnavailable(String),
    #[error("model inference failed: {0}")]
    Inference(#[from] anyhow::Error),
    #[error("non-terminal position has no legal actions")]
    EmptyLegalMoveSet,
    #[error("position is terminal, there is no action to search")]
    TerminalPosition,
    #[error("evaluator returned {actual} priors, expected {expected}")]
    PriorMismatch { expected: usize, actual: usize },
    #[error("action has no policy index: {0}")]
    UnindexedAction(String),
    #[error("root has no children, run a search first")]
    NoAvailableActions,
}
