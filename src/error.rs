//! Error types
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("cannot operate on an empty sample set")]
    EmptySplit,
    #[error("not enough samples to train on")]
    NotEnoughSamples,
    #[error("no split feature could be selected from the candidate set")]
    NoSplitCandidate,
    #[error("no branch matches sample {sample} at node {node}")]
    BranchNotFound { sample: String, node: String },
    #[error("branch task failed: {0}")]
    Execution(String),
    #[error("cannot export a tree whose root is a leaf")]
    LeafRoot,
}
