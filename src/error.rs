// External libraries
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("an automaton needs at least one column")]
    EmptyRow,
    #[error("failed to write automaton output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
