#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid syntax: cannot apply ()")]
    EmptyApplication,

    #[error("invalid operator position: expected symbol, but found {0}")]
    InvalidOperator(String),

    #[error("unknown operator {0}")]
    UnknownOperator(String),

    #[error("invalid argument for {0}: expected {1}, but got {2}")]
    InvalidArgs(String, String, String),

    #[error("expression nested deeper than {0} levels")]
    TooDeeplyNested(usize),
}
