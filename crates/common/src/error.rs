use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The dataset must hold at least one row (row count N > 0).
    ZeroRows,

    /// The traversal must run at least one repetition (NUM_TESTS > 0).
    ZeroRepetitions,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ZeroRows => write!(f, "Row count must be a positive integer."),

            Error::ZeroRepetitions => {
                write!(f, "Repetition count must be a positive integer.")
            }
        }
    }
}

impl std::error::Error for Error {}
