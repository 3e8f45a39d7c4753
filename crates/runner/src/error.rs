use thiserror::Error;

use common::error::Error as BenchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Benchmark parameter error: {0}")]
    ParamError(#[from] BenchError),
}
