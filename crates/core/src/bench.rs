use std::hint::black_box;
use std::time::{Duration, Instant};

use super::traits::Traversal;
use common::error::Error;
use common::types::Vector3;

/// Validated benchmark parameters.
///
/// Both counts must be positive; the constraint is checked once here so
/// the run itself has no error path.
#[derive(Debug, Clone, Copy)]
pub struct BenchParams {
    rows: usize,
    repetitions: usize,
}

impl BenchParams {
    /// # Errors
    /// Returns `Error::ZeroRows` or `Error::ZeroRepetitions` if either
    /// count is zero.
    pub fn new(rows: usize, repetitions: usize) -> Result<Self, Error> {
        if rows == 0 {
            return Err(Error::ZeroRows);
        }
        if repetitions == 0 {
            return Err(Error::ZeroRepetitions);
        }

        Ok(BenchParams { rows, repetitions })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }
}

/// Outcome of a timed run: the final accumulator and the wall-clock
/// duration of all repetitions combined.
#[derive(Debug, Clone, Copy)]
pub struct TraversalReport {
    pub sum: Vector3,
    pub elapsed: Duration,
}

impl TraversalReport {
    /// Elapsed time as fractional seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `params.repetitions()` passes of `strategy` over `rows`,
/// accumulating into a single zero-initialized accumulator that is never
/// reset between passes.
///
/// The timestamps are taken with the monotonic `Instant` clock
/// immediately before and after the repetition loop, and the accumulator
/// is routed through `black_box` so the summation cannot be optimized
/// away.
pub fn run_traversals<S: Traversal>(
    rows: &[Vector3],
    params: &BenchParams,
    strategy: &S,
) -> TraversalReport {
    let mut acc = Vector3::zero();

    let start_time = Instant::now();
    for _ in 0..params.repetitions() {
        strategy.sum_into(rows, &mut acc);
    }
    let elapsed = start_time.elapsed();

    TraversalReport {
        sum: black_box(acc),
        elapsed,
    }
}
