use common::types::Vector3;

/// Trait for iteration strategies under measurement.
///
/// One `sum_into` call is one repetition: traverse `rows` in insertion
/// order and add column 0, 1, 2 of each row into the accumulator's
/// respective slots, in that order. Implementations differ only in the
/// iteration construct they use, which is the quantity the benchmark
/// isolates. A strategy must never mutate the dataset.
pub trait Traversal {
    /// Short human-readable name for the strategy.
    fn label(&self) -> &'static str;

    /// Runs one full pass over `rows`, accumulating into `acc`.
    fn sum_into(&self, rows: &[Vector3], acc: &mut Vector3);
}
