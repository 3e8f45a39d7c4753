pub mod bench;
pub mod dataset;
pub mod strategies;
pub mod traits;

pub use bench::{BenchParams, TraversalReport, run_traversals};
pub use strategies::ForEachLoop;
