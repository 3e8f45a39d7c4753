pub mod error;
pub mod report;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use error::Error;
use iter_bench_core::{BenchParams, ForEachLoop, dataset, run_traversals};

/// Number of rows in the dataset.
const N: usize = 10_000;

/// Number of full traversals over the dataset.
const NUM_TESTS: usize = 10_000;

/// Linear flow: generate, traverse repeatedly, report. No command-line
/// arguments, environment variables, or files are consulted.
fn main() -> Result<(), Error> {
    println!("Testing iterators...");

    let params = BenchParams::new(N, NUM_TESTS)?;

    let mut rng = SmallRng::from_os_rng();
    let data = dataset::generate(&mut rng, params.rows());

    let result = run_traversals(&data, &params, &ForEachLoop);

    println!("{}", report::render_sum(&result.sum));
    println!("{}", report::render_time(result.elapsed_seconds()));

    Ok(())
}
