use proptest::prelude::*;
use proptest::strategy::Strategy;

use common::types::{COLUMNS, Vector3};
use iter_bench_core::bench::{BenchParams, run_traversals};
use iter_bench_core::dataset::{column_sum, generate};
use iter_bench_core::strategies::{CursorLoop, ForEachLoop, IndexedLoop};
use iter_bench_core::traits::Traversal;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const ROWS_STRATEGY: std::ops::Range<usize> = 1usize..200;
const REPS_STRATEGY: std::ops::Range<usize> = 1usize..20;

fn bench_strategy() -> impl Strategy<Value = (u64, usize, usize)> {
    any::<u64>().prop_flat_map(|seed| {
        (
            proptest::strategy::Just(seed),
            ROWS_STRATEGY,
            REPS_STRATEGY,
        )
    })
}

/// Relative floating-point tolerance: summation order differs between the
/// reference column sum and the repeated traversal, so results need not
/// be bit-exact.
fn assert_close(actual: f64, expected: f64) -> Result<(), TestCaseError> {
    let scale = expected.abs().max(1.0);
    prop_assert!(
        (actual - expected).abs() <= 1e-9 * scale,
        "{} is not within tolerance of {}",
        actual,
        expected
    );
    Ok(())
}

proptest! {
    /// Property: `generate` produces exactly `rows` rows of COLUMNS cells,
    /// each in [0.0, 1.0).
    #[test]
    fn dataset_shape_and_range((seed, rows, _reps) in bench_strategy()) {
        let data = generate(&mut SmallRng::seed_from_u64(seed), rows);

        prop_assert_eq!(data.len(), rows);
        for row in &data {
            for column in 0..COLUMNS {
                prop_assert!((0.0..1.0).contains(&row[column]));
            }
        }
    }

    /// Property: a fixed seed reproduces the dataset exactly.
    #[test]
    fn dataset_reproducible_per_seed((seed, rows, _reps) in bench_strategy()) {
        let a = generate(&mut SmallRng::seed_from_u64(seed), rows);
        let b = generate(&mut SmallRng::seed_from_u64(seed), rows);
        prop_assert_eq!(a, b);
    }

    /// Property: the final accumulator equals repetitions x column_sum
    /// within floating-point tolerance.
    #[test]
    fn accumulation_identity((seed, rows, reps) in bench_strategy()) {
        let data = generate(&mut SmallRng::seed_from_u64(seed), rows);
        let params = BenchParams::new(rows, reps).unwrap();

        let report = run_traversals(&data, &params, &ForEachLoop);
        let expected = column_sum(&data);

        for column in 0..COLUMNS {
            assert_close(report.sum[column], reps as f64 * expected[column])?;
        }
    }

    /// Property: every iteration strategy yields the same sums on the
    /// same dataset.
    #[test]
    fn strategies_are_equivalent((seed, rows, reps) in bench_strategy()) {
        let data = generate(&mut SmallRng::seed_from_u64(seed), rows);
        let params = BenchParams::new(rows, reps).unwrap();

        let reference = run_traversals(&data, &params, &ForEachLoop);
        let strategies: [&dyn Traversal; 2] = [&IndexedLoop, &CursorLoop];

        for strategy in strategies {
            let mut acc = Vector3::zero();
            for _ in 0..reps {
                strategy.sum_into(&data, &mut acc);
            }
            for column in 0..COLUMNS {
                assert_close(acc[column], reference.sum[column])?;
            }
        }
    }

    /// Property: traversal leaves the dataset unchanged, so repeated runs
    /// with fresh accumulators agree.
    #[test]
    fn dataset_immutable_across_runs((seed, rows, reps) in bench_strategy()) {
        let data = generate(&mut SmallRng::seed_from_u64(seed), rows);
        let before = data.clone();
        let params = BenchParams::new(rows, reps).unwrap();

        let first = run_traversals(&data, &params, &ForEachLoop);
        let second = run_traversals(&data, &params, &ForEachLoop);

        prop_assert_eq!(data, before);
        prop_assert_eq!(first.sum, second.sum);
    }
}
