use rand::Rng;

use common::types::{COLUMNS, Dataset, Vector3};

/// Fills a new dataset with `rows` rows of uniform random columns.
///
/// Every cell is an independent draw from [0.0, 1.0). The generator is
/// owned by the caller so a fixed seed reproduces the same dataset; the
/// binary passes an OS-seeded `SmallRng`, tests a `seed_from_u64` one.
pub fn generate<R: Rng>(rng: &mut R, rows: usize) -> Dataset {
    (0..rows)
        .map(|_| {
            let mut row = Vector3::zero();
            for column in 0..COLUMNS {
                row[column] = rng.random_range(0.0..1.0);
            }
            row
        })
        .collect()
}

/// Sums each column independently across all rows, in insertion order.
///
/// One reference pass over the dataset. The timed strategies must agree
/// with `repetitions x column_sum(dataset)` up to floating-point rounding.
pub fn column_sum(rows: &[Vector3]) -> Vector3 {
    let mut sum = Vector3::zero();
    for row in rows {
        sum += row;
    }
    sum
}
