use std::ops::{AddAssign, Index, IndexMut};

/// Number of columns in every row of the benchmark dataset.
pub const COLUMNS: usize = 3;

/// A row of three 64-bit floats, indexable by column.
///
/// Doubles as the running-sum accumulator: summation is expressed as
/// `acc += &row`, adding column 0, 1, 2 into the respective slots with
/// plain floating-point addition. No compensated summation is used;
/// the benchmark intentionally exposes ordinary accumulation error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(pub [f64; COLUMNS]);

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3([x, y, z])
    }

    /// The all-zero value used to seed an accumulator.
    pub fn zero() -> Self {
        Vector3([0.0; COLUMNS])
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, column: usize) -> &f64 {
        &self.0[column]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, column: usize) -> &mut f64 {
        &mut self.0[column]
    }
}

impl AddAssign<&Vector3> for Vector3 {
    fn add_assign(&mut self, row: &Vector3) {
        for column in 0..COLUMNS {
            self.0[column] += row.0[column];
        }
    }
}

/// Type alias for the benchmark dataset: an ordered sequence of rows.
pub type Dataset = Vec<Vector3>;
