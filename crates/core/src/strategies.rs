use super::traits::Traversal;
use common::types::Vector3;

/// The built-in for-each loop over the row slice.
///
/// This is the strategy the shipped binary measures.
pub struct ForEachLoop;

impl Traversal for ForEachLoop {
    fn label(&self) -> &'static str {
        "for-each"
    }

    fn sum_into(&self, rows: &[Vector3], acc: &mut Vector3) {
        for row in rows {
            *acc += row;
        }
    }
}

/// Manual indexed access with an explicit counter.
pub struct IndexedLoop;

impl Traversal for IndexedLoop {
    fn label(&self) -> &'static str {
        "indexed"
    }

    fn sum_into(&self, rows: &[Vector3], acc: &mut Vector3) {
        let mut i = 0;
        while i < rows.len() {
            *acc += &rows[i];
            i += 1;
        }
    }
}

/// An explicit cursor object driven through `is_done`/`advance`/`current`.
///
/// The comparison point for dynamic dispatch: `CursorLoop` below only
/// talks to the cursor through `dyn RowCursor`, so every step of the
/// loop pays a vtable call.
pub trait RowCursor {
    fn is_done(&self) -> bool;
    fn advance(&mut self);
    fn current(&self) -> &Vector3;
}

/// Cursor over a row slice, position tracked by index.
pub struct SliceCursor<'a> {
    rows: &'a [Vector3],
    i: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(rows: &'a [Vector3]) -> Self {
        SliceCursor { rows, i: 0 }
    }
}

impl RowCursor for SliceCursor<'_> {
    fn is_done(&self) -> bool {
        self.i >= self.rows.len()
    }

    fn advance(&mut self) {
        self.i += 1;
    }

    fn current(&self) -> &Vector3 {
        &self.rows[self.i]
    }
}

/// Drives a boxed `RowCursor` over the rows, one vtable call per step.
pub struct CursorLoop;

impl Traversal for CursorLoop {
    fn label(&self) -> &'static str {
        "dyn-cursor"
    }

    fn sum_into(&self, rows: &[Vector3], acc: &mut Vector3) {
        let mut cursor: Box<dyn RowCursor + '_> = Box::new(SliceCursor::new(rows));
        while !cursor.is_done() {
            *acc += cursor.current();
            cursor.advance();
        }
    }
}
