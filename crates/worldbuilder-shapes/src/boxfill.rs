use worldbuilder_core::types::BlockId;
use worldbuilder_world::{fill_chunked, Grid, Marks};

use crate::error::ShapeError;
use crate::params::ShapeKind;

/// Fill the box spanned by the first and last mark with `block`.
///
/// `kind` only labels the error when there are too few marks. Returns the
/// number of cells in the box.
pub fn fill_between_marks<G: Grid + ?Sized>(
    grid: &mut G,
    marks: &Marks,
    block: BlockId,
    kind: ShapeKind,
) -> Result<u64, ShapeError> {
    if marks.len() < 2 {
        return Err(not_enough(kind, marks));
    }
    let (Some(first), Some(last)) = (marks.first(), marks.last()) else {
        return Err(not_enough(kind, marks));
    };

    Ok(fill_chunked(grid, block, first, last))
}

fn not_enough(kind: ShapeKind, marks: &Marks) -> ShapeError {
    ShapeError::NotEnoughMarks {
        kind,
        required: 2,
        found: marks.len(),
    }
}
