//! Locating the edge of an existing structure along one axis.
//!
//! Both searches report offsets relative to `start`. The boundary is the first
//! offset `k` whose cell is not `block` while the cell at `k - 1` is. `None`
//! means no such boundary was found within the searched range.

use worldbuilder_core::types::{Axis, BlockId, Position};
use worldbuilder_world::Grid;

fn holds<G: Grid + ?Sized>(
    grid: &G,
    start: Position,
    axis: Axis,
    offset: i32,
    block: BlockId,
) -> bool {
    grid.test_for_block(block, start + axis.offset(offset))
}

/// Find the boundary by doubling a test offset until it leaves the
/// structure (or reaches `max_range`), then binary searching the last
/// doubling interval. Uses O(log max_range) lookups.
pub fn exponential_search<G: Grid + ?Sized>(
    grid: &G,
    start: Position,
    axis: Axis,
    max_range: i32,
    block: BlockId,
) -> Option<i32> {
    if max_range < 2 || !holds(grid, start, axis, 0, block) {
        log::error!("Block {block} not found at {start}");
        return None;
    }

    // Already at the boundary
    if !holds(grid, start, axis, 1, block) {
        return Some(1);
    }

    let mut bound = 1;
    while bound < max_range && holds(grid, start, axis, bound, block) {
        bound *= 2;
    }

    binary_search(grid, start, axis, bound / 2, bound.min(max_range - 1), block)
}

/// Binary search for the boundary within `[low, high]`.
///
/// Each step tests the midpoint and the cell just below it: a midpoint
/// outside the structure with its predecessor inside is the boundary, two
/// inside cells put the boundary above, anything else puts it below.
pub fn binary_search<G: Grid + ?Sized>(
    grid: &G,
    start: Position,
    axis: Axis,
    low: i32,
    high: i32,
    block: BlockId,
) -> Option<i32> {
    let (mut low, mut high) = (low, high);
    while low <= high {
        let mid = low + (high - low) / 2;
        let mid_inside = holds(grid, start, axis, mid, block);
        let below_inside = holds(grid, start, axis, mid - 1, block);

        match (mid_inside, below_inside) {
            (false, true) => return Some(mid),
            (true, true) => low = mid + 1,
            _ => high = mid - 1,
        }
    }

    log::error!("Block {block} boundary not found from {start} along {axis:?}");
    None
}
