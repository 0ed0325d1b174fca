use glam::IVec3;
use worldbuilder_core::math::cuboid_volume;
use worldbuilder_core::types::{BlockId, Position};

use crate::grid::Grid;

/// Fill the inclusive box `from`..`to`, splitting it into pieces no larger
/// than the grid's fill cap.
///
/// Pieces are cut into vertical slabs first (halving Y), then along the
/// longer horizontal axis once a piece is a single layer. Returns the number
/// of cells covered.
pub fn fill_chunked<G: Grid + ?Sized>(
    grid: &mut G,
    block: BlockId,
    from: Position,
    to: Position,
) -> u64 {
    let limit = grid.bounds().max_fill_volume.max(1);
    let min = from.min(to);
    let max = from.max(to);

    let mut pending = vec![(min, max)];
    let mut pieces = 0u32;
    while let Some((lo, hi)) = pending.pop() {
        if cuboid_volume(lo, hi, None) <= limit {
            grid.fill(block, lo, hi);
            pieces += 1;
            continue;
        }
        let (a, b) = split_box(lo, hi);
        pending.push(b);
        pending.push(a);
    }

    if pieces > 1 {
        log::debug!("Fill {min} -> {max} split into {pieces} pieces");
    }
    cuboid_volume(min, max, None)
}

/// Halve a box that holds more than one cell.
fn split_box(lo: IVec3, hi: IVec3) -> ((IVec3, IVec3), (IVec3, IVec3)) {
    let size = hi - lo;
    if size.y > 0 {
        let mid = lo.y + size.y / 2;
        (
            (lo, IVec3::new(hi.x, mid, hi.z)),
            (IVec3::new(lo.x, mid + 1, lo.z), hi),
        )
    } else if size.x >= size.z {
        let mid = lo.x + size.x / 2;
        (
            (lo, IVec3::new(mid, hi.y, hi.z)),
            (IVec3::new(mid + 1, lo.y, lo.z), hi),
        )
    } else {
        let mid = lo.z + size.z / 2;
        (
            (lo, IVec3::new(hi.x, hi.y, mid)),
            (IVec3::new(lo.x, lo.y, mid + 1), hi),
        )
    }
}
