use crate::types::Position;

/// Squared length of a 2D vector (x, z).
pub fn length_sq2(x: f64, z: f64) -> f64 {
    x * x + z * z
}

/// Squared length of a 3D vector.
pub fn length_sq3(x: f64, y: f64, z: f64) -> f64 {
    x * x + y * y + z * z
}

/// Number of cells in the inclusive box spanned by `start` and `end`.
///
/// With a height override the Y extent is replaced and only the longer of the
/// two horizontal runs is counted, which is the cell count of a flat wall
/// built along that run.
pub fn cuboid_volume(start: Position, end: Position, height: Option<i32>) -> u64 {
    let dx = start.x.abs_diff(end.x) as u64 + 1;
    let dy = start.y.abs_diff(end.y) as u64 + 1;
    let dz = start.z.abs_diff(end.z) as u64 + 1;

    match height {
        None => dx * dy * dz,
        Some(h) => {
            let h = h.max(0) as u64;
            if dx > dz {
                dx * h
            } else {
                dz * h
            }
        }
    }
}
