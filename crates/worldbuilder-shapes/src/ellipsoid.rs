use glam::IVec3;
use worldbuilder_core::math::length_sq3;
use worldbuilder_core::types::{BlockId, Position};
use worldbuilder_world::Grid;

use crate::part::{PartSelector, OCTANT_SIGNS};

/// Ellipsoid (or sphere) centred on a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub center: Position,
    /// Radius along X, Y and Z, in cells.
    pub radius: IVec3,
    pub filled: bool,
    pub part: PartSelector,
}

impl Ellipsoid {
    pub fn sphere(center: Position, radius: i32) -> Self {
        Self {
            center,
            radius: IVec3::splat(radius),
            filled: false,
            part: PartSelector::Full,
        }
    }

    /// Write the ellipsoid into `grid`. Returns the number of writes.
    ///
    /// Scans one octant and mirrors each accepted cell into the selected
    /// octants. Radii are widened by half a cell so the boundary test keeps
    /// the cells a voxel shell is expected to contain.
    pub fn build<G: Grid + ?Sized>(&self, grid: &mut G, block: BlockId) -> u64 {
        let radius_x = self.radius.x.max(0) as f64 + 0.5;
        let radius_y = self.radius.y.max(0) as f64 + 0.5;
        let radius_z = self.radius.z.max(0) as f64 + 0.5;

        let inv_radius_x = 1.0 / radius_x;
        let inv_radius_y = 1.0 / radius_y;
        let inv_radius_z = 1.0 / radius_z;

        let ceil_radius_x = radius_x.ceil() as i32;
        let ceil_radius_y = radius_y.ceil() as i32;
        let ceil_radius_z = radius_z.ceil() as i32;

        let mut affected = 0u64;

        // The boundary test only grows with x, y and z. A row that fails at
        // z = 0 ends its plane, and a plane that fails at y = 0 ends the scan.
        let mut next_xn = 0.0;
        for x in 0..=ceil_radius_x {
            let xn = next_xn;
            next_xn = (x + 1) as f64 * inv_radius_x;

            let mut plane_empty = false;
            let mut next_yn = 0.0;
            for y in 0..=ceil_radius_y {
                let yn = next_yn;
                next_yn = (y + 1) as f64 * inv_radius_y;

                let mut row_empty = false;
                let mut next_zn = 0.0;
                for z in 0..=ceil_radius_z {
                    let zn = next_zn;
                    next_zn = (z + 1) as f64 * inv_radius_z;

                    if length_sq3(xn, yn, zn) > 1.0 {
                        row_empty = z == 0;
                        break;
                    }

                    // Interior cell: every outward neighbour is still inside
                    if !self.filled
                        && length_sq3(next_xn, yn, zn) <= 1.0
                        && length_sq3(xn, next_yn, zn) <= 1.0
                        && length_sq3(xn, yn, next_zn) <= 1.0
                    {
                        continue;
                    }

                    for (sx, sy, sz) in OCTANT_SIGNS {
                        if self.part.selects_octant(sx, sy, sz) {
                            grid.place(block, self.center + IVec3::new(sx * x, sy * y, sz * z));
                            affected += 1;
                        }
                    }
                }

                if row_empty {
                    plane_empty = y == 0;
                    break;
                }
            }

            if plane_empty {
                break;
            }
        }

        affected
    }
}
