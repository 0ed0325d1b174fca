use glam::IVec3;
use worldbuilder_core::math::length_sq2;
use worldbuilder_core::types::{BlockId, Position};
use worldbuilder_world::{fill_chunked, Grid};

use crate::part::{PartSelector, QUADRANT_SIGNS};

/// Vertical cylinder with an elliptic cross-section.
///
/// `center` is the bottom cell of the axis. A negative `height` builds
/// downward from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Position,
    pub radius_x: i32,
    pub height: i32,
    pub radius_z: i32,
    pub filled: bool,
    pub part: PartSelector,
}

impl Cylinder {
    /// Write the cylinder into `grid`. Returns columns written times height.
    pub fn build<G: Grid + ?Sized>(&self, grid: &mut G, block: BlockId) -> u64 {
        if self.height == 0 {
            return 0;
        }

        // Clamp in i64, heights may span the whole i32 range
        let bounds = grid.bounds();
        let mut base_y = i64::from(self.center.y);
        let mut height = i64::from(self.height);
        if height < 0 {
            base_y += height;
            height = -height;
        }
        base_y = base_y.max(i64::from(bounds.min_y));
        height = height.min(i64::from(bounds.max_y) - base_y + 1);
        let (Ok(base_y), Ok(height)) = (i32::try_from(base_y), i32::try_from(height)) else {
            return 0;
        };
        let base = IVec3::new(self.center.x, base_y, self.center.z);
        if height <= 0 {
            log::debug!("Cylinder at {base} lies above the build limit");
            return 0;
        }

        let radius_x = self.radius_x.max(0) as f64 + 0.5;
        let radius_z = self.radius_z.max(0) as f64 + 0.5;
        let inv_radius_x = 1.0 / radius_x;
        let inv_radius_z = 1.0 / radius_z;
        let ceil_radius_x = radius_x.ceil() as i32;
        let ceil_radius_z = radius_z.ceil() as i32;

        let top = IVec3::new(0, height - 1, 0);
        let mut affected = 0u64;

        let mut next_xn = 0.0;
        'columns: for x in 0..=ceil_radius_x {
            let xn = next_xn;
            next_xn = (x + 1) as f64 * inv_radius_x;

            let mut next_zn = 0.0;
            for z in 0..=ceil_radius_z {
                let zn = next_zn;
                next_zn = (z + 1) as f64 * inv_radius_z;

                if length_sq2(xn, zn) > 1.0 {
                    if z == 0 {
                        break 'columns;
                    }
                    break;
                }

                if !self.filled
                    && length_sq2(next_xn, zn) <= 1.0
                    && length_sq2(xn, next_zn) <= 1.0
                {
                    continue;
                }

                for (sx, sz) in QUADRANT_SIGNS {
                    if self.part.selects_column(sx, sz) {
                        let bottom = base + IVec3::new(sx * x, 0, sz * z);
                        fill_chunked(grid, block, bottom, bottom + top);
                        affected += height as u64;
                    }
                }
            }
        }

        affected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use worldbuilder_world::{GridBounds, VoxelGrid};

    const STONE: BlockId = BlockId(1);

    fn cylinder(radius: i32, height: i32) -> Cylinder {
        Cylinder {
            center: IVec3::new(0, 10, 0),
            radius_x: radius,
            height,
            radius_z: radius,
            filled: false,
            part: PartSelector::Full,
        }
    }

    fn build(shape: Cylinder, grid: &mut VoxelGrid) -> (u64, HashSet<IVec3>) {
        let affected = shape.build(grid, STONE);
        (affected, grid.cells_of(STONE).into_iter().collect())
    }

    #[test]
    fn test_hollow_cylinder_regression() {
        let (affected, cells) = build(cylinder(2, 3), &mut VoxelGrid::new());
        assert_eq!(affected, 48);
        assert_eq!(cells.len(), 36);

        let (affected, cells) = build(cylinder(2, 5), &mut VoxelGrid::new());
        assert_eq!(affected, 80);
        assert_eq!(cells.len(), 60);
    }

    #[test]
    fn test_filled_cylinder_regression() {
        let shape = Cylinder {
            filled: true,
            ..cylinder(2, 3)
        };
        let (affected, cells) = build(shape, &mut VoxelGrid::new());
        assert_eq!(affected, 96);
        assert_eq!(cells.len(), 63);
    }

    #[test]
    fn test_zero_height_is_noop() {
        let mut grid = VoxelGrid::new();
        let (affected, cells) = build(cylinder(3, 0), &mut grid);
        assert_eq!(affected, 0);
        assert!(cells.is_empty());
        assert_eq!(grid.fill_calls(), 0);
    }

    #[test]
    fn test_negative_height_builds_downward() {
        let (_, cells) = build(cylinder(2, -5), &mut VoxelGrid::new());
        let ys: HashSet<i32> = cells.iter().map(|c| c.y).collect();
        assert_eq!(ys, (5..=9).collect());
    }

    #[test]
    fn test_quadrant_symmetry() {
        let (_, cells) = build(cylinder(4, 2), &mut VoxelGrid::new());
        for c in &cells {
            assert!(cells.contains(&IVec3::new(-c.x, c.y, c.z)));
            assert!(cells.contains(&IVec3::new(c.x, c.y, -c.z)));
            assert!(cells.contains(&IVec3::new(-c.x, c.y, -c.z)));
        }
    }

    #[test]
    fn test_hollow_is_subset_of_filled() {
        let (_, hollow) = build(cylinder(5, 2), &mut VoxelGrid::new());
        let filled_shape = Cylinder {
            filled: true,
            ..cylinder(5, 2)
        };
        let (_, filled) = build(filled_shape, &mut VoxelGrid::new());
        assert!(hollow.is_subset(&filled));
        assert!(filled.len() > hollow.len());
    }

    #[test]
    fn test_clamped_to_build_limits() {
        let bounds = GridBounds {
            min_y: 0,
            max_y: 12,
            max_fill_volume: 32_768,
        };
        let mut grid = VoxelGrid::with_bounds(bounds);
        let (affected, cells) = build(cylinder(1, 10), &mut grid);
        assert!(cells.iter().all(|c| (10..=12).contains(&c.y)));
        assert_eq!(affected % 3, 0);

        // Snapped up to the floor, then kept at its height
        let mut grid = VoxelGrid::with_bounds(bounds);
        let (_, cells) = build(cylinder(1, -20), &mut grid);
        let ys: HashSet<i32> = cells.iter().map(|c| c.y).collect();
        assert_eq!(ys, (0..=12).collect());
    }

    #[test]
    fn test_extreme_heights_clamp_without_overflow() {
        let (affected, cells) = build(cylinder(1, i32::MAX), &mut VoxelGrid::new());
        let ys: HashSet<i32> = cells.iter().map(|c| c.y).collect();
        assert_eq!(ys, (10..=255).collect());
        assert_eq!(affected % 246, 0);

        let (affected, cells) = build(cylinder(1, i32::MIN), &mut VoxelGrid::new());
        let ys: HashSet<i32> = cells.iter().map(|c| c.y).collect();
        assert_eq!(ys, (0..=255).collect());
        assert_eq!(affected % 256, 0);
    }

    #[test]
    fn test_column_parts() {
        let full = build(cylinder(3, 1), &mut VoxelGrid::new()).0;

        let south = Cylinder {
            part: PartSelector::parse("S"),
            ..cylinder(3, 1)
        };
        let (affected, cells) = build(south, &mut VoxelGrid::new());
        assert_eq!(affected, full / 2);
        assert!(cells.iter().all(|c| c.z >= 0));

        let north_east = Cylinder {
            part: PartSelector::parse("NE"),
            ..cylinder(3, 1)
        };
        let (affected, cells) = build(north_east, &mut VoxelGrid::new());
        assert_eq!(affected, full / 4);
        assert!(cells.iter().all(|c| c.x >= 0 && c.z <= 0));

        // Vertical halves do not apply to columns
        let top = Cylinder {
            part: PartSelector::parse("T"),
            ..cylinder(3, 1)
        };
        assert_eq!(build(top, &mut VoxelGrid::new()).0, 0);
    }
}
