use glam::IVec3;
use worldbuilder_core::types::{BlockId, Position};
use worldbuilder_world::Grid;

use crate::part::{PartSelector, QUADRANT_SIGNS};

/// Square pyramid standing on `center`.
///
/// A positive `size` tapers upward from a base ring of half-width
/// `size - 1`. A negative `size` is inverted: a single apex cell at
/// `center`, widening by one cell per layer until there are `|size|` layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pyramid {
    pub center: Position,
    pub size: i32,
    pub filled: bool,
    pub part: PartSelector,
}

impl Pyramid {
    /// Layers above `max_y` are not written.
    pub fn build<G: Grid + ?Sized>(&self, grid: &mut G, block: BlockId) -> u64 {
        let headroom = i64::from(grid.bounds().max_y) - i64::from(self.center.y);
        let layers = i64::from(self.size.unsigned_abs());
        let Ok(top) = i32::try_from((layers - 1).min(headroom)) else {
            return 0;
        };
        if top < 0 {
            log::debug!("Pyramid at {} is above the build limit", self.center);
            return 0;
        }

        let mut affected = 0;
        if self.size > 0 {
            for y in 0..=top {
                affected += self.layer(grid, block, y, self.size - 1 - y);
            }
        } else {
            if QUADRANT_SIGNS
                .iter()
                .any(|&(sx, sz)| self.part.selects_column(sx, sz))
            {
                grid.place(block, self.center);
                affected += 1;
            }
            for y in 1..=top {
                affected += self.layer(grid, block, y, y);
            }
        }
        affected
    }

    /// Write one layer: the square ring of half-width `ring`, plus its
    /// interior when filled.
    fn layer<G: Grid + ?Sized>(
        &self,
        grid: &mut G,
        block: BlockId,
        y: i32,
        ring: i32,
    ) -> u64 {
        let mut affected = 0;
        for x in 0..=ring {
            for z in 0..=ring {
                if !(self.filled || x == ring || z == ring) {
                    continue;
                }
                for (sx, sz) in QUADRANT_SIGNS {
                    if self.part.selects_column(sx, sz) {
                        grid.place(block, self.center + IVec3::new(sx * x, y, sz * z));
                        affected += 1;
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
    use std::collections::{BTreeMap, HashSet};
    use worldbuilder_world::VoxelGrid;

    const SANDSTONE: BlockId = BlockId(24);

    fn pyramid(size: i32, filled: bool) -> Pyramid {
        Pyramid {
            center: IVec3::new(0, 20, 0),
            size,
            filled,
            part: PartSelector::Full,
        }
    }

    fn build(shape: Pyramid) -> (u64, HashSet<IVec3>) {
        let mut grid = VoxelGrid::new();
        let affected = shape.build(&mut grid, SANDSTONE);
        let cells = grid
            .cells_of(SANDSTONE)
            .into_iter()
            .map(|p| p - shape.center)
            .collect();
        (affected, cells)
    }

    fn layer_sizes(cells: &HashSet<IVec3>) -> BTreeMap<i32, usize> {
        let mut layers = BTreeMap::new();
        for c in cells {
            *layers.entry(c.y).or_insert(0) += 1;
        }
        layers
    }

    #[test]
    fn test_upright_regression() {
        let (affected, cells) = build(pyramid(3, false));
        assert_eq!((affected, cells.len()), (36, 25));
        let (affected, cells) = build(pyramid(3, true));
        assert_eq!((affected, cells.len()), (56, 35));
    }

    #[test]
    fn test_upright_tapers() {
        let (_, cells) = build(pyramid(4, true));
        let layers = layer_sizes(&cells);
        assert_eq!(layers.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(layers.values().copied().collect::<Vec<_>>(), vec![49, 25, 9, 1]);
    }

    #[test]
    fn test_inverted_grows_from_apex() {
        let (affected, cells) = build(pyramid(-4, false));
        assert_eq!((affected, cells.len()), (61, 49));

        let layers = layer_sizes(&cells);
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[&0], 1);
        assert!(cells.contains(&IVec3::ZERO));
        let sizes: Vec<usize> = layers.values().copied().collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));

        let (affected, cells) = build(pyramid(-4, true));
        assert_eq!((affected, cells.len()), (117, 84));
    }

    #[test]
    fn test_quadrant_symmetry() {
        let (_, cells) = build(pyramid(5, false));
        for c in &cells {
            assert!(cells.contains(&IVec3::new(-c.x, c.y, c.z)));
            assert!(cells.contains(&IVec3::new(c.x, c.y, -c.z)));
        }
    }

    #[test]
    fn test_hollow_is_subset_of_filled() {
        let (_, hollow) = build(pyramid(-6, false));
        let (_, filled) = build(pyramid(-6, true));
        assert!(hollow.is_subset(&filled));
        for c in filled.difference(&hollow) {
            let ring = c.y;
            assert!(c.x.abs() < ring && c.z.abs() < ring);
        }
    }

    #[test]
    fn test_part_outside_vocabulary_writes_nothing() {
        let shape = Pyramid {
            part: PartSelector::parse("TNE"),
            ..pyramid(-4, false)
        };
        assert_eq!(build(shape), (0, HashSet::new()));
    }

    #[test]
    fn test_extreme_sizes_stop_at_build_limit() {
        for size in [i32::MIN, i32::MAX] {
            let shape = Pyramid {
                center: IVec3::new(0, 250, 0),
                ..pyramid(size, false)
            };
            let mut grid = VoxelGrid::new();
            let affected = shape.build(&mut grid, SANDSTONE);
            assert!(affected > 0);
            let cells = grid.cells_of(SANDSTONE);
            assert!(cells.iter().all(|c| (250..=255).contains(&c.y)));
            assert!(cells.iter().any(|c| c.y == 255));
        }
    }

    #[test]
    fn test_column_part() {
        let shape = Pyramid {
            part: PartSelector::parse("SW"),
            ..pyramid(3, false)
        };
        let (affected, cells) = build(shape);
        assert_eq!(affected, 36 / 4);
        assert!(cells.iter().all(|c| c.x <= 0 && c.z >= 0));
    }
}
