use glam::IVec3;
use worldbuilder_core::math::cuboid_volume;
use worldbuilder_core::types::{Axis, BlockId, Position};
use worldbuilder_world::{fill_chunked, Grid, Marks};

use crate::error::ShapeError;
use crate::params::{ShapeKind, WallAction};
use crate::search::exponential_search;

/// Straight wall segments between consecutive marks.
///
/// Every segment stands on the Y level of the first mark. The existing wall
/// is measured at the first mark and taken to be the same height everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub height: i32,
    pub action: WallAction,
}

/// Inclusive range of wall layers, as offsets above the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layers {
    low: i32,
    high: i32,
    clear: bool,
}

impl Layers {
    fn count(self) -> i32 {
        (self.high - self.low + 1).max(0)
    }
}

impl Wall {
    pub fn new(height: i32) -> Self {
        Self {
            height,
            action: WallAction::Build,
        }
    }

    pub fn with_action(mut self, action: WallAction) -> Self {
        self.action = action;
        self
    }

    /// Apply the wall action along `marks`. Returns the number of cells
    /// changed, counting shared corner columns once.
    pub fn build<G: Grid + ?Sized>(
        &self,
        grid: &mut G,
        marks: &Marks,
        block: BlockId,
    ) -> Result<u64, ShapeError> {
        let not_enough = || ShapeError::NotEnoughMarks {
            kind: ShapeKind::Wall,
            required: 2,
            found: marks.len(),
        };
        if marks.len() < 2 {
            return Err(not_enough());
        }
        let start = marks.first().ok_or_else(not_enough)?;

        if self.height < 1 {
            return Err(ShapeError::InvalidHeight(self.height));
        }
        let max_wall_height = grid.bounds().max_y - start.y;
        if self.height > max_wall_height {
            return Err(ShapeError::HeightExceedsBound {
                height: self.height,
                max: max_wall_height,
            });
        }

        let current = current_height(grid, start, max_wall_height, block);
        let layers = self.layers(current, max_wall_height)?;
        let count = layers.count();
        if count == 0 {
            log::debug!("Wall {} with height {} changes nothing", self.action, self.height);
            return Ok(0);
        }

        let fill_block = if layers.clear { BlockId::AIR } else { block };
        let mut affected = 0u64;
        for (from, to) in marks.segments() {
            let bottom = IVec3::new(from.x, start.y + layers.low, from.z);
            let top = IVec3::new(to.x, start.y + layers.high, to.z);
            fill_chunked(grid, fill_block, bottom, top);
            affected += cuboid_volume(from, to, Some(count));
        }

        let seams = (marks.len() as u64 - 2) * count as u64;
        Ok(affected.saturating_sub(seams))
    }

    fn layers(&self, current: i32, max_wall_height: i32) -> Result<Layers, ShapeError> {
        let h = self.height;
        let layers = match self.action {
            WallAction::Delete => Layers {
                low: (current - h).max(0),
                high: current - 1,
                clear: true,
            },
            WallAction::Add => {
                if current + h > max_wall_height {
                    return Err(ShapeError::HeightExceedsBound {
                        height: current + h,
                        max: max_wall_height,
                    });
                }
                Layers {
                    low: current,
                    high: current + h - 1,
                    clear: false,
                }
            }
            WallAction::Destroy => Layers {
                low: 0,
                high: current - 1,
                clear: true,
            },
            WallAction::Build if current > h => Layers {
                low: h,
                high: current - 1,
                clear: true,
            },
            WallAction::Build => Layers {
                low: 0,
                high: h - 1,
                clear: false,
            },
        };
        Ok(layers)
    }
}

/// Number of `block` cells stacked upward from `start`, inclusive.
fn current_height<G: Grid + ?Sized>(
    grid: &G,
    start: Position,
    max_wall_height: i32,
    block: BlockId,
) -> i32 {
    if !grid.test_for_block(block, start) {
        return 0;
    }
    exponential_search(grid, start, Axis::Y, max_wall_height + 1, block).unwrap_or_else(|| {
        log::warn!("Could not measure the wall at {start}, treating it as empty");
        0
    })
}
