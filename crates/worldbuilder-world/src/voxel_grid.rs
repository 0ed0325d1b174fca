use std::collections::HashMap;

use glam::IVec3;
use worldbuilder_core::math::cuboid_volume;
use worldbuilder_core::types::{BlockId, Position};

use crate::grid::{Grid, GridBounds};

/// Sparse in-memory grid. Missing cells read as air.
#[derive(Debug, Clone, Default)]
pub struct VoxelGrid {
    cells: HashMap<Position, BlockId>,
    bounds: GridBounds,
    /// Number of `place` calls accepted.
    place_calls: u64,
    /// Number of `fill` calls accepted.
    fill_calls: u64,
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self::with_bounds(GridBounds::default())
    }

    pub fn with_bounds(bounds: GridBounds) -> Self {
        Self {
            cells: HashMap::new(),
            bounds,
            place_calls: 0,
            fill_calls: 0,
        }
    }

    /// Block stored at `pos` (air if never written).
    pub fn get(&self, pos: Position) -> BlockId {
        self.cells.get(&pos).copied().unwrap_or(BlockId::AIR)
    }

    /// Number of non-air cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterator over all non-air cells.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &BlockId)> {
        self.cells.iter()
    }

    /// Positions currently holding `block`.
    pub fn cells_of(&self, block: BlockId) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|(_, b)| **b == block)
            .map(|(p, _)| *p)
            .collect()
    }

    pub fn place_calls(&self) -> u64 {
        self.place_calls
    }

    pub fn fill_calls(&self) -> u64 {
        self.fill_calls
    }

    fn set(&mut self, block: BlockId, pos: Position) {
        if !self.bounds.contains_y(pos.y) {
            return;
        }
        if block.is_air() {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, block);
        }
    }
}

impl Grid for VoxelGrid {
    fn test_for_block(&self, block: BlockId, pos: Position) -> bool {
        self.get(pos) == block
    }

    fn place(&mut self, block: BlockId, pos: Position) {
        self.place_calls += 1;
        self.set(block, pos);
    }

    fn fill(&mut self, block: BlockId, from: Position, to: Position) {
        let volume = cuboid_volume(from, to, None);
        if volume > self.bounds.max_fill_volume {
            // The host rejects oversized fills outright.
            log::warn!(
                "Fill of {volume} cells exceeds limit {}, ignored",
                self.bounds.max_fill_volume
            );
            return;
        }
        self.fill_calls += 1;

        let min = from.min(to);
        let max = from.max(to);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set(block, IVec3::new(x, y, z));
                }
            }
        }
    }

    fn bounds(&self) -> GridBounds {
        self.bounds
    }
}
