use worldbuilder_core::constants::{DEFAULT_MAX_FILL_VOLUME, DEFAULT_MAX_Y, DEFAULT_MIN_Y};
use worldbuilder_core::settings::BuilderSettings;
use worldbuilder_core::types::{BlockId, Position};

/// Vertical build limits and the bulk-fill cap of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_y: i32,
    pub max_y: i32,
    /// Largest number of cells a single `Grid::fill` call may cover.
    pub max_fill_volume: u64,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
            max_fill_volume: DEFAULT_MAX_FILL_VOLUME,
        }
    }
}

impl From<&BuilderSettings> for GridBounds {
    fn from(settings: &BuilderSettings) -> Self {
        Self {
            min_y: settings.min_y,
            max_y: settings.max_y,
            max_fill_volume: settings.max_fill_volume,
        }
    }
}

impl GridBounds {
    /// Whether `y` lies within the buildable range.
    pub fn contains_y(&self, y: i32) -> bool {
        y >= self.min_y && y <= self.max_y
    }
}

/// Point and box access to a voxel store.
///
/// Writes are immediately visible to subsequent reads.
pub trait Grid {
    /// Whether the cell at `pos` holds `block`.
    fn test_for_block(&self, block: BlockId, pos: Position) -> bool;

    /// Write a single cell.
    fn place(&mut self, block: BlockId, pos: Position);

    /// Replace every cell of the inclusive box spanned by `from` and `to`.
    /// Corners may be given in any order.
    fn fill(&mut self, block: BlockId, from: Position, to: Position);

    fn bounds(&self) -> GridBounds;
}
