//! Single source of truth for shared constants.
//! Grid bounds match the host world (Education Edition build limits).

use crate::types::BlockId;

/// Lowest buildable Y coordinate.
pub const DEFAULT_MIN_Y: i32 = 0;

/// Highest buildable Y coordinate.
pub const DEFAULT_MAX_Y: i32 = 255;

/// Maximum number of cells a single bulk fill may cover (32^3).
pub const DEFAULT_MAX_FILL_VOLUME: u64 = 32_768;

/// Number of bits a block's data value is shifted by when packed into an ID.
pub const BLOCK_DATA_SHIFT: u32 = 16;

/// Block IDs at or above this value already carry packed data.
pub const PACKED_DATA_THRESHOLD: u32 = 1 << BLOCK_DATA_SHIFT;

/// Default block used for building shapes (grass).
pub const DEFAULT_BUILD_BLOCK: BlockId = BlockId(2);

/// Default block used to show marks in the world (magenta carpet).
pub const DEFAULT_MARK_BLOCK: BlockId = BlockId::with_data(171, 2);

/// Host game ticks per second.
pub const TICKS_PER_SECOND: u32 = 20;
