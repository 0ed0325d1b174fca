use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{BLOCK_DATA_SHIFT, PACKED_DATA_THRESHOLD};

/// Grid coordinate of a single cell.
pub type Position = IVec3;

/// Block type identifier, optionally carrying a data value in the upper bits.
/// 0 = air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockId(pub u32);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    /// Pack a block ID and data value the way the host's `blockWithData` does.
    pub const fn with_data(id: u32, data: u32) -> Self {
        if data == 0 {
            BlockId(id)
        } else {
            BlockId((id & (PACKED_DATA_THRESHOLD - 1)) | (data << BLOCK_DATA_SHIFT))
        }
    }

    /// Base block ID without the data bits.
    pub fn id(self) -> u32 {
        self.0 & (PACKED_DATA_THRESHOLD - 1)
    }

    /// Data value packed into the upper bits.
    pub fn data(self) -> u32 {
        self.0 >> BLOCK_DATA_SHIFT
    }

    pub fn has_data(self) -> bool {
        self.0 >= PACKED_DATA_THRESHOLD
    }

    pub fn is_air(self) -> bool {
        self == BlockId::AIR
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_data() {
            write!(f, "{}:{}", self.id(), self.data())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One coordinate axis of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Extract this axis' component from a position.
    pub fn component(self, pos: Position) -> i32 {
        match self {
            Axis::X => pos.x,
            Axis::Y => pos.y,
            Axis::Z => pos.z,
        }
    }

    /// Unit step along this axis.
    pub fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }

    /// Offset of `n` cells along this axis.
    pub fn offset(self, n: i32) -> IVec3 {
        self.unit() * n
    }

    /// Copy of `pos` with this axis' component replaced.
    pub fn with_component(self, pos: Position, value: i32) -> Position {
        match self {
            Axis::X => IVec3::new(value, pos.y, pos.z),
            Axis::Y => IVec3::new(pos.x, value, pos.z),
            Axis::Z => IVec3::new(pos.x, pos.y, value),
        }
    }
}
