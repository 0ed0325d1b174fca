use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::BlockId;

/// User-tunable builder settings, loaded from RON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderSettings {
    /// Block used for shapes, walls and fills when none is given.
    pub build_block: BlockId,
    /// Block placed at mark positions while marks are shown.
    pub mark_block: BlockId,
    /// Whether marks are shown in the world.
    pub show_marks: bool,
    /// Clear all marks after every successful build.
    pub auto_clear_marks: bool,
    /// Emit parameter changes as debug messages.
    pub debug: bool,
    /// Lowest buildable Y coordinate.
    pub min_y: i32,
    /// Highest buildable Y coordinate.
    pub max_y: i32,
    /// Largest box a single fill may cover before it is split.
    pub max_fill_volume: u64,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            build_block: DEFAULT_BUILD_BLOCK,
            mark_block: DEFAULT_MARK_BLOCK,
            show_marks: true,
            auto_clear_marks: false,
            debug: true,
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
            max_fill_volume: DEFAULT_MAX_FILL_VOLUME,
        }
    }
}
