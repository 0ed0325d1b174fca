use std::fmt;
use std::str::FromStr;

use worldbuilder_core::types::{BlockId, Position};

use crate::error::ShapeError;
use crate::part::PartSelector;

/// Shape names understood by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Ellipsoid,
    Cylinder,
    Pyramid,
    Wall,
    Fill,
    Air,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Sphere,
        ShapeKind::Ellipsoid,
        ShapeKind::Cylinder,
        ShapeKind::Pyramid,
        ShapeKind::Wall,
        ShapeKind::Fill,
        ShapeKind::Air,
    ];

    /// Marks needed before a build of this kind can start.
    pub fn required_marks(self) -> usize {
        match self {
            ShapeKind::Wall | ShapeKind::Fill | ShapeKind::Air => 2,
            _ => 0,
        }
    }

    /// Whether the kind spans mark corners instead of growing from a center.
    pub fn uses_marks(self) -> bool {
        self.required_marks() > 0
    }

    /// Past-tense verb used in build reports.
    pub fn verb(self) -> &'static str {
        match self {
            ShapeKind::Wall | ShapeKind::Air => "changed",
            _ => "added",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(ShapeKind::Sphere),
            "ellips" | "ellipsoid" => Ok(ShapeKind::Ellipsoid),
            "cylinder" | "cyl" => Ok(ShapeKind::Cylinder),
            "pyramid" => Ok(ShapeKind::Pyramid),
            "wall" => Ok(ShapeKind::Wall),
            "fill" => Ok(ShapeKind::Fill),
            "air" => Ok(ShapeKind::Air),
            _ => Err(ShapeError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Ellipsoid => "ellipsoid",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Wall => "wall",
            ShapeKind::Fill => "fill",
            ShapeKind::Air => "air",
        };
        f.write_str(name)
    }
}

/// What a wall build does with the structure already standing on its marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallAction {
    /// Grow or trim the existing wall to exactly the requested height.
    #[default]
    Build,
    /// Stack the requested height on top of the existing wall.
    Add,
    /// Remove the requested height from the top of the existing wall.
    Delete,
    /// Remove the whole existing wall.
    Destroy,
}

impl WallAction {
    /// Parse an action token. Unknown tokens fall back to `Build`.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "add" => WallAction::Add,
            "del" | "delete" => WallAction::Delete,
            "destroy" => WallAction::Destroy,
            "" | "build" => WallAction::Build,
            other => {
                log::debug!("Unknown wall action '{other}', building instead");
                WallAction::Build
            }
        }
    }
}

impl fmt::Display for WallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WallAction::Build => "build",
            WallAction::Add => "add",
            WallAction::Delete => "del",
            WallAction::Destroy => "destroy",
        };
        f.write_str(name)
    }
}

/// Everything one build needs, collected from the argument tokens.
///
/// Lives for a single build: the builder creates a fresh value per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParameters {
    pub center: Position,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub length: Option<i32>,
    pub part: PartSelector,
    pub filled: bool,
    /// Block override. `None` uses the configured build block.
    pub block: Option<BlockId>,
    pub action: WallAction,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeParameters {
    pub fn new() -> Self {
        Self {
            center: Position::ZERO,
            width: None,
            height: None,
            length: None,
            part: PartSelector::Full,
            filled: false,
            block: None,
            action: WallAction::Build,
        }
    }

    pub fn set_center(&mut self, center: Position) {
        log::debug!("Center set to {center}");
        self.center = center;
    }

    pub fn set_width(&mut self, width: i32) {
        log::debug!("Width set to {width}");
        self.width = Some(width);
    }

    pub fn set_height(&mut self, height: i32) {
        log::debug!("Height set to {height}");
        self.height = Some(height);
    }

    pub fn set_length(&mut self, length: i32) {
        log::debug!("Length set to {length}");
        self.length = Some(length);
    }

    pub fn set_part(&mut self, part: PartSelector) {
        log::debug!("Part set to {part}");
        self.part = part;
    }

    pub fn set_filled(&mut self, filled: bool) {
        log::debug!("Filled set to {filled}");
        self.filled = filled;
    }

    pub fn set_block(&mut self, block: BlockId) {
        log::debug!("Block set to {block}");
        self.block = Some(block);
    }

    pub fn set_action(&mut self, action: WallAction) {
        log::debug!("Action set to {action}");
        self.action = action;
    }

    /// Width, or 0 when unset.
    pub fn width_or_zero(&self) -> i32 {
        self.width.unwrap_or(0)
    }

    /// Height, falling back to the width when unset or zero.
    pub fn derived_height(&self) -> i32 {
        match self.height {
            Some(h) if h != 0 => h,
            _ => self.width_or_zero(),
        }
    }

    /// Length, falling back to the width when unset or zero.
    pub fn derived_length(&self) -> i32 {
        match self.length {
            Some(l) if l != 0 => l,
            _ => self.width_or_zero(),
        }
    }

    /// The block to build with, given the configured default.
    pub fn block_or(&self, default: BlockId) -> BlockId {
        self.block.unwrap_or(default)
    }
}

impl fmt::Display for ShapeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<i32>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        write!(
            f,
            "center ({} {} {}), width {}, height {}, length {}, part {}, {}, action {}",
            self.center.x,
            self.center.y,
            self.center.z,
            show(self.width),
            show(self.height),
            show(self.length),
            self.part,
            if self.filled { "filled" } else { "hollow" },
            self.action,
        )?;
        if let Some(block) = self.block {
            write!(f, ", block {block}")?;
        }
        Ok(())
    }
}
