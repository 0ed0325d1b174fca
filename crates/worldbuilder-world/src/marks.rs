use thiserror::Error;
use worldbuilder_core::types::{BlockId, Position};

use crate::grid::Grid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkError {
    #[error("Position {0} already marked")]
    AlreadyMarked(Position),
    #[error("No mark at {0}")]
    NotMarked(Position),
    #[error("Mark index {index} out of range ({len} marks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered list of anchor positions used as corners and endpoints.
#[derive(Debug, Clone)]
pub struct Marks {
    marks: Vec<Position>,
    visible: bool,
}

impl Default for Marks {
    fn default() -> Self {
        Self::new()
    }
}

impl Marks {
    pub fn new() -> Self {
        Self {
            marks: Vec::new(),
            visible: true,
        }
    }

    /// Build a mark list from positions, skipping duplicates.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut marks = Self::new();
        for pos in positions {
            let _ = marks.place(pos);
        }
        marks
    }

    /// Append a mark. Returns its index.
    pub fn place(&mut self, pos: Position) -> Result<usize, MarkError> {
        if self.position_of(pos).is_some() {
            return Err(MarkError::AlreadyMarked(pos));
        }
        self.marks.push(pos);
        log::debug!("Mark[{}] set at {pos}", self.marks.len() - 1);
        Ok(self.marks.len() - 1)
    }

    /// Index of the mark at `pos`, if any.
    pub fn position_of(&self, pos: Position) -> Option<usize> {
        self.marks.iter().position(|m| *m == pos)
    }

    /// Remove the mark at `pos`. Returns the index it had.
    pub fn remove(&mut self, pos: Position) -> Result<usize, MarkError> {
        let index = self.position_of(pos).ok_or(MarkError::NotMarked(pos))?;
        self.marks.remove(index);
        Ok(index)
    }

    /// Remove the mark at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Position, MarkError> {
        if index >= self.marks.len() {
            return Err(MarkError::IndexOutOfRange {
                index,
                len: self.marks.len(),
            });
        }
        Ok(self.marks.remove(index))
    }

    /// Remove every mark. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.marks.len();
        self.marks.clear();
        count
    }

    pub fn first(&self) -> Option<Position> {
        self.marks.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.marks.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.marks.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.marks.iter()
    }

    /// Consecutive (start, end) pairs, one per wall segment.
    pub fn segments(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.marks.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip mark visibility and update the world to match.
    /// Returns the new visibility.
    pub fn toggle_visibility<G: Grid + ?Sized>(&mut self, grid: &mut G, block: BlockId) -> bool {
        self.visible = !self.visible;
        if self.visible {
            self.show_in(grid, block);
        } else {
            self.hide_in(grid);
        }
        self.visible
    }

    /// Place `block` at every mark.
    pub fn show_in<G: Grid + ?Sized>(&self, grid: &mut G, block: BlockId) {
        for pos in &self.marks {
            grid.place(block, *pos);
        }
    }

    /// Clear every mark position back to air.
    pub fn hide_in<G: Grid + ?Sized>(&self, grid: &mut G) {
        for pos in &self.marks {
            grid.place(BlockId::AIR, *pos);
        }
    }

    /// One line per mark: `Mark[i] has pos(x, y, z)`.
    pub fn describe(&self) -> Vec<String> {
        self.marks
            .iter()
            .enumerate()
            .map(|(i, p)| format!("Mark[{i}] has pos({} {} {})", p.x, p.y, p.z))
            .collect()
    }
}
