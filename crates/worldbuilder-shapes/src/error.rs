use thiserror::Error;

use crate::params::ShapeKind;

/// Precondition failures of a build. None of them touch the grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Unknown shape '{0}'")]
    UnknownShape(String),

    #[error("No marks to use: {kind} needs at least {required} marks, found {found}.")]
    NotEnoughMarks {
        kind: ShapeKind,
        required: usize,
        found: usize,
    },

    #[error("Please specify the size of the {0}. For example: '{0} 5'")]
    MissingDimension(ShapeKind),

    #[error("{name} of {value} is not allowed, it must be at least zero")]
    InvalidDimension { name: &'static str, value: i32 },

    #[error("Height {0} is not allowed, it must be at least 1")]
    InvalidHeight(i32),

    #[error("Height {height} exceeds the maximum of {max} at this position")]
    HeightExceedsBound { height: i32, max: i32 },
}
