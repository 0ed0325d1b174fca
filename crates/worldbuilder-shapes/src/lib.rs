//! Shape rasterizers and surface search over a voxel grid.
//!
//! Every rasterizer writes straight into a [`worldbuilder_world::Grid`] and
//! returns the number of writes it issued. [`builder::ShapeBuilder`] turns a
//! shape name and loose argument tokens into a single rasterizer call.

pub mod boxfill;
pub mod builder;
pub mod cylinder;
pub mod ellipsoid;
pub mod error;
pub mod params;
pub mod part;
pub mod pyramid;
pub mod search;
pub mod wall;

pub use builder::{BuildReport, ShapeBuilder};
pub use error::ShapeError;
pub use params::{ShapeKind, ShapeParameters};
pub use part::PartSelector;
