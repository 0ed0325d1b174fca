pub mod fill;
pub mod grid;
pub mod marks;
pub mod sink;
pub mod voxel_grid;

pub use fill::fill_chunked;
pub use grid::{Grid, GridBounds};
pub use marks::{MarkError, Marks};
pub use sink::{LogSink, MessageSink, RecordingSink};
pub use voxel_grid::VoxelGrid;
