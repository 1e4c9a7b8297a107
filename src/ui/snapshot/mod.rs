//! First example: accessor-based collection mirrored by snapshot
//! replacement.

mod state;
mod view;

pub use state::SnapshotExample;
pub use view::render_snapshot_example;
