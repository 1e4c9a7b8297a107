//! Second example: the same collection mirrored through a dispatch/reducer
//! pipeline.

mod example;
mod intent;
mod reduce;
mod state;
mod view;

pub use example::ReducerExample;
pub use intent::EntriesIntent;
pub use reduce::EntriesReducer;
pub use state::EntriesState;
pub use view::render_reducer_example;
