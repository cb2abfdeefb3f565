//! Country directory screen.
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - load progress, filter, selection
//! - `intent.rs` - load results and user actions
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::DirectoryIntent;
pub use reducer::DirectoryReducer;
pub use state::{Catalog, DirectoryState, FilterState, LoadState, Page};
