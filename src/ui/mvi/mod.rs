//! Model-View-Intent primitives for the screen state.
//!
//! ```text
//! key press / load result ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                                  │
//!          └──────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs to draw a frame
//! - **Intent**: a user action or the completion of the load
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
