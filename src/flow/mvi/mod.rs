//! Model-View-Intent primitives shared by every flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a screen needs to render
//! - **Intent**: user actions and completion events
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
