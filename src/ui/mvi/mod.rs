//! Model-View-Intent (MVI) architecture primitives.
//!
//! Unidirectional data flow for the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Intents are user actions or fetch results; the reducer is a pure
//! function producing the next state; views render from state only.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
