//! Model-View-Intent (MVI) primitives for the calculator UI.
//!
//! ```text
//! key / click ──→ Intent ──→ Reducer ──→ State ──→ render
//!      ↑                                             │
//!      └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs to draw one frame
//! - **Intent**: a single user command (digit, operator, clear, equals)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
