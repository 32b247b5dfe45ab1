//! Calculator feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - running value and optional pending operation (Idle / Pending)
//! - `intent.rs` - user commands (Push, Clear, SetOperator, Resolve)
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CalcIntent;
pub use reducer::CalculatorReducer;
pub use state::{CalcState, PendingOp};
