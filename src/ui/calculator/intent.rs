//! Intents for the calculator reducer.

use crate::calc::{EntryKey, Operator};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcIntent {
    /// Append a digit or the decimal point to the current value.
    Push(EntryKey),
    /// Back to `0` with nothing pending.
    Clear,
    /// Capture the current value as left operand of `op`.
    SetOperator(Operator),
    /// Apply the pending operation. No-op while idle.
    Resolve,
}

impl Intent for CalcIntent {}
