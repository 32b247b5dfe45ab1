//! Calculator state record.

use crate::calc::{same_value, to_js_string, Operator};
use crate::ui::mvi::UiState;

/// Operand and operator captured when an operator key was pressed.
#[derive(Debug, Clone, Copy)]
pub struct PendingOp {
    pub operand: f64,
    pub op: Operator,
}

impl PartialEq for PendingOp {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && same_value(self.operand, other.operand)
    }
}

/// Running value plus an optional pending operation.
///
/// Idle when `pending` is `None`, Pending otherwise. Operand and operator
/// live in one `Option` so one can never be present without the other.
#[derive(Debug, Clone, Copy)]
pub struct CalcState {
    pub(super) value: f64,
    /// Last push ended in an accepted `.` that no digit has followed yet.
    pub(super) dangling_point: bool,
    pub(super) pending: Option<PendingOp>,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            value: 0.0,
            dangling_point: false,
            pending: None,
        }
    }
}

/// `NaN` states compare equal to themselves so an identity transition is
/// observable even after a `0/0`.
impl PartialEq for CalcState {
    fn eq(&self, other: &Self) -> bool {
        same_value(self.value, other.value)
            && self.dangling_point == other.dangling_point
            && self.pending == other.pending
    }
}

impl UiState for CalcState {}

impl CalcState {
    /// Idle state holding `value`.
    pub fn with_value(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Pending state: `prev <op>` captured, `value` being entered.
    pub fn with_pending(prev: f64, op: Operator, value: f64) -> Self {
        Self {
            value,
            dangling_point: false,
            pending: Some(PendingOp { operand: prev, op }),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn prev(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn op(&self) -> Option<Operator> {
        self.pending.map(|p| p.op)
    }

    pub fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Text the next digit gets appended to: the rendered value, plus a
    /// dangling `.` while one is waiting for its first fraction digit.
    pub fn entry_text(&self) -> String {
        let mut text = to_js_string(self.value);
        if self.dangling_point {
            text.push('.');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_zero() {
        let state = CalcState::default();
        assert_eq!(state.value(), 0.0);
        assert_eq!(state.prev(), None);
        assert_eq!(state.op(), None);
        assert!(!state.is_pending());
        assert_eq!(state.entry_text(), "0");
    }

    #[test]
    fn prev_and_op_come_together() {
        let state = CalcState::with_pending(6.0, Operator::Divide, 0.0);
        assert_eq!(state.prev(), Some(6.0));
        assert_eq!(state.op(), Some(Operator::Divide));
        assert!(state.is_pending());
    }

    #[test]
    fn nan_state_equals_itself() {
        let state = CalcState::with_value(f64::NAN);
        assert_eq!(state, state);
        assert_ne!(state, CalcState::default());
    }

    #[test]
    fn entry_text_shows_dangling_point() {
        let state = CalcState {
            value: 5.0,
            dangling_point: true,
            pending: None,
        };
        assert_eq!(state.entry_text(), "5.");
    }
}
