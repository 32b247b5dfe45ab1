use crate::calc::number::{longest_decimal_prefix, parse_float};
use crate::ui::calculator::intent::CalcIntent;
use crate::ui::calculator::state::{CalcState, PendingOp};
use crate::ui::mvi::Reducer;

pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalcState;
    type Intent = CalcIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalcIntent::Push(key) => {
                // Append to the rendered value, not to a raw buffer: leading
                // zeros collapse and a second point never survives.
                let mut text = state.entry_text();
                text.push(key.as_char());
                let dangling_point =
                    longest_decimal_prefix(&text).is_some_and(|prefix| prefix.ends_with('.'));
                CalcState {
                    value: parse_float(&text),
                    dangling_point,
                    ..state
                }
            }
            CalcIntent::Clear => CalcState::default(),
            CalcIntent::SetOperator(op) => CalcState {
                value: 0.0,
                dangling_point: false,
                pending: Some(PendingOp {
                    operand: state.value,
                    op,
                }),
            },
            CalcIntent::Resolve => match state.pending {
                Some(PendingOp { operand, op }) => {
                    CalcState::with_value(op.apply(operand, state.value))
                }
                None => state,
            },
        }
    }
}
