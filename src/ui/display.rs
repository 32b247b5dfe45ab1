//! Readout panel: previous operand, operator and current value.

use crate::calc::to_js_string;
use crate::ui::calculator::CalcState;
use crate::ui::theme::{GLOBAL_BORDER, OPERATOR_TEXT, READOUT_DIM, READOUT_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Text of each readout. `prev` and `op` are only shown while an
/// operation is pending; `value` is always shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    pub prev: Option<String>,
    pub op: Option<String>,
    pub value: String,
}

impl Readouts {
    pub fn from_state(state: &CalcState) -> Self {
        Self {
            prev: state.prev().map(to_js_string),
            op: state.op().map(|op| op.to_string()),
            value: state.entry_text(),
        }
    }
}

pub struct ReadoutPanel;

impl ReadoutPanel {
    pub fn widget(state: &CalcState) -> Paragraph<'static> {
        let readouts = Readouts::from_state(state);

        let mut pending = Vec::new();
        if let Some(prev) = readouts.prev {
            pending.push(Span::styled(prev, Style::default().fg(READOUT_DIM)));
        }
        if let Some(op) = readouts.op {
            pending.push(Span::raw(" "));
            pending.push(Span::styled(op, Style::default().fg(OPERATOR_TEXT)));
        }

        let value = Span::styled(
            readouts.value,
            Style::default()
                .fg(READOUT_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        Paragraph::new(vec![Line::from(pending), Line::from(value)])
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Operator;

    #[test]
    fn idle_shows_only_value() {
        let readouts = Readouts::from_state(&CalcState::with_value(12.0));
        assert_eq!(
            readouts,
            Readouts {
                prev: None,
                op: None,
                value: "12".to_string(),
            }
        );
    }

    #[test]
    fn pending_shows_all_three() {
        let readouts = Readouts::from_state(&CalcState::with_pending(5.5, Operator::Add, 3.0));
        assert_eq!(readouts.prev.as_deref(), Some("5.5"));
        assert_eq!(readouts.op.as_deref(), Some("+"));
        assert_eq!(readouts.value, "3");
    }

    #[test]
    fn degenerate_values_render_as_words() {
        let readouts = Readouts::from_state(&CalcState::with_value(f64::INFINITY));
        assert_eq!(readouts.value, "Infinity");
        let readouts = Readouts::from_state(&CalcState::with_value(f64::NAN));
        assert_eq!(readouts.value, "NaN");
    }
}
