//! On-screen button grid.
//!
//! Two panes: a 3-wide digit block (`1`-`9` ascending, then `0 . C`) and a
//! single operator column (`+ - * / %` followed by `=`).

use crate::calc::{EntryKey, Operator};
use crate::ui::calculator::CalcIntent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Entry(EntryKey),
    Clear,
    Operator(Operator),
    Equals,
}

impl Button {
    pub fn label(self) -> String {
        match self {
            Button::Entry(key) => key.to_string(),
            Button::Clear => "C".to_string(),
            Button::Operator(op) => op.to_string(),
            Button::Equals => "=".to_string(),
        }
    }

    pub fn intent(self) -> CalcIntent {
        match self {
            Button::Entry(key) => CalcIntent::Push(key),
            Button::Clear => CalcIntent::Clear,
            Button::Operator(op) => CalcIntent::SetOperator(op),
            Button::Equals => CalcIntent::Resolve,
        }
    }

    /// The button producing `intent`; every intent has exactly one.
    pub fn for_intent(intent: CalcIntent) -> Self {
        match intent {
            CalcIntent::Push(key) => Button::Entry(key),
            CalcIntent::Clear => Button::Clear,
            CalcIntent::SetOperator(op) => Button::Operator(op),
            CalcIntent::Resolve => Button::Equals,
        }
    }
}

const DIGIT_COLUMNS: usize = 3;

/// Digit block in reading order.
pub fn digit_block() -> Vec<Button> {
    let mut buttons: Vec<Button> = (1..=9)
        .chain(std::iter::once(0))
        .filter_map(EntryKey::digit)
        .map(Button::Entry)
        .collect();
    buttons.push(Button::Entry(EntryKey::POINT));
    buttons.push(Button::Clear);
    buttons
}

/// Operator column, top to bottom.
pub fn operator_column() -> Vec<Button> {
    Operator::ALL
        .into_iter()
        .map(Button::Operator)
        .chain(std::iter::once(Button::Equals))
        .collect()
}

/// Screen rectangle of every button inside `area`.
pub fn button_rects(area: Rect) -> Vec<(Button, Rect)> {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)])
        .split(area);

    let digits = digit_block();
    let digit_rows = split_even(panes[0], Direction::Vertical, digits.len() / DIGIT_COLUMNS);
    let mut rects = Vec::with_capacity(digits.len() + Operator::ALL.len() + 1);
    for (row, buttons) in digit_rows.iter().zip(digits.chunks(DIGIT_COLUMNS)) {
        let cells = split_even(*row, Direction::Horizontal, DIGIT_COLUMNS);
        rects.extend(buttons.iter().copied().zip(cells));
    }

    let operators = operator_column();
    let operator_rows = split_even(panes[1], Direction::Vertical, operators.len());
    rects.extend(operators.into_iter().zip(operator_rows));
    rects
}

/// Button under the terminal cell (`column`, `row`), if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    button_rects(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        })
        .map(|(button, _)| button)
}

fn split_even(area: Rect, direction: Direction, parts: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, parts as u32); parts];
    Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(buttons: &[Button]) -> Vec<String> {
        buttons.iter().map(|b| b.label()).collect()
    }

    #[test]
    fn digit_block_order() {
        assert_eq!(
            labels(&digit_block()),
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", ".", "C"]
        );
    }

    #[test]
    fn operator_column_order() {
        assert_eq!(labels(&operator_column()), ["+", "-", "*", "/", "%", "="]);
    }

    #[test]
    fn buttons_map_one_to_one_to_intents() {
        assert_eq!(Button::Clear.intent(), CalcIntent::Clear);
        assert_eq!(Button::Equals.intent(), CalcIntent::Resolve);
        assert_eq!(
            Button::Operator(Operator::Remainder).intent(),
            CalcIntent::SetOperator(Operator::Remainder)
        );
        assert_eq!(
            Button::Entry(EntryKey::POINT).intent(),
            CalcIntent::Push(EntryKey::POINT)
        );
    }

    #[test]
    fn for_intent_inverts_intent() {
        for button in digit_block().into_iter().chain(operator_column()) {
            assert_eq!(Button::for_intent(button.intent()), button);
        }
    }

    #[test]
    fn every_button_gets_a_rect() {
        let area = Rect::new(0, 0, 40, 24);
        let rects = button_rects(area);
        assert_eq!(rects.len(), 18);
        for (button, rect) in &rects {
            assert!(rect.width > 0 && rect.height > 0, "{button:?} has empty rect");
        }
    }

    #[test]
    fn hit_test_finds_button_at_its_center() {
        let area = Rect::new(2, 5, 48, 24);
        for (button, rect) in button_rects(area) {
            let x = rect.x + rect.width / 2;
            let y = rect.y + rect.height / 2;
            assert_eq!(button_at(area, x, y), Some(button));
        }
    }

    #[test]
    fn hit_test_outside_area_is_none() {
        let area = Rect::new(2, 5, 48, 24);
        assert_eq!(button_at(area, 0, 0), None);
        assert_eq!(button_at(area, 60, 10), None);
    }
}
