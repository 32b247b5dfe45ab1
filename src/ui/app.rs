use crate::ui::calculator::{CalcIntent, CalcState, CalculatorReducer};
use crate::ui::keypad::{self, Button};
use crate::ui::layout::keypad_rect;
use crate::ui::mvi::Reducer;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Calculator state (MVI pattern).
    calculator: CalcState,
    /// Button drawn as pressed until the next tick.
    highlighted: Option<Button>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            size: None,
            calculator: CalcState::default(),
            highlighted: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn calculator(&self) -> &CalcState {
        &self.calculator
    }

    pub fn highlighted(&self) -> Option<Button> {
        self.highlighted
    }

    /// Single entry point into the calculator reducer.
    pub fn dispatch(&mut self, intent: CalcIntent) {
        dispatch_mvi!(self, calculator, CalculatorReducer, intent);
        self.highlighted = Some(Button::for_intent(intent));
        tracing::debug!(
            ?intent,
            value = self.calculator.value(),
            prev = ?self.calculator.prev(),
            op = ?self.calculator.op(),
            "dispatched"
        );
    }

    /// Left clicks on the keypad press the button under the cursor.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let keypad = keypad_rect(Rect::new(0, 0, cols, rows));
        if let Some(button) = keypad::button_at(keypad, mouse.column, mouse.row) {
            tracing::trace!(?button, "keypad click");
            self.dispatch(button.intent());
        }
    }

    pub fn on_tick(&mut self) {
        self.highlighted = None;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{EntryKey, Operator};
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn center_of(button: Button, cols: u16, rows: u16) -> (u16, u16) {
        let keypad = keypad_rect(Rect::new(0, 0, cols, rows));
        let (_, rect) = keypad::button_rects(keypad)
            .into_iter()
            .find(|(b, _)| *b == button)
            .expect("button is laid out");
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn dispatch_runs_reducer_and_highlights() {
        let mut app = App::new();
        app.dispatch(CalcIntent::Push(EntryKey::digit(7).unwrap()));
        assert_eq!(app.calculator().value(), 7.0);
        assert_eq!(app.highlighted(), EntryKey::digit(7).map(Button::Entry));

        app.on_tick();
        assert_eq!(app.highlighted(), None);
    }

    #[test]
    fn click_on_button_dispatches_its_intent() {
        let mut app = App::new();
        app.on_resize(40, 30);

        for button in [
            Button::Entry(EntryKey::digit(6).unwrap()),
            Button::Operator(Operator::Divide),
            Button::Entry(EntryKey::digit(3).unwrap()),
            Button::Equals,
        ] {
            let (x, y) = center_of(button, 40, 30);
            app.on_mouse(click(x, y));
        }

        assert_eq!(app.calculator().value(), 2.0);
        assert!(!app.calculator().is_pending());
    }

    #[test]
    fn click_before_first_resize_is_ignored() {
        let mut app = App::new();
        app.on_mouse(click(1, 10));
        assert_eq!(*app.calculator(), CalcState::default());
    }

    #[test]
    fn right_click_is_ignored() {
        let mut app = App::new();
        app.on_resize(40, 30);
        let (x, y) = center_of(Button::Entry(EntryKey::digit(9).unwrap()), 40, 30);
        app.on_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(x, y)
        });
        assert_eq!(app.calculator().value(), 0.0);
    }

    #[test]
    fn quit_flag() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
    }
}
