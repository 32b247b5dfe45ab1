use crate::calc::{EntryKey, Operator};
use crate::ui::app::App;
use crate::ui::calculator::CalcIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key");
    if let Some(intent) = intent_for_key(key) {
        app.dispatch(intent);
    }
}

/// Keyboard mapping of the calculator.
///
/// Digits and `.` push, `+ - * / %` select the operator, `Enter` resolves
/// and `Delete` clears. Everything else, including chords with Ctrl or
/// Alt, produces nothing.
pub fn intent_for_key(key: KeyEvent) -> Option<CalcIntent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => EntryKey::from_char(ch)
            .map(CalcIntent::Push)
            .or_else(|| Operator::from_char(ch).map(CalcIntent::SetOperator)),
        KeyCode::Enter => Some(CalcIntent::Resolve),
        KeyCode::Delete => Some(CalcIntent::Clear),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
