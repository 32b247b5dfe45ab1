use crate::ui::app::App;
use crate::ui::display::ReadoutPanel;
use crate::ui::footer::Footer;
use crate::ui::keypad::{button_rects, Button};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, KEY_BORDER, KEY_CLEAR, KEY_EQUALS, KEY_TEXT, OPERATOR_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (display, keypad, footer) = layout_regions(area);

    frame.render_widget(ReadoutPanel::widget(app.calculator()), display);
    frame.render_widget(Clear, keypad);
    for (button, rect) in button_rects(keypad) {
        draw_button(frame, button, rect, app.highlighted() == Some(button));
    }
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn draw_button(frame: &mut Frame<'_>, button: Button, area: Rect, highlighted: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let fg = match button {
        Button::Entry(_) => KEY_TEXT,
        Button::Clear => KEY_CLEAR,
        Button::Operator(_) => OPERATOR_TEXT,
        Button::Equals => KEY_EQUALS,
    };
    let mut style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    if highlighted {
        style = style.bg(ACTIVE_HIGHLIGHT);
    }

    // Put the label on the middle row inside the border.
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines = vec![String::new(); top_padding as usize];
    lines.push(button.label());

    let text = lines.join("\n");
    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(KEY_BORDER)),
        );
    frame.render_widget(widget, area);
}
