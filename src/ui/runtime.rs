use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let (mut terminal, guard) =
        setup_terminal(config.ui.mouse).context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let events = EventHandler::new(tick_rate);
    tracing::info!(mouse = config.ui.mouse, ?tick_rate, "calculator started");

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .context("failed to draw frame")?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("input listener disconnected");
                break;
            }
        }
    }

    // Release the input subscription before handing the terminal back.
    drop(events);
    drop(guard);
    tracing::info!(value = app.calculator().value(), "calculator stopped");
    Ok(())
}
