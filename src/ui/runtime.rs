use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

use anyhow::Context;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_CHANNEL_SIZE: usize = 16;

/// Run the dashboard until the user quits.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let tick_rate = config.tick_rate;
    let client = Arc::new(ApiClient::new(config.api));

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(COMMAND_CHANNEL_SIZE);
    let events = EventHandler::new(tick_rate);
    runtime.spawn(fetcher::run(client, command_rx, events.sender()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new();
    app.set_command_sender(command_tx);
    // Courses and students are fetched as soon as the view is active,
    // independently of each other.
    app.refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(event) => app.on_fetch_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
