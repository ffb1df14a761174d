//! Terminal setup and the async event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::event_handler::{FRAME_INTERVAL, TICK_RATE};
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the TUI until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(config, logger);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    log::info!("App: exited");
    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        // Tick faster while the sheet moves so the easing looks smooth
        let tick_rate = if app.is_animating() { FRAME_INTERVAL } else { TICK_RATE };
        if event_handler.tick_rate() != tick_rate {
            log::debug!("Event loop: tick rate now {:?}", tick_rate);
            event_handler.set_tick_rate(tick_rate);
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick => {
                let was_animating = app.is_animating();
                app.handle_event(event).await?;
                // Keep pending frames; a render skipped by the frame limit is owed
                needs_render |= was_animating;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
