use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::time::Duration;

/// Set up the terminal, run the event loop and restore the terminal.
pub async fn run_app(context: AppContext) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(context.config.ui.tick_rate_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application components
    let mut app = AppComponent::new(context);
    let mut event_handler = EventHandler::new(tick_rate);
    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            let palette = app.palette();
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area, &palette);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Background results and the spinner only redraw when something changed
                needs_render = app.tick();
            }
            EventType::Other => {}
        }

        // Check if app wants to quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
