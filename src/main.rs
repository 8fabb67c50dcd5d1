use genjutsu::app::{frame_ticker, App};
use genjutsu::cli::{parse_args, run_cli_command, CliCommand};
use genjutsu::config::DashboardConfig;
use genjutsu::input::{Command, CommandRegistry};
use genjutsu::logging::init_logging;
use genjutsu::terminal::{setup_panic_hook, TerminalManager};
use genjutsu::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::RunTui(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let (mut config, config_warnings) = DashboardConfig::load();
    if options.log_file.is_some() {
        config = config.with_log_file(options.log_file);
    }
    if options.no_simulation {
        config = config.with_simulation(false);
    }

    if let Err(e) = init_logging(config.log_file.as_deref()) {
        eprintln!("Could not open log file: {}", e);
    }
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(config);

        let size = term_manager.terminal().size()?;
        app.update_terminal_dimensions(size.width, size.height);
        app.mount();
        tracing::info!(width = size.width, height = size.height, "Dashboard started");

        let result = run_app(term_manager.terminal(), &mut app).await;

        app.unmount();
        term_manager.restore()?;
        tracing::info!("Dashboard stopped");
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();
    let mut ticker = frame_ticker();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
            app.process_visibility();
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => handle_event(app, &registry, event),
                    Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_event(app: &mut App, registry: &CommandRegistry, event: Event) {
    match event {
        Event::Resize(width, height) => {
            app.update_terminal_dimensions(width, height);
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let context = app.build_input_context();
            if let Some(cmd) = registry.dispatch(key, &context) {
                app.execute_command(cmd);
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                ui::interaction::handle_mouse_click(app, mouse_event.column, mouse_event.row);
                app.mark_dirty();
            }
            // Hover is applied during render
            MouseEventKind::Moved => {
                app.mouse_position = Some((mouse_event.column, mouse_event.row));
                if app
                    .hit_areas
                    .update_hover(mouse_event.column, mouse_event.row)
                {
                    app.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if app.confirm.is_none() => {
                app.execute_command(Command::MoveDown);
            }
            MouseEventKind::ScrollUp if app.confirm.is_none() => {
                app.execute_command(Command::MoveUp);
            }
            _ => {}
        },
        _ => {}
    }
}
