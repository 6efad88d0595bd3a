//! Cloak admin console: a terminal login gate in front of a dashboard.
//!
//! This binary initialises logging and the terminal, runs the main event
//! loop, and restores the terminal on exit or panic.

mod app;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::{config_path, App, AppMode};
use crate::input::{handle_key, InputAction};
use crate::render::render;

const DEFAULT_LOG_FILTER: &str = "cloak_tui=debug,cloak_core=debug";

/// Messages from spawned tasks back to the main loop.
enum LoginMessage {
    /// The artificial login delay has elapsed.
    DelayElapsed,
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs go to a file since the terminal belongs to the UI. `RUST_LOG`
/// overrides the default filter.
fn init_tracing() -> anyhow::Result<()> {
    let log_path = std::env::temp_dir().join("cloak-admin.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    // Build before touching the terminal so config errors print normally.
    let app = App::load(&config_path())?;

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, app).await;

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        tracing::error!("Exited with error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Schedules [`LoginMessage::DelayElapsed`] after `delay`.
fn spawn_login_delay(delay: Duration, tx: mpsc::UnboundedSender<LoginMessage>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(LoginMessage::DelayElapsed);
    });
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    let (login_tx, mut login_rx) = mpsc::unbounded_channel::<LoginMessage>();

    loop {
        // 1. Drain login timer messages
        while let Ok(msg) = login_rx.try_recv() {
            app = match msg {
                LoginMessage::DelayElapsed => app.complete_login(),
            };
        }

        app = app.with_expired_notice(Instant::now());

        // 2. Render
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        // 3. Poll for crossterm events
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        app = match handle_key(key, app.mode()) {
            InputAction::Quit => app.with_quit(),
            InputAction::LoginChar(c) => app.login_char(c),
            InputAction::LoginBackspace => app.login_backspace(),
            InputAction::LoginSwitchField => app.login_switch_field(),
            InputAction::LoginSubmit => {
                let app = app.submit_login();
                if app.mode() == AppMode::LoginPending {
                    spawn_login_delay(app.login_delay(), login_tx.clone());
                }
                app
            }
            InputAction::NextTab => app.next_tab(),
            InputAction::PrevTab => app.prev_tab(),
            InputAction::SelectTab(index) => app.select_tab(index),
            InputAction::Logout => app.logout(),
            InputAction::BeginEdit => app.begin_edit(),
            InputAction::FormChar(c) => app.form_char(c),
            InputAction::FormBackspace => app.form_backspace(),
            InputAction::FormNextField => app.form_next_field(),
            InputAction::FormPrevField => app.form_prev_field(),
            InputAction::FormToggle => app.form_toggle(),
            InputAction::FormConfirm => app.form_confirm(),
            InputAction::FormCancel => app.form_cancel(),
            InputAction::None => app,
        };
    }

    Ok(())
}
