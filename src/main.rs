use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use term_shade::constants::{
    DEFAULT_PANE_HEIGHT, DEFAULT_PANE_WIDTH, DEFAULT_PANE_X, DEFAULT_PANE_Y, HANDLE_SIZE,
    TERMINAL_DENSITY, TERMINAL_MIN_PANE_SIZE,
};
use term_shade::controller::ControllerConfig;
use term_shade::drivers::InputDriver;
use term_shade::drivers::console::ConsoleInputDriver;
use term_shade::event_loop::{ControlFlow, EventLoop};
use term_shade::{GeometryController, GeometryStore, OverlayPane, PaneRect, tracing_sub, ui};

#[derive(Debug, Parser)]
#[command(name = "term-shade", version, about)]
struct Cli {
    /// State file holding persisted pane geometry. Defaults to the
    /// platform data directory.
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Profile name the geometry is loaded from and saved under.
    #[arg(long, default_value = "default")]
    profile: String,

    /// Resize hotzone width in logical units.
    #[arg(long, default_value_t = HANDLE_SIZE)]
    handle_size: f32,

    /// Density factor converting logical units to terminal cells.
    #[arg(long, default_value_t = TERMINAL_DENSITY)]
    density: f32,

    /// Minimum pane width/height in cells.
    #[arg(long, default_value_t = TERMINAL_MIN_PANE_SIZE)]
    min_size: i32,

    /// Do not load or save pane geometry.
    #[arg(long)]
    no_persist: bool,
}

fn main() -> io::Result<()> {
    tracing_sub::init_default();
    let cli = Cli::parse();

    let controller = GeometryController::new(ControllerConfig {
        handle_size: cli.handle_size,
        density: cli.density,
        min_size: cli.min_size,
    })
    .map_err(io::Error::other)?;

    let store = if cli.no_persist {
        None
    } else {
        match cli.state_file.clone().or_else(GeometryStore::default_path) {
            Some(path) => Some(GeometryStore::new(path)),
            None => {
                tracing::warn!("no data directory available, geometry will not persist");
                None
            }
        }
    };

    let initial = store
        .as_ref()
        .map(|store| store.load(&cli.profile))
        .unwrap_or(PaneRect::new(
            DEFAULT_PANE_X,
            DEFAULT_PANE_Y,
            DEFAULT_PANE_WIDTH,
            DEFAULT_PANE_HEIGHT,
        ));
    tracing::debug!(rect = ?initial, profile = %cli.profile, "loaded pane geometry");
    let mut pane = OverlayPane::new(controller, initial);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut driver = ConsoleInputDriver::new();

    // Mouse capture is the overlay's one hard requirement: without it the
    // pane can never be dragged, so abort instead of showing a dead panel.
    if let Err(err) = driver.set_mouse_capture(true) {
        tracing::warn!(%err, "mouse capture unavailable, aborting overlay");
        restore_terminal(&mut terminal)?;
        return Err(err);
    }

    let result = run_overlay(&mut terminal, driver, &mut pane);

    restore_terminal(&mut terminal)?;

    if let Some(store) = &store
        && let Err(err) = store.save(&cli.profile, pane.rect())
    {
        tracing::warn!(%err, "failed to persist pane geometry");
    }
    result
}

fn run_overlay(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    driver: ConsoleInputDriver,
    pane: &mut OverlayPane,
) -> io::Result<()> {
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(16));
    event_loop.run(|_, event| {
        match event {
            None => {
                terminal.draw(|frame| ui::render_overlay(frame, pane))?;
            }
            Some(Event::Mouse(mouse)) => {
                pane.handle_mouse(&mouse);
            }
            Some(Event::Key(key))
                if key.kind != KeyEventKind::Release
                    && key.code == KeyCode::Char('q')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                return Ok(ControlFlow::Quit);
            }
            // No release event will arrive once focus is gone; end the
            // session with the last computed geometry standing.
            Some(Event::FocusLost) => pane.cancel_interaction(),
            Some(_) => {}
        }
        if pane.take_dismiss_request() {
            return Ok(ControlFlow::Quit);
        }
        Ok(ControlFlow::Continue)
    })
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()
}
