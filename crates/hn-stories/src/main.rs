use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod view_models;
mod views;

use actions::{Action, GlobalAction, SearchAction};
use background::SharedState;
use hn_config::{
    AppConfig, FileBackend, MemoryBackend, SettingsBackend, SettingsStore, SEARCH_TERM_KEY,
};
use middleware::{
    KeyboardMiddleware, LoggingMiddleware, Middleware, SearchMiddleware, SettingsMiddleware,
};
use state::AppState;
use view_models::CommentTally;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();
    log::info!("Starting hn-stories, logging to {:?}", log_file);

    let config = AppConfig::load();

    let settings_backend: Box<dyn SettingsBackend> = match FileBackend::at_default_path() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            log::warn!("Settings file unavailable ({}), settings will not persist", e);
            Box::new(MemoryBackend::new())
        }
    };
    let settings = SettingsStore::new(settings_backend);
    let term = settings.get(SEARCH_TERM_KEY, &config.default_search_term);
    log::info!("Starting with remembered search term {:?}", term);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channel topology: the main thread sends raw input into action_tx;
    // the worker runs middleware and forwards reducible actions back on
    // result_tx
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let shared: SharedState = Arc::new(RwLock::new(AppState::new(term)));

    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(SettingsMiddleware::new(settings)),
        Box::new(SearchMiddleware::new(&config)),
    ];
    let worker = background::spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    // Kick off the initial fetch for the remembered term
    action_tx.send(Action::Search(SearchAction::Submit)).ok();

    let result = run_app(&mut terminal, &shared, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the worker; a no-op if it already saw the quit action
    action_tx.send(Action::Global(GlobalAction::Quit)).ok();
    drop(action_tx);
    worker.join().ok();

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting hn-stories");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    let mut tally = CommentTally::default();

    loop {
        // Apply actions the worker forwarded for reduction
        while let Ok(action) = result_rx.try_recv() {
            if let Ok(mut guard) = shared.write() {
                *guard = reducers::reduce(guard.clone(), &action);
            }
        }

        // Render from a snapshot so the lock is not held while drawing
        let snapshot = match shared.read() {
            Ok(guard) => guard.clone(),
            Err(_) => break,
        };
        if !snapshot.running {
            break;
        }

        terminal.draw(|frame| views::render(&snapshot, &mut tally, frame))?;

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .ok();
                }
            }
        }
    }

    Ok(())
}
