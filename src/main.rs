mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod timer;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::Local;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use persistence::{init_local_dir, resolve_data_dir, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "lumina")]
#[command(about = "A calm, terminal-based Pomodoro focus timer with tasks and daily stats", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .lumina, else ~/.lumina
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log more to lumina.log (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .lumina directory in the current directory
    Init,
    /// Print a progress report, or write it to a file
    Stats {
        /// Output file path. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_dir(&current_dir)?;
            println!("Initialized lumina directory: {}", dir.display());
            println!();
            println!("Lumina will now keep settings, tasks and stats here.");
            println!("Run 'lumina' to start focusing.");
            Ok(())
        }
        Some(Commands::Stats { output }) => {
            let store = Store::open(resolve_data_dir(cli.data_dir)?)?;
            logging::init_logging(store.dir(), cli.verbose)?;
            let state = store.load_state();
            let report = report::build_report(&state, Local::now().date_naive());

            match output {
                Some(path) => {
                    report::write_report(&report, &path)?;
                    println!("Report written: {}", path.display());
                }
                None => print!("{}", report),
            }
            Ok(())
        }
        None => run_tui(cli.data_dir, cli.verbose),
    }
}

fn run_tui(data_dir: Option<PathBuf>, verbose: u8) -> Result<()> {
    let store = Store::open(resolve_data_dir(data_dir)?)?;
    let log_path = logging::init_logging(store.dir(), verbose)?;
    info!(dir = %store.dir().display(), log = %log_path.display(), "starting lumina");

    let mut app = AppState::new(store.load_state());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save(&store) {
        error!(error = %e, "final save failed");
        eprintln!("Error saving state: {:#}", e);
    }

    if let Err(err) = result {
        error!(error = %err, "lumina exited with an error");
        eprintln!("Error: {:#}", err);
    }

    info!("lumina stopped");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    store: &Store,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();
    let mut last_title = String::new();
    let mut save_failing = false;

    loop {
        let title = app.window_title();
        if title != last_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            last_title = title;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick();

        // A failed write is retried on the next pass
        if app.pending_writes.any() {
            match app.save(store) {
                Ok(()) => save_failing = false,
                Err(e) if !save_failing => {
                    error!(error = %e, "autosave failed");
                    save_failing = true;
                }
                Err(_) => {}
            }
        }
    }
}
