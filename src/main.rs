mod app;
mod domain;
mod error;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_data_dir, history_file, init_local_data_dir, load_settings, log_dir, settings_file,
    HistoryStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tasktimer")]
#[command(about = "A terminal work/break interval timer with a daily task history", long_about = None)]
struct Cli {
    /// Work minutes to prefill (overrides settings.json)
    #[arg(short, long, global = true)]
    work: Option<u32>,

    /// Break minutes to prefill (overrides settings.json)
    #[arg(short = 'b', long = "break", global = true)]
    break_minutes: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tasktimer directory in the current directory
    Init,
    /// Print the totals and task list for a day
    Stats {
        /// Date to show (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Write a markdown report for a day
    Report {
        /// Date to report on (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Parse a `--date` argument, defaulting to today
fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        println!("Initialized tasktimer directory: {}", data_dir.display());
        println!();
        println!("Task history will now be stored in this local directory.");
        println!("Run 'tasktimer' to start the timer.");
        return Ok(());
    }

    let data_dir = ensure_data_dir()?;
    let _log_guard = logging::init_logging(&log_dir(&data_dir))?;
    let store = HistoryStore::new(history_file(&data_dir));

    match cli.command {
        Some(Commands::Stats { date }) => print_stats(&store, parse_date(date)?),
        Some(Commands::Report { date, output }) => {
            let report_date = parse_date(date)?;
            println!("Generating report for {}...", report_date);
            let report_path = report::generate_report(
                &store,
                &data_dir,
                report_date,
                output.map(PathBuf::from),
            )?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        Some(Commands::Init) | None => {
            let settings_path = settings_file(&data_dir);
            let settings = load_settings(&settings_path)
                .context("Failed to load settings")?
                .with_overrides(cli.work, cli.break_minutes);

            eprintln!("Using tasktimer directory: {}", data_dir.display());
            info!(dir = %data_dir.display(), "Starting timer");

            let mut app = AppState::new(store, settings, settings_path);
            run_tui(&mut app)
        }
    }
}

fn print_stats(store: &HistoryStore, date: NaiveDate) -> Result<()> {
    let stats = store
        .daily_stats(date)
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    println!("{}", date);
    println!("Minutes: {}    Completed: {}", stats.total_minutes, stats.completed_count);
    if stats.is_empty() {
        println!("No tasks recorded.");
    }
    for record in &stats.records {
        println!("  {}", domain::record_line(record));
    }
    Ok(())
}

fn run_tui(app: &mut AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "Timer exited with an error");
        eprintln!("Error: {}", err);
    }
    info!("Timer closed");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but never past the next timer pulse
        let timeout = app.ticker.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
