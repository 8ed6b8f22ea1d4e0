mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod seed;
mod ui;

use anyhow::{Context, Result};
use app::{App, Backend};
use clap::Parser;
use config::TrackerConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use skilltime::{DateRange, EntryFilter, JsonFileStore, Tracker};
use std::io;
use std::path::PathBuf;
use time::{OffsetDateTime, UtcOffset};

fn main() -> Result<()> {
    dotenvy::from_filename(".env.skilltime").ok();

    let cli = cli::Cli::parse();
    let cfg = TrackerConfig::load()?;

    // Must be resolved while the process is still single-threaded.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    match cli.command {
        None | Some(cli::Commands::Run) => {
            logging::init_file(&cfg.log_path(), &cfg.log_level)?;
            let store: Backend = Box::new(JsonFileStore::new(&cfg.data_dir));
            tracing::info!(data_dir = %cfg.data_dir.display(), "starting tracker");
            run_tui(store, offset, &cfg)
        }
        Some(cli::Commands::Dev) => {
            logging::init_file(&cfg.log_path(), &cfg.log_level)?;
            let store: Backend = Box::new(seed::seeded_store(offset));
            tracing::info!("starting tracker on seeded data");
            run_tui(store, offset, &cfg)
        }
        Some(cli::Commands::Export {
            range,
            project,
            out,
        }) => {
            logging::init_stderr(&cfg.log_level)?;
            export(&cfg, offset, range, project, out)
        }
        Some(cli::Commands::Summary) => {
            logging::init_stderr(&cfg.log_level)?;
            print_summary(&cfg, offset);
            Ok(())
        }
        Some(cli::Commands::ConfigPath) => {
            let path = TrackerConfig::config_path()?;
            if !path.exists() {
                TrackerConfig::default().save()?;
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_tui(store: Backend, offset: UtcOffset, cfg: &TrackerConfig) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let tracker = Tracker::load(store);
    let mut app = App::new(tracker, offset, cfg);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = rt.block_on(runtime::run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("tracker exited with error: {:#}", e);
    }
    result
}

fn now(offset: UtcOffset) -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(offset)
}

fn export(
    cfg: &TrackerConfig,
    offset: UtcOffset,
    range: DateRange,
    project: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let tracker = Tracker::load(JsonFileStore::new(&cfg.data_dir));

    let mut filter = EntryFilter::new().with_range(range);
    if let Some(id) = project {
        let project = tracker
            .projects()
            .iter()
            .find(|p| p.id.as_str() == id || p.name.eq_ignore_ascii_case(&id))
            .with_context(|| format!("No project with id or name '{}'", id))?;
        filter = filter.with_project(project.id.clone());
    }

    let dir = out.unwrap_or_else(|| cfg.export_dir.clone());
    let path = tracker.export_csv(&filter, now(offset), &dir)?;
    println!("{}", path.display());
    Ok(())
}

fn print_summary(cfg: &TrackerConfig, offset: UtcOffset) {
    let tracker = Tracker::load(JsonFileStore::new(&cfg.data_dir));
    let summaries = tracker.summaries(now(offset));
    for range in DateRange::ALL {
        let summary = summaries.get(range);
        println!(
            "{:<12} {:>8}h  {}{}",
            range.label(),
            summary.hours_display(),
            cfg.currency_symbol,
            summary.earnings_display()
        );
    }
}
