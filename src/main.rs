use booklog::StartTab;
use booklog::core::config::{self, CliOverrides, ConfigNotes};
use booklog::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "booklog", about = "Keep track of the books you've read")]
struct Args {
    /// Tab to open on
    #[arg(short, long, value_enum)]
    tab: Option<StartTab>,

    /// Write the log to this file instead of booklog.log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Decimal places for the average page count
    #[arg(short, long)]
    precision: Option<usize>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut notes = ConfigNotes::new();
    let (file_config, load_error) = match config::load_config(&mut notes) {
        Ok(c) => (c, None),
        Err(e) => (config::BooklogConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_tab: args.tab,
            average_precision: args.precision,
            log_level: args.log_level,
            log_file: args.log_file,
        },
        &mut notes,
    );

    // Initialize file logger; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Messages from config loading, held until the logger existed
    notes.emit();
    if let Some(e) = load_error {
        log::warn!("Failed to load config, using defaults: {}", e);
    }
    log::info!(
        "Book Log starting up on tab {:?} (precision {})",
        resolved.start_tab,
        resolved.average_precision
    );

    tui::run(resolved)
}
