use clap::Parser;
use graphlog::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

/// Terminal viewer for the `git log` graph of the current repository.
/// Press `r` to refresh, `q` or Ctrl+C to quit.
#[derive(Parser)]
#[command(name = "graphlog", version, about = "Git history viewer with on-demand refresh")]
struct Args {}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _args = Args::parse();

    // Initialize file logger - writes to graphlog.log in current directory.
    // The TUI owns the terminal, so nothing may log to stdout.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("graphlog.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("graphlog starting up");

    tui::run()
}
