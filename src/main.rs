use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pocket_snake::config::GRID_SIZE;
use pocket_snake::error::AppError;
use pocket_snake::grid::Grid;
use pocket_snake::logging::{default_log_path, init_file_logging};
use pocket_snake::terminal_runtime::restore_terminal;
use pocket_snake::view::GameView;
use tracing::error;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; the same seed and inputs replay the same game.
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file instead of the default data directory.
    #[arg(long = "log-file", value_name = "PATH", conflicts_with = "no_log")]
    log_file: Option<PathBuf>,

    /// Disable logging entirely.
    #[arg(long = "no-log")]
    no_log: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.no_log {
        let path = cli.log_file.clone().unwrap_or_else(default_log_path);
        if let Err(error) = init_file_logging(&path) {
            eprintln!("warning: {error}; continuing without logs");
        }
    }

    install_panic_hook();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game exited with an error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let view = GameView::open(Grid::new(GRID_SIZE), cli.seed)?;
    view.run()
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
