mod board_view;
mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use tictactoe_common::log;
use tictactoe_common::logger::{self, LogLevel};
use tictactoe_common::rng::SessionRng;
use tictactoe_common::tictactoe::GameSession;

use config::{Config, get_config_file};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against an unbeatable computer")]
struct Args {
    /// Path to the YAML config file; defaults to tictactoe_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for the computer's tie-breaking and the first-move coin flip.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every move and bot decision.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_file = get_config_file(args.config.as_deref());
    let config = match config_file.load() {
        Ok(config) => config,
        Err(e) => {
            log!("Using default config, {} could not be loaded: {}", config_file.path().display(), e);
            Config::default()
        }
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting with opponent {:?}, first player {:?}, seed {}",
        config.game.opponent,
        config.game.first_player,
        rng.seed()
    );
    let session = GameSession::from_settings(&config.game, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(session)))),
    )?;

    log!("Client closed");
    Ok(())
}
