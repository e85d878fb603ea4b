//! # Zombies vs Humans Entry Point
//!
//! Parses the command line, validates the configuration and runs one game on
//! the console.

use clap::{ArgAction, Parser};
use log::{debug, info};
use std::io;
use std::process::ExitCode;
use zombies_vs_humans::{
    config, ConsoleInput, ConsoleUi, Game, GameConfig, InputSource, JsonLinesUi, SimError,
    SimResult, UserInterface,
};

/// Command line arguments.
///
/// `-h` sets the number of humans, so help is only available as `--help`.
#[derive(Parser, Debug)]
#[command(name = "zombies-vs-humans")]
#[command(about = "Zombies hunt humans on a wrap-around grid")]
#[command(version, disable_help_flag = true)]
struct Args {
    /// Horizontal dimension of the world
    #[arg(short = 'x', default_value_t = config::DEFAULT_X_DIM)]
    x_dim: u32,

    /// Vertical dimension of the world
    #[arg(short = 'y', default_value_t = config::DEFAULT_Y_DIM)]
    y_dim: u32,

    /// Number of zombies
    #[arg(short = 'z', default_value_t = config::DEFAULT_ZOMBIES)]
    zombies: u32,

    /// Number of humans
    #[arg(short = 'h', default_value_t = config::DEFAULT_HUMANS)]
    humans: u32,

    /// Number of player-controlled zombies
    #[arg(short = 'Z', default_value_t = 0)]
    player_zombies: u32,

    /// Number of player-controlled humans
    #[arg(short = 'H', default_value_t = 0)]
    player_humans: u32,

    /// Number of turns
    #[arg(short = 't', default_value_t = config::DEFAULT_TURNS)]
    turns: u32,

    /// Random seed for placement and turn order
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the UI event stream as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let config = GameConfig::new(self.x_dim, self.y_dim, self.zombies, self.humans, self.turns)
            .with_players(self.player_zombies, self.player_humans);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting Zombies vs Humans v{}", zombies_vs_humans::VERSION);

    let mut ui: Box<dyn UserInterface> = if args.json {
        Box::new(JsonLinesUi::new(io::stdout()))
    } else {
        Box::new(ConsoleUi::stdout())
    };

    match run_game(&args, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(ui.as_mut(), &e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes `env_logger`; `RUST_LOG` wins over `--log-level`.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

fn run_game(args: &Args, ui: &mut dyn UserInterface) -> SimResult<()> {
    let config = args.game_config();
    config.validate()?;

    // Prompts must not interleave with the JSON stream on stdout
    let mut input: Box<dyn InputSource> = if args.json {
        Box::new(ConsoleInput::new(io::stdin().lock(), io::stderr()))
    } else {
        Box::new(ConsoleInput::stdio())
    };

    let mut game = Game::new(config)?;
    let state = game.run(ui, input.as_mut())?;
    info!("Finished: {:?}", game.summary());
    info!("Final state: {}", state.describe());
    Ok(())
}

/// Sends every error message to the sink, one `ERROR:` line each.
fn report_error(ui: &mut dyn UserInterface, err: &SimError) {
    debug!("game aborted: {}", err);
    match err {
        SimError::InvalidConfig(messages) => {
            for message in messages {
                ui.render_error(&format!("ERROR: {}", message));
            }
        }
        other => ui.render_error(&format!("ERROR: {}", other)),
    }
}
