use std::path::Path;

use anyhow::Result;
use clap::Parser;

use sortviz::cli::{Cli, Commands, ConfigCommands};
use sortviz::{logging, Config};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    init_logging(&config, cli.log_file.as_deref());

    match cli.command {
        None => commands::play::handle(None, None, Default::default(), &config),
        Some(Commands::Play {
            algorithm,
            file,
            playback,
        }) => commands::play::handle(algorithm, file, playback, &config),
        Some(Commands::Compare {
            first,
            second,
            first_file,
            second_file,
            playback,
        }) => commands::compare::handle(first, second, first_file, second_file, playback, &config),
        Some(Commands::Inspect { file, json, trace }) => {
            commands::inspect::handle(&file, json, trace)
        }
        Some(Commands::Algorithms) => commands::algorithms::handle(),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init => commands::config::handle_init(&config_path),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}

/// Logging problems are reported but never stop the program.
fn init_logging(config: &Config, override_path: Option<&Path>) {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.log_path());
    let Some(path) = path else {
        return;
    };
    if let Err(e) = logging::init(&config.log.level, &path) {
        eprintln!("warning: logging disabled: {:#}", e);
    }
}
