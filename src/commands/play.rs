//! Play subcommand handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use sortviz::cli::PlaybackArgs;
use sortviz::render::ChartState;
use sortviz::tui::{VisualizerApp, VisualizerSettings, VisualizerState};
use sortviz::{Algorithm, Config, Panel, SnapshotSequence};

use super::{data_dir, playback_config, run_headless};

pub fn handle(
    algorithm: Option<Algorithm>,
    file: Option<PathBuf>,
    args: PlaybackArgs,
    config: &Config,
) -> Result<()> {
    let dir = data_dir(&args, config);
    let single = playback_config(config.playback.single(), &args);

    if args.headless {
        let Some(algorithm) = algorithm else {
            bail!("--headless needs an ALGORITHM");
        };
        let path = file.unwrap_or_else(|| algorithm.snapshot_path(&dir));
        let sequence = SnapshotSequence::load(&path)?;
        let mut panel = Panel::new(algorithm, single, ChartState::new());
        panel.set_sequence(sequence, Some(path))?;
        return run_headless(std::slice::from_mut(&mut panel));
    }

    let settings = VisualizerSettings {
        single,
        compare: config.playback.compare(),
        data_dir: dir,
    };
    let algorithm = algorithm.unwrap_or(Algorithm::BubbleSort);
    let mut state = VisualizerState::new(settings, algorithm);
    match file {
        Some(file) => state.on_file_selected(algorithm, file),
        None => state.on_algorithm_selected(algorithm),
    }

    let mut app = VisualizerApp::new(state, config.ui.theme())?;
    app.run()
}
