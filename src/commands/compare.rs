//! Compare subcommand handler

use std::path::PathBuf;

use anyhow::Result;

use sortviz::cli::PlaybackArgs;
use sortviz::compare::{check_distinct, load_pair, CompareSlot};
use sortviz::render::ChartState;
use sortviz::tui::{VisualizerApp, VisualizerSettings, VisualizerState};
use sortviz::{Algorithm, Config, Panel};

use super::{data_dir, playback_config, run_headless};

pub fn handle(
    first: Algorithm,
    second: Algorithm,
    first_file: Option<PathBuf>,
    second_file: Option<PathBuf>,
    args: PlaybackArgs,
    config: &Config,
) -> Result<()> {
    check_distinct(first, second)?;

    let dir = data_dir(&args, config);
    let compare = playback_config(config.playback.compare(), &args);
    let first_slot = CompareSlot::new(
        first,
        first_file.unwrap_or_else(|| first.snapshot_path(&dir)),
    );
    let second_slot = CompareSlot::new(
        second,
        second_file.unwrap_or_else(|| second.snapshot_path(&dir)),
    );

    if args.headless {
        let (a, b) = load_pair(&first_slot, &second_slot)?;
        let mut panels = Vec::with_capacity(2);
        for (slot, sequence) in [(first_slot, a), (second_slot, b)] {
            let mut panel = Panel::new(slot.algorithm, compare, ChartState::new());
            panel.set_sequence(sequence, Some(slot.path))?;
            panels.push(panel);
        }
        return run_headless(&mut panels);
    }

    let settings = VisualizerSettings {
        single: config.playback.single(),
        compare,
        data_dir: dir,
    };
    let mut state = VisualizerState::new(settings, first);
    state.on_compare_files(first_slot, second_slot);

    let mut app = VisualizerApp::new(state, config.ui.theme())?;
    app.run()
}
