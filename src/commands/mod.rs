//! Subcommand handlers

pub mod algorithms;
pub mod compare;
pub mod completions;
pub mod config;
pub mod inspect;
pub mod play;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use sortviz::cli::PlaybackArgs;
use sortviz::playback::{Panel, PanelNotice, PlaybackConfig};
use sortviz::render::ChartState;
use sortviz::Config;

/// Apply command line overrides on top of a configured playback setting.
pub fn playback_config(base: PlaybackConfig, args: &PlaybackArgs) -> PlaybackConfig {
    PlaybackConfig::new(
        args.interval_ms
            .map(Duration::from_millis)
            .unwrap_or(base.interval),
        args.mode.unwrap_or(base.mode),
    )
}

/// Data directory from `--dir` or the config.
pub fn data_dir(args: &PlaybackArgs, config: &Config) -> PathBuf {
    args.dir.clone().unwrap_or_else(|| config.data.dir.clone())
}

/// Run panels to completion without a terminal UI, printing one line per
/// finished or cancelled session. Ctrl-C cancels every panel.
pub fn run_headless(panels: &mut [Panel<ChartState>]) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
    }

    for panel in panels.iter_mut() {
        panel.start()?;
    }

    let mut cancelled = false;
    loop {
        if !cancelled && interrupted.load(Ordering::SeqCst) {
            for panel in panels.iter_mut() {
                panel.request_cancel();
            }
            cancelled = true;
        }
        for panel in panels.iter_mut() {
            for notice in panel.poll() {
                println!("{}", notice_line(panel, &notice));
            }
        }
        if panels.iter().all(|p| p.is_terminated()) {
            return Ok(());
        }
        let wait = panels
            .iter()
            .filter_map(|p| p.driver().time_until_due())
            .min()
            .unwrap_or(HEADLESS_POLL)
            .min(HEADLESS_POLL);
        thread::sleep(wait);
    }
}

/// Longest sleep between polls of a headless run.
const HEADLESS_POLL: Duration = Duration::from_millis(5);

fn notice_line(panel: &Panel<ChartState>, notice: &PanelNotice) -> String {
    let id = panel.algorithm().id();
    match notice {
        PanelNotice::Completed(report) => {
            let frames = panel.sequence().map(|s| s.len()).unwrap_or(0);
            format!("{}: {} ({} frames)", id, report.summary(), frames)
        }
        PanelNotice::Cancelled => format!("{}: cancelled", id),
    }
}
