//! Inspect subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use sortviz::inspect::{trace_lines, InspectReport};
use sortviz::theme::current_theme;
use sortviz::SnapshotSequence;

pub fn handle(file: &Path, json: bool, trace: bool) -> Result<()> {
    let sequence = SnapshotSequence::load(file)?;
    let report = InspectReport::from_sequence(&sequence);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        print_report(file, &report);
    }

    if trace {
        for line in trace_lines(&sequence) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn print_report(file: &Path, report: &InspectReport) {
    let theme = current_theme();
    println!("{}", theme.accent_text(&file.display().to_string()));
    let rows = [
        ("Frames", report.frames.to_string()),
        ("Array length", report.width.to_string()),
        (
            "Value range",
            format!("{}..={}", report.min_value, report.max_value),
        ),
        ("Changing steps", report.changing_steps.to_string()),
        ("Total changes", report.total_changes.to_string()),
        ("Max per step", report.max_changes.to_string()),
        ("Indices touched", report.touched.to_string()),
        (
            "Final frame",
            if report.sorted { "sorted" } else { "NOT sorted" }.to_string(),
        ),
    ];
    for (label, value) in rows {
        println!(
            "  {} {}",
            theme.secondary_text(&format!("{:<16}", label)),
            theme.primary_text(&value)
        );
    }
}
