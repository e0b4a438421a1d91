//! Algorithms subcommand handler

use anyhow::Result;

use sortviz::theme::current_theme;
use sortviz::Algorithm;

pub fn handle() -> Result<()> {
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!(
            "{:<15} {:<16} {:<13} {}",
            "ID", "NAME", "COMPLEXITY", "FILE"
        ))
    );
    for algorithm in Algorithm::ALL {
        println!(
            "{} {}",
            theme.accent_text(&format!("{:<15}", algorithm.id())),
            theme.primary_text(&format!(
                "{:<16} {:<13} {}",
                algorithm.display_name(),
                algorithm.complexity(),
                algorithm.output_file_name()
            ))
        );
    }
    Ok(())
}
