//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

use crate::highlight::Category;

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Error color
    pub error: Color,
    /// Warnings that leave the state unchanged
    pub warning: Color,
    /// Success color
    pub success: Color,
    /// Bars that never changed
    pub bar_baseline: Color,
    /// Bars that changed this step
    pub bar_active: Color,
    /// Bars that changed at an earlier step
    pub bar_settled: Color,
    /// Bars once the sort has finished
    pub bar_complete: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme: cyan bars, red for the current swap, blue once touched,
    /// green when sorted.
    pub fn dark() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::LightGreen,
            bar_baseline: Color::Cyan,
            bar_active: Color::Red,
            bar_settled: Color::Blue,
            bar_complete: Color::LightGreen,
        }
    }

    /// Classic terminal theme - gray text, yellow accents.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            warning: Color::LightYellow,
            success: Color::Green,
            bar_baseline: Color::Gray,
            bar_active: Color::Yellow,
            bar_settled: Color::Magenta,
            bar_complete: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            bar_baseline: Color::LightBlue,
            bar_active: Color::LightRed,
            bar_settled: Color::Blue,
            bar_complete: Color::LightGreen,
        }
    }

    /// Look up a theme by name (`dark`, `classic`, `ocean`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" | "default" => Some(Self::dark()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Bar color for a highlight category.
    pub fn bar_color(&self, category: Category) -> Color {
        match category {
            Category::Baseline => self.bar_baseline,
            Category::ActiveChange => self.bar_active,
            Category::Settled => self.bar_settled,
            Category::Complete => self.bar_complete,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Theme used when no config is available.
pub fn current_theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn dark_theme_bar_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.bar_color(Category::Baseline), Color::Cyan);
        assert_eq!(theme.bar_color(Category::ActiveChange), Color::Red);
        assert_eq!(theme.bar_color(Category::Settled), Color::Blue);
        assert_eq!(theme.bar_color(Category::Complete), Color::LightGreen);
    }

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Classic"), Some(Theme::classic()));
        assert_eq!(Theme::by_name("ocean"), Some(Theme::ocean()));
        assert_eq!(Theme::by_name("default"), Some(Theme::dark()));
        assert_eq!(Theme::by_name("neon"), None);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Cyan));
        assert_eq!(theme.error_style().fg, Some(Color::Red));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::dark();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[36m")); // Cyan
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let error = theme.error_text("oops");
        assert!(error.starts_with("\x1b[31m")); // Red
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::Gray), "\x1b[37m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
