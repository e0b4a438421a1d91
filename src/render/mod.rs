//! Rendering components.
//!
//! The playback core talks to a [`Renderer`]; the terminal UI implements it
//! with [`ChartState`], which the [`BarChart`] widget draws.

mod chart;

pub use chart::{layout_bars, BarChart, BarSlot, ChartState};

use crate::highlight::HighlightState;

/// Something that can display one frame with its highlights.
///
/// Every call replaces whatever was shown before.
pub trait Renderer {
    fn render(&mut self, frame: &[u64], highlights: &HighlightState);

    /// Remove all content.
    fn clear(&mut self);
}
