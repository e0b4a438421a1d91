//! Terminal bar chart.
//!
//! Bars are drawn bottom-up with eighth-block characters, one color per
//! highlight category.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use super::Renderer;
use crate::highlight::{Category, HighlightState};
use crate::snapshot::Frame;
use crate::theme::Theme;

/// Partial block glyphs, indexed by eighths filled.
const BLOCKS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Last frame pushed by the playback driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartState {
    frame: Frame,
    highlights: HighlightState,
    /// Value mapped to full height; falls back to the frame maximum
    scale_max: Option<u64>,
    render_count: usize,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the vertical scale, typically to the sequence maximum so bars do
    /// not jump between frames.
    pub fn set_scale(&mut self, max: Option<u64>) {
        self.scale_max = max;
    }

    pub fn frame(&self) -> &[u64] {
        &self.frame
    }

    pub fn highlights(&self) -> &HighlightState {
        &self.highlights
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Number of render calls since creation.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Value drawn at full height.
    pub fn scale(&self) -> u64 {
        self.scale_max
            .or_else(|| self.frame.iter().copied().max())
            .unwrap_or(0)
    }

    fn category(&self, index: usize) -> Category {
        self.highlights.get(index).unwrap_or(Category::Baseline)
    }
}

impl Renderer for ChartState {
    fn render(&mut self, frame: &[u64], highlights: &HighlightState) {
        self.frame.clear();
        self.frame.extend_from_slice(frame);
        self.highlights = highlights.clone();
        self.render_count += 1;
    }

    fn clear(&mut self) {
        self.frame.clear();
        self.highlights = HighlightState::default();
    }
}

/// Horizontal placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSlot {
    /// Column offset from the left edge of the chart area
    pub x: u16,
    pub width: u16,
    /// Array index drawn in this slot
    pub index: usize,
}

/// Lay out `count` bars in `width` columns.
///
/// Bars share the width evenly and are centered. Wide bars (3+ columns) keep
/// a one-column gap. With more bars than columns, each column shows the bar
/// at its proportional index.
pub fn layout_bars(count: usize, width: u16) -> Vec<BarSlot> {
    if count == 0 || width == 0 {
        return Vec::new();
    }

    if count > width as usize {
        return (0..width)
            .map(|x| BarSlot {
                x,
                width: 1,
                index: x as usize * count / width as usize,
            })
            .collect();
    }

    let step = (width as usize / count) as u16;
    let bar_width = if step >= 3 { step - 1 } else { step };
    let offset = (width - step * count as u16) / 2;

    (0..count)
        .map(|index| BarSlot {
            x: offset + index as u16 * step,
            width: bar_width,
            index,
        })
        .collect()
}

/// Height of a bar in eighths of a row.
fn bar_eighths(value: u64, scale: u64, rows: u16) -> u64 {
    if scale == 0 || value == 0 {
        return 0;
    }
    let full = u128::from(rows) * 8;
    // Widened so values near u64::MAX cannot overflow; the quotient fits in u64
    let eighths = u128::from(value.min(scale)) * full / u128::from(scale);
    // Any non-zero value stays visible
    (eighths as u64).max(1)
}

/// Widget drawing a [`ChartState`].
pub struct BarChart<'a> {
    state: &'a ChartState,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> BarChart<'a> {
    pub fn new(state: &'a ChartState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for BarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if area.is_empty() {
            return;
        }

        if self.state.is_empty() {
            let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            Paragraph::new(Line::from("No data loaded"))
                .style(self.theme.text_secondary_style())
                .alignment(Alignment::Center)
                .render(row, buf);
            return;
        }

        let scale = self.state.scale();
        for slot in layout_bars(self.state.frame.len(), area.width) {
            let value = self.state.frame[slot.index];
            let color = self.theme.bar_color(self.state.category(slot.index));
            let eighths = bar_eighths(value, scale, area.height);

            for row in 0..area.height {
                let filled = eighths.saturating_sub(row as u64 * 8);
                if filled == 0 {
                    break;
                }
                let symbol = BLOCKS[filled.min(8) as usize];
                let y = area.y + area.height - 1 - row;
                for dx in 0..slot.width {
                    if let Some(cell) = buf.cell_mut((area.x + slot.x + dx, y)) {
                        cell.set_symbol(symbol).set_fg(color);
                    }
                }
            }
        }
    }
}
