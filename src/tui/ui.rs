//! Layout helpers for the visualizer screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Area taking `percent_x` by `percent_y` of `area`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Fixed-size modal centered in `area`, shrunk to leave a 2-cell margin.
pub fn modal_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Main area, status line and footer.
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_creates_smaller_area() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        assert!(centered.width <= 55);
        assert!(centered.height <= 55);
        assert!(centered.x >= 20 && centered.x <= 30);
        assert!(centered.y >= 20 && centered.y <= 30);
    }

    #[test]
    fn modal_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(modal_rect(40, 10, area), Rect::new(20, 7, 40, 10));

        let small = Rect::new(0, 0, 20, 8);
        let modal = modal_rect(40, 10, small);
        assert_eq!(modal.width, 16);
        assert_eq!(modal.height, 4);
    }

    #[test]
    fn screen_layout_reserves_two_bottom_rows() {
        let [main, status, footer] = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 22);
        assert_eq!(status.y, 22);
        assert_eq!(footer.y, 23);
    }
}
