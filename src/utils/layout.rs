use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rect centered in `area`, sized as a percentage of it.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_popup_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = center_popup(area, 60, 50);
        assert!(popup.width <= 60);
        assert!(popup.height <= 20);
        assert!(popup.x >= 19 && popup.x <= 21);
        assert!(popup.y >= 9 && popup.y <= 11);
    }
}
