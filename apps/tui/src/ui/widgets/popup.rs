use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Share of the screen the fullscreen overlay covers.
const OVERLAY_WIDTH_PERCENT: u16 = 90;
const OVERLAY_HEIGHT_PERCENT: u16 = 85;

pub const CLOSE_LABEL: &str = "[x]";

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// Where the overlay is drawn for a given frame area. Mouse hit-testing uses
/// the same function, so clicks line up with what is on screen.
pub fn overlay_area(viewport: Rect) -> Rect {
    centered_rect(OVERLAY_WIDTH_PERCENT, OVERLAY_HEIGHT_PERCENT, viewport)
}

/// The close button sits on the overlay's top border, right-aligned.
pub fn close_button_area(overlay: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    if overlay.width < width + 2 {
        return Rect::new(overlay.x, overlay.y, 0, 0);
    }
    Rect::new(overlay.right() - width - 2, overlay.y, width, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn overlay_sits_inside_the_viewport() {
        let viewport = Rect::new(0, 0, 120, 40);
        let overlay = overlay_area(viewport);
        assert!(overlay.width < viewport.width);
        assert!(overlay.height < viewport.height);
        assert!(overlay.x > 0 && overlay.y > 0);
    }

    #[test]
    fn close_button_is_on_the_top_border() {
        let overlay = Rect::new(10, 5, 60, 20);
        let button = close_button_area(overlay);
        assert_eq!(button.y, overlay.y);
        assert_eq!(button.width, 3);
        assert!(overlay.contains(Position::new(button.x, button.y)));
        assert!(button.right() < overlay.right());
    }

    #[test]
    fn tiny_overlay_has_no_button() {
        let button = close_button_area(Rect::new(0, 0, 3, 3));
        assert!(button.is_empty());
    }
}
