use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::widgets::Footer;

/// Split an area into header, content and footer bands.
///
/// The header takes `header_height` lines, the footer its fixed height,
/// the content whatever is left.
pub fn create_standard_layout(area: Rect, header_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(Footer::HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Center a card of the given size inside `area`, clamping to fit.
pub fn center_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
