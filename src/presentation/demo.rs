//! Static layout demo.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Height of the demo row: one line of content plus borders.
pub const DEMO_HEIGHT: u16 = 3;

/// Three bordered cells in a row: `left`, a flexible `middle`, `right`.
///
/// The side cells fit their labels; the middle cell absorbs the rest of
/// the width.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDemo;

impl Widget for StaticDemo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, middle, right] = Layout::horizontal([
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(7),
        ])
        .areas(area);

        for (cell_area, label) in [(left, "left"), (middle, "middle"), (right, "right")] {
            Paragraph::new(label)
                .block(Block::default().borders(Borders::ALL))
                .render(cell_area, buf);
        }
    }
}
