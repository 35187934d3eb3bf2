//! Button widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A bordered, focusable push button.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    style: Style,
    focused: bool,
}

impl Button {
    /// Creates button with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: Style::new().fg(Color::White).bg(Color::Red),
            focused: false,
        }
    }

    /// Sets base style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width the button needs, label plus borders.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.label.len() as u16 + 2
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            self.style.add_modifier(Modifier::BOLD)
        } else {
            self.style
        };

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.label.as_str()))
            .style(style)
            .centered()
            .render(inner, buf);
    }
}
