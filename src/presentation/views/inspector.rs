//! Bit-pattern inspector component.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Component;
use crate::domain::{DecodedValue, FloatFormat, decode};
use crate::presentation::events::EventResult;

/// Hex-input inspector: edits a bit pattern and shows its bit fields and
/// decoded value.
///
/// Bit colors follow the field split: sign red, exponent yellow,
/// mantissa blue.
pub struct InspectorComponent {
    format: FloatFormat,
    hex_input: String,
    decoded: Option<DecodedValue>,
}

impl InspectorComponent {
    /// Creates inspector for `format`, initialized to an all-zero pattern.
    #[must_use]
    pub fn new(format: FloatFormat) -> Self {
        let mut component = Self {
            format,
            hex_input: "0".to_string(),
            decoded: None,
        };
        component.reparse();
        component
    }

    /// Format under inspection.
    #[must_use]
    pub const fn format(&self) -> FloatFormat {
        self.format
    }

    /// Current hex input.
    #[must_use]
    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    /// Last successful decode, if the input is valid hex.
    #[must_use]
    pub fn decoded(&self) -> Option<&DecodedValue> {
        self.decoded.as_ref()
    }

    fn reparse(&mut self) {
        self.decoded = decode::parse_hex(self.format, &self.hex_input)
            .ok()
            .map(|bits| decode::decode(self.format, bits));
    }

    fn bit_line(&self) -> Line<'static> {
        let bits = self.decoded.as_ref().map_or_else(
            || vec![0; self.format.total_bits() as usize],
            DecodedValue::bit_vec,
        );
        let exponent_end = 1 + self.format.exponent_bits() as usize;

        let spans: Vec<Span> = bits
            .iter()
            .enumerate()
            .map(|(i, bit)| {
                let color = if i == 0 {
                    Color::Red
                } else if i < exponent_end {
                    Color::Yellow
                } else {
                    Color::Blue
                };
                Span::styled(bit.to_string(), Style::new().fg(color))
            })
            .collect();
        Line::from(spans)
    }
}

impl Component for InspectorComponent {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_hexdigit() => {
                if self.hex_input.len() < self.format.hex_digits() {
                    self.hex_input.push(c.to_ascii_lowercase());
                    self.reparse();
                }
                EventResult::Consumed
            }
            KeyCode::Backspace => {
                self.hex_input.pop();
                self.reparse();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let [input_area, bits_area, value_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(area);

        Paragraph::new(self.hex_input.as_str())
            .block(Block::default().title("Hex Input").borders(Borders::ALL))
            .style(Style::new().fg(Color::White))
            .render(input_area, buf);

        Paragraph::new(self.bit_line())
            .block(Block::default().title("Bits").borders(Borders::ALL))
            .render(bits_area, buf);

        let (value_text, value_style) = match &self.decoded {
            Some(decoded) => (decoded.display(), Style::new().fg(Color::Green)),
            None => ("Invalid hex input".to_string(), Style::new().fg(Color::Red)),
        };
        Paragraph::new(value_text)
            .block(
                Block::default()
                    .title(format!("Value ({})", self.format.name()))
                    .borders(Borders::ALL),
            )
            .style(value_style)
            .render(value_area, buf);
    }
}
