//! Counter/gauge component backing the E4M3 view.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use super::Component;
use crate::presentation::events::{self, EventResult};
use crate::presentation::widgets::Button;

/// Gauge units per counter step.
const GAUGE_STEP: f64 = 0.01;

/// Interactive counter display: readout, separator, gauge, and a
/// decrement button.
///
/// The counter is unbounded in both directions. Only the drawn gauge
/// ratio is clamped, because the gauge widget requires a ratio in
/// `[0.0, 1.0]`; the raw fraction stays available unclamped.
pub struct CounterComponent {
    value: i64,
    button: Button,
}

impl CounterComponent {
    /// Creates a fresh component with the counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0,
            button: Button::new("-1")
                .style(Style::new().fg(Color::White).bg(Color::Red))
                .focused(true),
        }
    }

    /// Current counter value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Raw gauge fraction, `value * 0.01`, unclamped.
    #[must_use]
    pub fn gauge_fraction(&self) -> f64 {
        self.value as f64 * GAUGE_STEP
    }

    /// Ratio handed to the gauge widget, clamped to its `[0, 1]` range.
    #[must_use]
    pub fn display_ratio(&self) -> f64 {
        self.gauge_fraction().clamp(0.0, 1.0)
    }

    fn decrement(&mut self) {
        self.value -= 1;
    }
}

impl Default for CounterComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CounterComponent {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if events::is_activate_event(&key) {
            self.decrement();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let [box_area, button_row] =
            Layout::vertical([Constraint::Length(5), Constraint::Length(3)]).areas(area);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(box_area);
        block.render(box_area, buf);

        let [readout_area, separator_area, gauge_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(format!("value = {}", self.value)).render(readout_area, buf);

        let separator = symbols::line::HORIZONTAL.repeat(separator_area.width as usize);
        Paragraph::new(Line::from(separator)).render(separator_area, buf);

        // The label reports the raw fraction even when the bar is pinned
        // at an end of its range.
        let label = format!("{:.0}%", self.gauge_fraction() * 100.0);
        Gauge::default()
            .ratio(self.display_ratio())
            .label(label)
            .gauge_style(Style::new().fg(Color::Red))
            .render(gauge_area, buf);

        let [button_area, _] =
            Layout::horizontal([Constraint::Length(self.button.width()), Constraint::Fill(1)])
                .areas(button_row);
        self.button.render(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn activate() -> KeyEvent {
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
    }

    fn buffer_text(component: &CounterComponent) -> String {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        component.render(area, &mut buf);
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn fresh_component_reads_zero() {
        let component = CounterComponent::new();
        assert_eq!(component.value(), 0);
        assert_eq!(component.gauge_fraction(), 0.0);
        assert!(buffer_text(&component).contains("value = 0"));
    }

    #[test]
    fn one_activation_reads_minus_one() {
        let mut component = CounterComponent::new();
        assert_eq!(component.handle_key(activate()), EventResult::Consumed);
        assert_eq!(component.value(), -1);
        assert_eq!(component.gauge_fraction(), -0.01);
        assert!(buffer_text(&component).contains("value = -1"));
    }

    #[test]
    fn hundred_activations_read_minus_hundred() {
        let mut component = CounterComponent::new();
        for _ in 0..100 {
            component.handle_key(activate());
        }
        assert_eq!(component.value(), -100);
        assert_eq!(component.gauge_fraction(), -1.0);
        assert!(buffer_text(&component).contains("value = -100"));
    }

    #[test]
    fn counter_has_no_floor() {
        let mut component = CounterComponent::new();
        for _ in 0..250 {
            component.handle_key(activate());
        }
        assert_eq!(component.value(), -250);
    }

    #[test]
    fn display_ratio_is_clamped_to_gauge_range() {
        let mut component = CounterComponent::new();
        assert_eq!(component.display_ratio(), 0.0);
        component.handle_key(activate());
        assert_eq!(component.gauge_fraction(), -0.01);
        assert_eq!(component.display_ratio(), 0.0);
    }

    #[test]
    fn space_also_activates_the_button() {
        let mut component = CounterComponent::new();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(component.handle_key(space), EventResult::Consumed);
        assert_eq!(component.value(), -1);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut component = CounterComponent::new();
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(component.handle_key(other), EventResult::Ignored);
        assert_eq!(component.value(), 0);
    }

    #[test]
    fn render_stacks_readout_separator_gauge_button() {
        let component = CounterComponent::new();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        component.render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .filter_map(|x| buf.cell((x, y)).map(ratatui::buffer::Cell::symbol))
                .collect()
        };

        assert!(row(0).starts_with('┌'));
        assert!(row(1).contains("value = 0"));
        assert!(row(2).contains("──"));
        assert!(row(3).contains("0%"));
        assert!(row(4).starts_with('└'));
        assert!(row(6).contains("-1"));
    }
}
