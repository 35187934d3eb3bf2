//! Format views: the capability contract and its implementers.

mod counter;
mod inspector;

pub use counter::CounterComponent;
pub use inspector::InspectorComponent;

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::domain::FloatFormat;
use crate::presentation::events::EventResult;

/// An owned, independently-stateful interactive component.
///
/// Every component owns its state exclusively; handling a key on one
/// component never affects another.
pub trait Component {
    /// Offers a key event to the component.
    fn handle_key(&mut self, key: KeyEvent) -> EventResult;

    /// Renders the component into `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A numeric-format view: builds interactive components and names itself.
pub trait FormatView {
    /// Constructs a new component.
    ///
    /// Every call returns a freshly-initialized component; no two calls
    /// share mutated state.
    fn create_component(&self) -> Box<dyn Component>;

    /// Constant, non-empty name of the format this view represents.
    fn format_string(&self) -> &'static str;
}

/// The E4M3 counter/gauge view.
pub struct E4M3View;

impl FormatView for E4M3View {
    fn create_component(&self) -> Box<dyn Component> {
        Box::new(CounterComponent::new())
    }

    fn format_string(&self) -> &'static str {
        FloatFormat::Fp8E4M3.name()
    }
}

/// A bit-pattern inspector view for one format.
pub struct InspectorView {
    format: FloatFormat,
}

impl InspectorView {
    /// Creates inspector view for `format`.
    #[must_use]
    pub const fn new(format: FloatFormat) -> Self {
        Self { format }
    }
}

impl FormatView for InspectorView {
    fn create_component(&self) -> Box<dyn Component> {
        Box::new(InspectorComponent::new(self.format))
    }

    fn format_string(&self) -> &'static str {
        self.format.name()
    }
}

/// Maps a format kind to its view implementation.
///
/// E4M3 keeps the counter/gauge view; every other member of the family
/// gets a bit-pattern inspector.
#[must_use]
pub fn view_for(format: FloatFormat) -> Box<dyn FormatView> {
    match format {
        FloatFormat::Fp8E4M3 => Box::new(E4M3View),
        other => Box::new(InspectorView::new(other)),
    }
}

/// All available views, one per format.
#[must_use]
pub fn all_views() -> Vec<Box<dyn FormatView>> {
    FloatFormat::all().into_iter().map(view_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn render(component: &dyn Component) -> String {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        component.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn format_strings_are_stable_and_non_empty() {
        for view in all_views() {
            assert!(!view.format_string().is_empty());
            assert_eq!(view.format_string(), view.format_string());
        }
    }

    #[test]
    fn one_view_per_format() {
        let names: Vec<&str> = all_views().iter().map(|v| v.format_string()).collect();
        assert_eq!(names.len(), FloatFormat::all().len());
        for format in FloatFormat::all() {
            assert!(names.contains(&format.name()));
        }
    }

    #[test]
    fn e4m3_dispatches_to_the_counter_view() {
        let view = view_for(FloatFormat::Fp8E4M3);
        assert_eq!(view.format_string(), "fp8e4m3");
        let component = view.create_component();
        assert!(render(component.as_ref()).contains("value = 0"));
    }

    #[test]
    fn other_formats_dispatch_to_the_inspector() {
        let view = view_for(FloatFormat::Bf16);
        assert_eq!(view.format_string(), "bf16");
        let component = view.create_component();
        assert!(render(component.as_ref()).contains("Hex Input"));
    }

    #[test]
    fn components_do_not_share_state() {
        let view = E4M3View;
        let mut first = view.create_component();
        let second = view.create_component();

        let activate = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        first.handle_key(activate);

        assert!(render(first.as_ref()).contains("value = -1"));
        assert!(render(second.as_ref()).contains("value = 0"));
    }
}
