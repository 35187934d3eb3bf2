//! Main application host.

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tracing::{debug, info};

use crate::presentation::events::{self, EventResult};
use crate::presentation::views::{Component, FormatView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Hosts one format view's component inside the terminal event loop.
pub struct App {
    state: AppState,
    title: String,
    component: Box<dyn Component>,
}

impl App {
    /// Creates the host for `view`, building its component once.
    #[must_use]
    pub fn new(view: &dyn FormatView) -> Self {
        Self {
            state: AppState::Running,
            title: view.format_string().to_string(),
            component: view.create_component(),
        }
    }

    /// Runs the interactive loop until a quit key arrives.
    ///
    /// # Errors
    /// Returns error if the terminal backend fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let Some(event) = terminal_events.next().await else {
                break;
            };
            match self.handle_event(event?) {
                EventResult::Exit => self.state = AppState::Exiting,
                EventResult::Consumed => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                EventResult::Ignored => {}
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(_, _) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if events::is_quit_event(&key) {
            debug!("Quit key received");
            return EventResult::Exit;
        }
        self.component.handle_key(key)
    }

    fn render(&self, frame: &mut Frame) {
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::DarkGray));
        let inner = block.inner(frame.area());
        frame.render_widget(block, frame.area());
        self.component.render(inner, frame.buffer_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::E4M3View;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_key_exits() {
        let mut app = App::new(&E4M3View);
        assert_eq!(app.handle_event(press(KeyCode::Char('q'))), EventResult::Exit);
        assert_eq!(app.handle_event(press(KeyCode::Esc)), EventResult::Exit);
    }

    #[test]
    fn activation_is_consumed_by_the_component() {
        let mut app = App::new(&E4M3View);
        assert_eq!(
            app.handle_event(press(KeyCode::Enter)),
            EventResult::Consumed
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = App::new(&E4M3View);
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(app.handle_event(release), EventResult::Ignored);
    }

    #[test]
    fn resize_triggers_a_redraw() {
        let mut app = App::new(&E4M3View);
        assert_eq!(
            app.handle_event(Event::Resize(80, 24)),
            EventResult::Consumed
        );
    }

    #[test]
    fn title_matches_the_view_format_string() {
        let app = App::new(&E4M3View);
        assert_eq!(app.title, "fp8e4m3");
    }
}
