use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use mpd_client::Client;

use super::App;
use crate::app::mpd_handler::MpdAction;
use crate::app::navigation::Navigation;

/// Trait for event handling
pub trait EventHandlers {
    async fn handle_crossterm_events(&mut self, client: &Client) -> color_eyre::Result<()>;
    async fn on_key_event(&mut self, key: KeyEvent, client: &Client) -> color_eyre::Result<()>;
    fn quit(&mut self);
}

impl EventHandlers for App {
    /// Reads the pending crossterm event and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self, client: &Client) -> color_eyre::Result<()> {
        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.on_key_event(key, client).await?;
            }
            Event::Mouse(_) => {}
            Event::Resize(_, _) => {}
            _ => {}
        }
        Ok(())
    }

    /// Routes one key press through the navigation state machine. The
    /// editing overlay is modal and captures everything while active.
    async fn on_key_event(&mut self, key: KeyEvent, client: &Client) -> color_eyre::Result<()> {
        // a fresh key press replaces whatever message was showing
        self.status_message = None;

        if self.editing_active {
            self.handle_edit_key(key.code);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Left => self.previous_tab(),
            KeyCode::Right => self.next_tab(),
            KeyCode::Char('p') => self.run_action(MpdAction::TogglePlayPause, client).await,
            KeyCode::Char('>') => self.run_action(MpdAction::Next, client).await,
            KeyCode::Char('<') => self.run_action(MpdAction::Previous, client).await,
            KeyCode::Up if self.browsing_active => self.select_previous(),
            KeyCode::Down if self.browsing_active => self.select_next(),
            KeyCode::Enter if self.browsing_active => {
                if let Some(action) = self.activate_selection() {
                    self.run_action(action, client).await;
                }
            }
            KeyCode::Char('u') if self.browsing_active => self.enter_parent_directory(),
            KeyCode::Char('e') if self.browsing_active => self.begin_editing(),
            _ => {}
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
