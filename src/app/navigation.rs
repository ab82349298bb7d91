use mpd_client::Client;

use super::App;
use crate::app::mpd_handler::MpdAction;
use crate::app::session::StatusMessage;
use crossterm::event::KeyCode;

/// Byte cap on the path edit buffer.
const INPUT_LIMIT: usize = 256;

/// Parent of a server-relative path: everything before the last separator,
/// the empty root when there is no separator, and nothing for the root
/// itself.
pub fn parent_directory(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    match path.rfind('/') {
        Some(idx) => Some(path[..idx].to_string()),
        None => Some(String::new()),
    }
}

/// Trait for executing playback actions and surfacing their outcome
pub trait Navigation {
    async fn run_action(&mut self, action: MpdAction, client: &Client);
}

impl Navigation for App {
    /// Execute a playback action. Both outcomes land in the inline status
    /// line; failures never propagate past the event loop.
    async fn run_action(&mut self, action: MpdAction, client: &Client) {
        match action.execute(client).await {
            Ok(confirmation) => self.set_status(StatusMessage::info(confirmation)),
            Err(e) => {
                log::warn!("MPD action failed: {e}");
                self.set_status(StatusMessage::error(format!("MPD error: {e}")));
            }
        }
    }
}

// Pure state-machine transitions. Everything here mutates only session
// state so it can be exercised without a server.
impl App {
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
        self.apply_tab_flags();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
        self.apply_tab_flags();
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
        }
    }

    /// Enter on the current entry: descend into a directory (scheduling a
    /// listing refresh), or hand back the enqueue request for a track.
    pub fn activate_selection(&mut self) -> Option<MpdAction> {
        let entry = self.entries.get(self.selected_index)?;

        if entry.is_directory() {
            self.current_directory = entry.uri.clone();
            self.selected_index = 0;
            self.pending_refresh = true;
            None
        } else {
            Some(MpdAction::EnqueuePlay(entry.uri.clone()))
        }
    }

    /// `u`: go up one directory. A no-op at the root.
    pub fn enter_parent_directory(&mut self) {
        if let Some(parent) = parent_directory(&self.current_directory) {
            self.current_directory = parent;
            self.selected_index = 0;
            self.pending_refresh = true;
        }
    }

    /// Open the path-editing overlay seeded with the current directory.
    pub fn begin_editing(&mut self) {
        self.input_buffer = self.current_directory.clone();
        self.input_cursor = self.input_buffer.chars().count();
        self.editing_active = true;
    }

    /// Key handling while the path-editing overlay is active.
    pub fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.current_directory = self.input_buffer.clone();
                self.selected_index = 0;
                self.pending_refresh = true;
                self.editing_active = false;
            }
            KeyCode::Esc => {
                self.input_buffer = self.current_directory.clone();
                self.input_cursor = self.input_buffer.chars().count();
                self.editing_active = false;
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if self.input_buffer.pop().is_some() {
                    self.input_cursor = self.input_cursor.saturating_sub(1);
                }
            }
            KeyCode::Char(c) if !c.is_control() && self.input_buffer.len() < INPUT_LIMIT => {
                self.input_buffer.push(c);
                self.input_cursor += 1;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::listing::{DirectoryEntry, DirectoryListing};
    use crate::app::session::Tab;
    use crate::config::Config;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn parent_of_nested_path_drops_last_component() {
        assert_eq!(parent_directory("a/b/c"), Some("a/b".to_string()));
    }

    #[test]
    fn parent_of_single_component_is_root() {
        assert_eq!(parent_directory("a"), Some(String::new()));
    }

    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent_directory(""), None);
    }

    #[test]
    fn four_rights_cycle_back_to_home() {
        let mut app = app();
        assert_eq!(app.current_tab, Tab::Home);
        for _ in 0..4 {
            app.next_tab();
        }
        assert_eq!(app.current_tab, Tab::Home);
    }

    #[test]
    fn one_left_from_home_lands_on_help() {
        let mut app = app();
        app.previous_tab();
        assert_eq!(app.current_tab, Tab::Help);
        assert!(app.help_active);
    }

    #[test]
    fn directory_tab_activates_browsing_and_leaving_clears_editing() {
        let mut app = app();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Directory);
        assert!(app.browsing_active);

        app.begin_editing();
        assert!(app.editing_active);

        app.next_tab();
        assert!(!app.browsing_active);
        assert!(!app.editing_active);
    }

    #[test]
    fn selection_moves_are_clamped() {
        let mut app = app();
        app.install_entries(vec![
            DirectoryEntry::track("a.mp3"),
            DirectoryEntry::track("b.mp3"),
        ]);

        app.select_previous();
        assert_eq!(app.selected_index, 0);

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn enter_on_directory_descends_and_schedules_refresh() {
        let mut app = app();
        app.install_entries(vec![
            DirectoryEntry::directory("Artist A"),
            DirectoryEntry::track("song.mp3"),
        ]);
        app.selected_index = 0;
        app.pending_refresh = false;

        let action = app.activate_selection();

        assert!(action.is_none());
        assert_eq!(app.current_directory, "Artist A");
        assert_eq!(app.selected_index, 0);
        assert!(app.pending_refresh);
    }

    #[test]
    fn enter_on_track_requests_enqueue_without_changing_directory() {
        let mut app = app();
        app.install_entries(vec![
            DirectoryEntry::directory("Artist A"),
            DirectoryEntry::track("song.mp3"),
        ]);
        app.selected_index = 1;
        app.pending_refresh = false;

        let action = app.activate_selection();

        match action {
            Some(MpdAction::EnqueuePlay(uri)) => assert_eq!(uri, "song.mp3"),
            other => panic!("expected enqueue action, got {other:?}"),
        }
        assert_eq!(app.current_directory, "");
        assert!(!app.pending_refresh);
    }

    #[test]
    fn enter_with_no_entries_does_nothing() {
        let mut app = app();
        app.pending_refresh = false;
        assert!(app.activate_selection().is_none());
        assert!(!app.pending_refresh);
    }

    #[test]
    fn going_up_from_nested_directory() {
        let mut app = app();
        app.current_directory = "a/b/c".to_string();
        app.selected_index = 3;

        app.enter_parent_directory();
        assert_eq!(app.current_directory, "a/b");
        assert_eq!(app.selected_index, 0);
        assert!(app.pending_refresh);

        app.enter_parent_directory();
        app.enter_parent_directory();
        assert_eq!(app.current_directory, "");

        // root: no-op
        app.pending_refresh = false;
        app.enter_parent_directory();
        assert_eq!(app.current_directory, "");
        assert!(!app.pending_refresh);
    }

    #[test]
    fn edit_commit_replaces_directory_and_exits() {
        let mut app = app();
        app.current_directory = "old".to_string();
        app.begin_editing();
        app.pending_refresh = false;

        for c in "/new".chars() {
            app.handle_edit_key(KeyCode::Char(c));
        }
        app.handle_edit_key(KeyCode::Enter);

        assert_eq!(app.current_directory, "old/new");
        assert!(!app.editing_active);
        assert!(app.pending_refresh);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn edit_escape_discards_changes() {
        let mut app = app();
        app.current_directory = "keep".to_string();
        app.begin_editing();

        app.handle_edit_key(KeyCode::Backspace);
        app.handle_edit_key(KeyCode::Char('x'));
        app.handle_edit_key(KeyCode::Esc);

        assert_eq!(app.current_directory, "keep");
        assert_eq!(app.input_buffer, "keep");
        assert_eq!(app.input_cursor, 4);
        assert!(!app.editing_active);
    }

    #[test]
    fn edit_buffer_is_bounded() {
        let mut app = app();
        app.begin_editing();
        for _ in 0..400 {
            app.handle_edit_key(KeyCode::Char('x'));
        }
        assert_eq!(app.input_buffer.len(), 256);
        assert_eq!(app.input_cursor, 256);
    }

    #[test]
    fn backspace_on_empty_buffer_is_harmless() {
        let mut app = app();
        app.begin_editing();
        app.handle_edit_key(KeyCode::Backspace);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_cursor, 0);
    }
}
