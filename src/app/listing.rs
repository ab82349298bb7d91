use mpd_client::{
    Client,
    commands::Command,
    protocol::{Command as RawCommand, response::Frame},
    responses::TypedResponseError,
};

use super::App;
use crate::app::session::StatusMessage;

/// Hard cap on entries held for one directory. Listings longer than this
/// are silently truncated.
pub const MAX_ENTRIES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Track,
}

/// One row of a directory listing. Immutable once constructed and owned
/// exclusively by the session entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub uri: String,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn directory(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn track(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            kind: EntryKind::Track,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

/// `lsinfo` has no typed definition in `mpd_client`, so this implements
/// the command extension trait directly. An empty path lists the root.
#[derive(Debug, Clone)]
pub struct ListEntries {
    path: String,
}

impl ListEntries {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Command for ListEntries {
    type Response = Vec<DirectoryEntry>;

    fn command(&self) -> RawCommand {
        let command = RawCommand::new("lsinfo");
        if self.path.is_empty() {
            command
        } else {
            command.argument(self.path.as_str())
        }
    }

    fn response(self, frame: Frame) -> Result<Self::Response, TypedResponseError> {
        let mut entries = Vec::new();

        for (key, value) in frame {
            match &*key {
                "directory" => entries.push(DirectoryEntry::directory(value)),
                "file" => entries.push(DirectoryEntry::track(value)),
                // playlists and per-song metadata lines are not browsable
                _ => {}
            }
        }

        Ok(entries)
    }
}

/// Trait for maintaining the session's directory listing cache
pub trait DirectoryListing {
    async fn refresh_entries(&mut self, client: &Client);
    fn install_entries(&mut self, items: Vec<DirectoryEntry>);
}

impl DirectoryListing for App {
    /// Rebuild the entry list for `current_directory`. The stale set is
    /// released first; a failed query leaves the list empty and surfaces
    /// as an inline message, with no automatic retry.
    async fn refresh_entries(&mut self, client: &Client) {
        self.entries.clear();

        match client
            .command(ListEntries::new(self.current_directory.clone()))
            .await
        {
            Ok(items) => {
                self.install_entries(items);
                log::debug!(
                    "Listed {} entries under \"{}\"",
                    self.entries.len(),
                    self.current_directory
                );
            }
            Err(e) => {
                log::warn!("lsinfo failed for \"{}\": {}", self.current_directory, e);
                self.set_status(StatusMessage::error(format!("MPD error: {e}")));
            }
        }

        if self.selected_index >= self.entries.len() {
            self.selected_index = 0;
        }
    }

    /// Install a freshly queried entry set, truncating at the capacity cap
    /// and resetting the selection when it falls out of range.
    fn install_entries(&mut self, items: Vec<DirectoryEntry>) {
        self.entries.clear();

        for item in items {
            if self.entries.len() >= MAX_ENTRIES {
                break;
            }
            self.entries.push(item);
        }

        if self.selected_index >= self.entries.len() {
            self.selected_index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn install_truncates_at_capacity() {
        let mut app = app();
        let items: Vec<_> = (0..MAX_ENTRIES + 250)
            .map(|i| DirectoryEntry::track(format!("track-{i}.mp3")))
            .collect();

        app.install_entries(items);

        assert_eq!(app.entries.len(), MAX_ENTRIES);
        assert_eq!(app.entries[0].uri, "track-0.mp3");
        assert_eq!(app.entries[MAX_ENTRIES - 1].uri, format!("track-{}.mp3", MAX_ENTRIES - 1));
    }

    #[test]
    fn install_replaces_previous_entries_wholesale() {
        let mut app = app();
        app.install_entries(vec![
            DirectoryEntry::directory("old"),
            DirectoryEntry::track("old.mp3"),
        ]);
        app.install_entries(vec![DirectoryEntry::track("new.mp3")]);

        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.entries[0].uri, "new.mp3");
    }

    #[test]
    fn out_of_range_selection_resets_to_zero() {
        let mut app = app();
        app.install_entries(
            (0..10)
                .map(|i| DirectoryEntry::track(format!("{i}.mp3")))
                .collect(),
        );
        app.selected_index = 9;

        app.install_entries(vec![DirectoryEntry::track("only.mp3")]);

        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn empty_listing_leaves_selection_at_zero() {
        let mut app = app();
        app.selected_index = 4;

        app.install_entries(Vec::new());

        assert!(app.entries.is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn entry_kinds_classify_correctly() {
        assert!(DirectoryEntry::directory("Artist A").is_directory());
        assert!(!DirectoryEntry::track("song.mp3").is_directory());
    }
}
