use mpd_client::responses::Status;

use crate::app::listing::DirectoryEntry;
use crate::config::Config;
use crate::song::SongInfo;

/// The four top-level screens, cycled with Left/Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Directory,
    Queue,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Directory, Tab::Queue, Tab::Help];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Directory => "Directory",
            Tab::Queue => "Queue",
            Tab::Help => "Help",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Directory,
            Tab::Directory => Tab::Queue,
            Tab::Queue => Tab::Help,
            Tab::Help => Tab::Home,
        }
    }

    pub fn previous(self) -> Tab {
        match self {
            Tab::Home => Tab::Help,
            Tab::Directory => Tab::Home,
            Tab::Queue => Tab::Directory,
            Tab::Help => Tab::Queue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Error,
}

/// Single-line message shown in the main display region.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageType,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageType::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageType::Error,
        }
    }
}

/// Mutable session state. Owned by the event loop for its entire run and
/// touched only from there.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub config: Config,

    // navigation state machine
    pub current_tab: Tab,
    pub browsing_active: bool,
    pub editing_active: bool,
    pub help_active: bool,

    // directory browsing
    pub current_directory: String,
    pub entries: Vec<DirectoryEntry>,
    pub selected_index: usize,
    pub pending_refresh: bool,

    // path-editing overlay scratch buffer
    pub input_buffer: String,
    pub input_cursor: usize,

    // per-tick MPD snapshots
    pub current_song: Option<SongInfo>,
    pub queue: Vec<SongInfo>,
    pub mpd_status: Option<Status>,

    pub status_message: Option<StatusMessage>,
    /// Column of the footer playback animation. Lives here rather than in
    /// a render-local static so one loop owns all mutable state.
    pub viz_pos: u16,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let starting_directory = config.library.starting_directory.clone();
        let input_cursor = starting_directory.chars().count();

        Self {
            running: false,
            current_tab: Tab::Home,
            browsing_active: false,
            editing_active: false,
            help_active: false,
            current_directory: starting_directory.clone(),
            entries: Vec::new(),
            selected_index: 0,
            // load the starting directory on the first tick
            pending_refresh: true,
            input_buffer: starting_directory,
            input_cursor,
            current_song: None,
            queue: Vec::new(),
            mpd_status: None,
            status_message: None,
            viz_pos: 0,
            config,
        }
    }

    /// Derive the screen flags from the active tab. Leaving the Directory
    /// tab always drops the editing overlay as well.
    pub fn apply_tab_flags(&mut self) {
        self.browsing_active = self.current_tab == Tab::Directory;
        self.help_active = self.current_tab == Tab::Help;
        if !self.browsing_active {
            self.editing_active = false;
        }
    }

    pub fn set_status(&mut self, message: StatusMessage) {
        self.status_message = Some(message);
    }
}
