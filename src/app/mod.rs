pub use crate::app::main_loop::AppMainLoop;
pub use session::{App, MessageType, StatusMessage, Tab};

// Module declarations
pub mod artwork;
pub mod cli;
pub mod event_handlers;
pub mod listing;
pub mod logging;
pub mod main_loop;
pub mod mpd_handler;
pub mod mpd_updates;
pub mod navigation;
pub mod session;
pub mod terminal;
