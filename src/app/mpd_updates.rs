use mpd_client::{Client, commands};

use super::App;
use crate::app::session::StatusMessage;
use crate::song::SongInfo;

/// Trait for per-tick MPD state refresh
pub trait MpdUpdates {
    async fn run_updates(&mut self, client: &Client);
}

impl MpdUpdates for App {
    /// Refresh the now-playing, queue and status snapshots for this tick.
    /// A failed query degrades to an inline message; the loop keeps going.
    async fn run_updates(&mut self, client: &Client) {
        let result = tokio::try_join!(
            client.command(commands::CurrentSong),
            client.command(commands::Queue),
            client.command(commands::Status)
        );

        match result {
            Ok((current_song, queue, status)) => {
                self.current_song = current_song.map(|s| SongInfo::from_song(&s.song));
                self.queue = queue
                    .into_iter()
                    .map(|s| SongInfo::from_song(&s.song))
                    .collect();
                self.mpd_status = Some(status);
            }
            Err(e) => {
                log::warn!("MPD status refresh failed: {e}");
                self.mpd_status = None;
                self.set_status(StatusMessage::error(format!("MPD error: {e}")));
            }
        }
    }
}
