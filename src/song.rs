use mpd_client::{Client, client::CommandError, commands::SetBinaryLimit, responses::Song};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub file_path: PathBuf,
}

impl SongInfo {
    pub fn from_song(song: &Song) -> Self {
        let title = song
            .title()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown Title".to_string());
        let artist = song
            .artists()
            .first()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown Artist".to_string());
        let album = song
            .album()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown Album".to_string());

        let file_path = song.file_path().to_path_buf();

        Self {
            title,
            artist,
            album,
            file_path,
        }
    }
}

/// Raise the MPD binary response limit so cover art arrives in few chunks.
pub async fn set_max_art_size(client: &Client, size_bytes: usize) -> Result<(), CommandError> {
    client.command(SetBinaryLimit(size_bytes)).await
}
