use mpd_client::{Client, client::CommandError, commands, responses::PlayState};

/// Playback actions issued against MPD
#[derive(Debug, Clone)]
pub enum MpdAction {
    TogglePlayPause,
    Next,
    Previous,
    /// Append a track uri to the queue and start playback.
    EnqueuePlay(String),
}

impl MpdAction {
    /// Execute the action on the MPD client, returning the confirmation
    /// text shown inline.
    pub async fn execute(&self, client: &Client) -> Result<String, CommandError> {
        match self {
            MpdAction::TogglePlayPause => {
                let status = client.command(commands::Status).await?;
                match status.state {
                    PlayState::Playing => {
                        client.command(commands::SetPause(true)).await?;
                        Ok("Paused".to_string())
                    }
                    // stopped and paused take the same action
                    _ => {
                        client.command(commands::Play::current()).await?;
                        Ok("Playing".to_string())
                    }
                }
            }
            MpdAction::Next => {
                client.command(commands::Next).await?;
                Ok("Skipped forward".to_string())
            }
            MpdAction::Previous => {
                client.command(commands::Previous).await?;
                Ok("Skipped back".to_string())
            }
            MpdAction::EnqueuePlay(uri) => {
                client.command(commands::Add::uri(uri.as_str())).await?;
                client.command(commands::Play::current()).await?;
                Ok(format!("Song added: {uri}"))
            }
        }
    }
}
