use std::time::Duration;

use mpd_client::Client;
use mpd_client::responses::PlayState;
use ratatui::DefaultTerminal;
use tokio::net::TcpStream;
#[cfg(unix)]
use tokio::net::UnixStream;

use super::App;
use crate::app::event_handlers::EventHandlers;
use crate::app::listing::DirectoryListing;
use crate::app::mpd_updates::MpdUpdates;
use crate::app::session::Tab;
use crate::app::{artwork, logging};

/// Bounded wait for one input poll (one tick, in milliseconds)
const INPUT_POLL_INTERVAL_MS: u64 = 500;

/// Maximum cover blob accepted from MPD
const MAX_ART_SIZE: usize = 5 * 1024 * 1024;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, terminal: DefaultTerminal) -> color_eyre::Result<()>
    where
        Self: Sized;
}

/// Connect to MPD via Unix socket or TCP based on address format
async fn connect_to_mpd(
    address: &str,
) -> color_eyre::Result<(Client, mpd_client::client::ConnectionEvents)> {
    let is_unix_socket = address.contains('/');

    if is_unix_socket {
        #[cfg(unix)]
        {
            let connection = UnixStream::connect(address).await?;
            Ok(Client::connect(connection).await?)
        }
        #[cfg(not(unix))]
        {
            Err(color_eyre::eyre::eyre!(
                "Unix sockets are not supported on this platform"
            ))
        }
    } else {
        let connection = TcpStream::connect(address).await?;
        Ok(Client::connect(connection).await?)
    }
}

impl AppMainLoop for App {
    /// Run the application's main loop: one tick per bounded input poll.
    /// All external calls complete inside the tick; recoverable failures
    /// surface as inline messages and never end the loop.
    async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        log::info!("Connecting to MPD at: {}", self.config.mpd.address);

        let (client, _connection_events) = connect_to_mpd(&self.config.mpd.address)
            .await
            .inspect_err(|e| {
                logging::log_mpd_connection(&self.config.mpd.address, false, Some(&e.to_string()));
            })?;

        logging::log_mpd_connection(&self.config.mpd.address, true, None);

        if let Err(e) = crate::song::set_max_art_size(&client, MAX_ART_SIZE).await {
            log::warn!("Failed to set MPD binary limit: {e}");
        }

        log::info!("Entering main loop");

        while self.running {
            // directory changes from the previous tick are serviced first
            if self.pending_refresh {
                self.pending_refresh = false;
                self.refresh_entries(&client).await;
            }

            self.run_updates(&client).await;

            let size = terminal.size()?;

            // footer animation advances only while playing
            if self.mpd_status.as_ref().map(|s| s.state) == Some(PlayState::Playing) {
                let span = size.width.saturating_sub(4).max(1);
                self.viz_pos = (self.viz_pos + 1) % span;
            }

            // cover art is refetched and redecoded on every tick it is
            // visible; nothing is carried over between ticks
            let art = if self.current_tab == Tab::Home {
                let target_w = usize::from(size.width.saturating_sub(6)).max(1);
                let max_h = usize::from(size.height.saturating_sub(14)).max(1);
                artwork::render_current_artwork(&client, target_w, max_h).await
            } else {
                None
            };

            terminal.draw(|frame| crate::ui::render(frame, &self, art.as_ref()))?;

            if crossterm::event::poll(Duration::from_millis(INPUT_POLL_INTERVAL_MS))? {
                self.handle_crossterm_events(&client).await?;
            }
        }

        log::info!("Exiting main loop");

        Ok(())
    }
}
