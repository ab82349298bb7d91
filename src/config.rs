use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub mpd: MpdConfig,
    pub library: LibraryConfig,
    pub colors: ColorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct MpdConfig {
    /// Either `host:port` or a path to the MPD unix socket.
    pub address: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory to start browsing in, relative to the MPD music root.
    /// Empty means the root itself.
    pub starting_directory: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub border: String,
    pub border_title: String,
    pub text: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    pub append_to_file: bool,
    pub rotate_logs: bool,
    pub rotation_size_mb: u64,
    pub keep_log_files: usize,
    pub log_to_console: bool,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => dirs::config_dir()
                .map(|d| d.join("orpheus").join("config.toml"))
                .unwrap_or_else(|| PathBuf::from("config.toml")),
        };

        // First run: write a default config so the user has something to edit
        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let default_config = Config::default();
            let toml_string = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_string)?;

            eprintln!("Created default config file at: {}", config_path.display());

            return Ok(default_config);
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl ColorsConfig {
    /// Parse a hex color string like "#FF5500" into RGB values
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    fn color_or(hex: &str, fallback: ratatui::style::Color) -> ratatui::style::Color {
        Self::parse_hex(hex)
            .map(|(r, g, b)| ratatui::style::Color::Rgb(r, g, b))
            .unwrap_or(fallback)
    }

    pub fn border_color(&self) -> ratatui::style::Color {
        Self::color_or(&self.border, ratatui::style::Color::White)
    }

    pub fn border_title_color(&self) -> ratatui::style::Color {
        Self::color_or(&self.border_title, ratatui::style::Color::White)
    }

    pub fn text_color(&self) -> ratatui::style::Color {
        Self::color_or(&self.text, ratatui::style::Color::White)
    }

    pub fn message_color(&self) -> ratatui::style::Color {
        Self::color_or(&self.message, ratatui::style::Color::Yellow)
    }
}

impl Default for MpdConfig {
    fn default() -> Self {
        Self {
            address: "localhost:6600".to_string(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            starting_directory: String::new(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            border: "#FAE280".to_string(),
            border_title: "#FAE280".to_string(),
            text: "#FFFFFF".to_string(),
            message: "#FAE280".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            append_to_file: true,
            rotate_logs: false,
            rotation_size_mb: 10,
            keep_log_files: 3,
            log_to_console: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_full_rgb() {
        assert_eq!(ColorsConfig::parse_hex("#FF5500"), Some((255, 85, 0)));
        assert_eq!(ColorsConfig::parse_hex("00ff00"), Some((0, 255, 0)));
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert_eq!(ColorsConfig::parse_hex("#FFF"), None);
        assert_eq!(ColorsConfig::parse_hex("#GGGGGG"), None);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let rendered = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.mpd.address, "localhost:6600");
        assert!(parsed.library.starting_directory.is_empty());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("[mpd]\naddress = \"10.0.0.2:6600\"\n").unwrap();
        assert_eq!(parsed.mpd.address, "10.0.0.2:6600");
        assert!(!parsed.logging.enabled);
    }
}
