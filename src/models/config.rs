use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::CollectError;
use crate::models::feed::DEFAULT_COMMENT_AUTHOR;
use crate::models::game::{GameRules, GAME_DURATION_SECS, WINNING_SCORE};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub scan: ScanConfig,
    /// Redraw interval while an animation is running
    pub frame_ms: u64,
    pub comment_author: String,
    /// Where the image picker looks for pictures
    pub image_dir: Option<PathBuf>,
    pub retain_comments: bool,
    pub log_file: Option<PathBuf>,
    /// File this config was read from, `None` when running on defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub duration_secs: u32,
    pub winning_score: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    pub duration_ms: u64,
    pub redirect_delay_ms: u64,
    pub sweep_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            scan: ScanConfig::default(),
            frame_ms: 50,
            comment_author: DEFAULT_COMMENT_AUTHOR.to_string(),
            image_dir: dirs::picture_dir(),
            retain_comments: false,
            log_file: None,
            source: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: GAME_DURATION_SECS,
            winning_score: WINNING_SCORE,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            redirect_delay_ms: 500,
            sweep_ms: 2000,
        }
    }
}

impl GameConfig {
    pub fn rules(&self) -> GameRules {
        GameRules {
            duration_secs: self.duration_secs,
            winning_score: self.winning_score,
        }
    }
}

impl ScanConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn sweep(&self) -> Duration {
        Duration::from_millis(self.sweep_ms)
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf, CollectError> {
        Ok(dirs::home_dir()
            .ok_or_else(|| CollectError::Config("Could not find home directory".to_string()))?
            .join(".config/collectui/config.json"))
    }

    /// Loads the config at `path`, or the default location when `path` is `None`.
    /// A missing file at the default location yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CollectError> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path()?, false),
        };

        // Logging starts after this; callers log `source`.
        if !explicit && !config_path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(&config_path)
            .with_context(|| format!("Failed to open config file at {:?}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config JSON at {:?}", config_path))?;

        config.validate()?;
        config.source = Some(config_path);
        Ok(config)
    }

    fn validate(&self) -> Result<(), CollectError> {
        if self.frame_ms == 0 {
            return Err(CollectError::Config("frame_ms must be greater than zero".to_string()));
        }
        if self.scan.sweep_ms == 0 {
            return Err(CollectError::Config("scan.sweep_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_the_game() {
        let config = Config::default();
        assert_eq!(config.game.rules(), GameRules::default());
        assert_eq!(config.scan.duration(), Duration::from_millis(2000));
        assert_eq!(config.scan.redirect_delay(), Duration::from_millis(500));
        assert_eq!(config.comment_author, "You");
        assert!(!config.retain_comments);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"game": {{"winning_score": 20}}, "retain_comments": true}}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.game.winning_score, 20);
        assert_eq!(config.game.duration_secs, 30);
        assert!(config.retain_comments);
        assert_eq!(config.frame_ms, 50);
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn defaults_have_no_source() {
        assert!(Config::default().source.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config JSON"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(Config::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn zero_frame_interval_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"frame_ms": 0}}"#).unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(CollectError::Config(_))
        ));
    }
}
