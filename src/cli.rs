use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::controllers::navigation::Tab;

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Screen {
    Home,
    Scan,
    Rewards,
    Community,
    Profile,
}

impl From<Screen> for Tab {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Home => Tab::Home,
            Screen::Scan => Tab::Scan,
            Screen::Rewards => Tab::Rewards,
            Screen::Community => Tab::Community,
            Screen::Profile => Tab::Profile,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(about = concat!(env!("CARGO_CRATE_NAME"), " - toy collector companion for the terminal"))]
pub struct Flags {
    /// screen to open on start
    #[arg(default_value = None)]
    pub screen: Option<Screen>,

    /// config file, defaults to ~/.config/collectui/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// log file, defaults to the cache directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Flags {
    /// Parse from `std::env::args_os()`, exit on error.
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn start_tab(&self) -> Tab {
        self.screen.map(Tab::from).unwrap_or(Tab::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_screen_and_paths() {
        let flags = Flags::try_parse_from(["collectui", "community", "--config", "/tmp/c.json"]).unwrap();
        assert_eq!(flags.start_tab(), Tab::Community);
        assert_eq!(flags.config, Some(PathBuf::from("/tmp/c.json")));
        assert!(flags.log_file.is_none());
    }

    #[test]
    fn defaults_to_home() {
        let flags = Flags::try_parse_from(["collectui"]).unwrap();
        assert_eq!(flags.start_tab(), Tab::Home);
    }

    #[test]
    fn rejects_unknown_screen() {
        assert!(Flags::try_parse_from(["collectui", "game"]).is_err());
    }
}
