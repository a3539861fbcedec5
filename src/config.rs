use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::infra::Settings;
use crate::state::PlayerId;

pub const SNAPSHOT_VAR: &str = "BLACKBETTY_SNAPSHOT";
pub const PLAYER_VAR: &str = "BLACKBETTY_PLAYER";
pub const MAP_VAR: &str = "BLACKBETTY_MAP";
pub const SEED_VAR: &str = "BLACKBETTY_SEED";
pub const ATTACK_MIN_VAR: &str = "BLACKBETTY_ATTACK_MIN";
pub const ATTACK_MAX_VAR: &str = "BLACKBETTY_ATTACK_MAX";
pub const BOARD_SIZE_VAR: &str = "BLACKBETTY_BOARD_SIZE";
pub const OBSERVER_VAR: &str = "BLACKBETTY_OBSERVER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(
                formatter,
                "{} environment variable is required, see README.md",
                key
            ),
            ConfigError::Invalid { key, value } => {
                write!(formatter, "{} has an invalid value {:?}", key, value)
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for one run of the command line driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub player: PlayerId,
    pub map_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub settings: Settings,
    pub draw_board: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let snapshot_path = lookup(SNAPSHOT_VAR)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(SNAPSHOT_VAR))?;
        let player = parse(&lookup, PLAYER_VAR)?
            .map(PlayerId)
            .ok_or(ConfigError::Missing(PLAYER_VAR))?;

        let defaults = Settings::default();
        let mut attack_range = (
            parse(&lookup, ATTACK_MIN_VAR)?.unwrap_or(defaults.attack_range.0),
            parse(&lookup, ATTACK_MAX_VAR)?.unwrap_or(defaults.attack_range.1),
        );
        if attack_range.0 > attack_range.1 {
            tracing::warn!(
                "{} ({}) > {} ({}). Falling back to defaults.",
                ATTACK_MIN_VAR,
                attack_range.0,
                ATTACK_MAX_VAR,
                attack_range.1
            );
            attack_range = defaults.attack_range;
        }

        let settings = Settings {
            board_size: parse(&lookup, BOARD_SIZE_VAR)?.unwrap_or(defaults.board_size),
            attack_range,
            ..defaults
        };

        Ok(Self {
            snapshot_path,
            player,
            map_path: lookup(MAP_VAR).map(PathBuf::from),
            seed: parse(&lookup, SEED_VAR)?,
            settings,
            draw_board: parse(&lookup, OBSERVER_VAR)?.unwrap_or(false),
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
