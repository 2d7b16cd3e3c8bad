use log::LevelFilter;
use mlb_api::client::MlbApi;
use std::path::PathBuf;

pub const API_BASE_VAR: &str = "MLBSCORES_API_BASE";
pub const SNAPSHOT_VAR: &str = "MLBSCORES_SCOREBOARD_JSON";
pub const LOG_VAR: &str = "MLBSCORES_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base: Option<String>,
    pub snapshot: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self { api_base: None, snapshot: None, log_level: LevelFilter::Off }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = get(LOG_VAR)
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Off);

        Self {
            api_base: get(API_BASE_VAR),
            snapshot: get(SNAPSHOT_VAR).map(PathBuf::from),
            log_level,
        }
    }

    /// A snapshot path wins over a base URL override.
    pub fn api(&self) -> MlbApi {
        match (&self.snapshot, &self.api_base) {
            (Some(path), _) => MlbApi::with_snapshot(path),
            (None, Some(base)) => MlbApi::with_base_url(base.as_str()),
            (None, None) => MlbApi::new(),
        }
    }
}
