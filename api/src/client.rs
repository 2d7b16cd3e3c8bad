use crate::espn::{EspnCompetitor, EspnEvent, ScoreboardResponse, score_text};
use crate::{Game, HomeAway, Scoreboard, TeamLine};
use log::debug;
use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const ESPN_MLB_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports/baseball/mlb";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MISSING_SCORE: &str = "0";

/// MLB scoreboard client backed by ESPN's public site API.
#[derive(Debug, Clone)]
pub struct MlbApi {
    client: Client,
    timeout: Duration,
    base_url: String,
    snapshot: Option<PathBuf>,
}

impl Default for MlbApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("mlbscores/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            timeout: DEFAULT_TIMEOUT,
            base_url: ESPN_MLB_SITE_V2.to_owned(),
            snapshot: None,
        }
    }
}

/// The two ways a scoreboard fetch can fail. Both are reported to the user
/// as a single line of text.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure, timeout, or a non-2xx status.
    Network(reqwest::Error, String),
    /// Anything else: unreadable snapshot, bad JSON, a required field missing.
    Unexpected(String),
}

impl ApiError {
    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::Network(_, url) => Some(url),
            ApiError::Unexpected(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, _) => write!(
                f,
                "Error fetching scores: Could not connect to the internet or the MLB data source. ({e})"
            ),
            ApiError::Unexpected(msg) => write!(f, "An unexpected error occurred: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl MlbApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host serving the same `/scoreboard` route.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, ..Self::default() }
    }

    /// Read the scoreboard from a saved ESPN-format JSON file instead of the network.
    pub fn with_snapshot(path: impl AsRef<Path>) -> Self {
        Self { snapshot: Some(path.as_ref().to_path_buf()), ..Self::default() }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn scoreboard_url(&self) -> String {
        format!("{}/scoreboard", self.base_url)
    }

    /// Fetch today's MLB scoreboard.
    pub async fn fetch_scoreboard(&self) -> ApiResult<Scoreboard> {
        if let Some(path) = &self.snapshot {
            debug!("reading scoreboard snapshot from {}", path.display());
            let content = std::fs::read_to_string(path).map_err(|e| {
                ApiError::Unexpected(format!("could not read {}: {e}", path.display()))
            })?;
            return parse_scoreboard(&content);
        }

        let url = self.scoreboard_url();
        let body = self.get_text(&url).await?;
        parse_scoreboard(&body)
    }

    async fn get_text(&self, url: &str) -> ApiResult<String> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let response = response
            .error_for_status()
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))
    }
}

/// Decode a scoreboard payload. Events are mapped lazily by `Scoreboard::games`.
pub fn parse_scoreboard(body: &str) -> ApiResult<Scoreboard> {
    let raw: ScoreboardResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Unexpected(format!("invalid scoreboard json: {e}")))?;
    let events = raw.events.unwrap_or_default();
    debug!("scoreboard has {} events", events.len());
    Ok(Scoreboard { events })
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

pub(crate) fn map_event(event: &EspnEvent) -> ApiResult<Game> {
    let label = event.label();

    // Only the first competition is used; doubleheaders arrive as separate events.
    let competition = event
        .competitions
        .as_deref()
        .and_then(|c| c.first())
        .ok_or_else(|| ApiError::Unexpected(format!("{label}: no competitions")))?;

    let status = competition
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.detail.clone())
        .ok_or_else(|| ApiError::Unexpected(format!("{label}: missing status.type.detail")))?;

    let competitors = competition
        .competitors
        .as_deref()
        .ok_or_else(|| ApiError::Unexpected(format!("{label}: missing competitors")))?;

    let home = find_side(competitors, HomeAway::Home, label)?;
    let away = find_side(competitors, HomeAway::Away, label)?;

    Ok(Game {
        status,
        away: map_team_line(away, label)?,
        home: map_team_line(home, label)?,
    })
}

/// First competitor tagged `side`. A competitor without `homeAway` reached
/// before the match is an error, not a skip.
fn find_side<'a>(
    competitors: &'a [EspnCompetitor],
    side: HomeAway,
    label: &str,
) -> ApiResult<&'a EspnCompetitor> {
    for c in competitors {
        let tag = c
            .home_away
            .as_deref()
            .ok_or_else(|| ApiError::Unexpected(format!("{label}: competitor without homeAway")))?;
        if HomeAway::parse(tag) == Some(side) {
            return Ok(c);
        }
    }
    Err(ApiError::Unexpected(format!("{label}: no {} competitor", side.label())))
}

fn map_team_line(c: &EspnCompetitor, label: &str) -> ApiResult<TeamLine> {
    let name = c
        .team
        .as_ref()
        .and_then(|t| t.display_name.clone())
        .ok_or_else(|| ApiError::Unexpected(format!("{label}: competitor without team.displayName")))?;

    let score = c
        .score
        .as_ref()
        .map(score_text)
        .unwrap_or_else(|| MISSING_SCORE.to_owned());

    Ok(TeamLine { name, score })
}
