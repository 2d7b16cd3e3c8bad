/// ESPN API raw wire types — serde shapes for deserializing ESPN responses.
/// These map to our clean domain types in client.rs.
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>, // "New York Yankees at Boston Red Sox"
    pub competitions: Option<Vec<EspnCompetition>>,
}

impl EspnEvent {
    /// Short label for error messages: the event name, falling back to its id.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("<unnamed event>")
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub status: Option<EspnStatus>,
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    pub detail: Option<String>, // "Final", "Top 5th", "7/4 - 7:05 PM EDT"
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<Value>, // opaque; usually a string, `null` when not started
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// Render a score the way ESPN sent it: strings bare, anything else as JSON.
pub fn score_text(score: &Value) -> String {
    match score {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
