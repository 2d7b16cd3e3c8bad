pub mod client;
pub mod espn;

use client::{ApiResult, map_event};
use espn::EspnEvent;
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// Every event on the league scoreboard, in the order ESPN lists them.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    events: Vec<EspnEvent>,
}

impl Scoreboard {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Map events one at a time, so a malformed event only fails its own slot.
    pub fn games(&self) -> impl Iterator<Item = ApiResult<Game>> + '_ {
        self.events.iter().map(map_event)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub status: String, // status.type.detail, e.g. "Final", "Bot 7th"
    pub away: TeamLine,
    pub home: TeamLine,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) vs {} ({}) - Status: {}",
            self.away.name, self.away.score, self.home.name, self.home.score, self.status
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLine {
    pub name: String,  // "Boston Red Sox"
    pub score: String, // kept as ESPN sent it; "0" when missing
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(HomeAway::Home),
            "away" => Some(HomeAway::Away),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeAway::Home => "home",
            HomeAway::Away => "away",
        }
    }
}
