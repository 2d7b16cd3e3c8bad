use log::{debug, warn};
use mlb_api::Scoreboard;
use mlb_api::client::{ApiError, ApiResult, MlbApi};
use std::io::{self, Write};

pub const FETCHING: &str = "Attempting to fetch live MLB scores...";
pub const NO_GAMES: &str = "No live games found at the moment.";
pub const HEADER: &str = "--- Current MLB Live Scores ---";
pub const FOOTER: &str = "-----------------------------";

/// Fetch the scoreboard once and print it. Fetch failures are printed as a
/// single line; only a failed write to `out` is returned as an error.
pub async fn fetch_and_print_scores<W: Write>(api: &MlbApi, out: &mut W) -> io::Result<()> {
    writeln!(out, "{FETCHING}")?;
    out.flush()?;

    let result = api.fetch_scoreboard().await;
    render(out, &result)
}

/// Games are printed as they map; the first bad event ends the listing with
/// its error line and no footer.
pub fn render<W: Write>(out: &mut W, result: &ApiResult<Scoreboard>) -> io::Result<()> {
    let board = match result {
        Ok(board) => board,
        Err(e) => return report_error(out, e),
    };

    if board.is_empty() {
        return writeln!(out, "{NO_GAMES}");
    }

    debug!("printing {} games", board.len());
    writeln!(out, "\n{HEADER}")?;
    for game in board.games() {
        match game {
            Ok(game) => writeln!(out, "{game}")?,
            Err(e) => return report_error(out, &e),
        }
    }
    writeln!(out, "{FOOTER}\n")
}

fn report_error<W: Write>(out: &mut W, e: &ApiError) -> io::Result<()> {
    match e.url() {
        Some(url) => warn!("scoreboard request to {url} failed"),
        None => warn!("scoreboard payload rejected"),
    }
    writeln!(out, "{e}")
}
