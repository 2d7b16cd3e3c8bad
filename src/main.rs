mod scores;
mod settings;

use crate::settings::Settings;
use log::error;
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .target(env_logger::Target::Stderr)
        .try_init()?;

    let api = settings.api();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Fetch failures are already printed; the exit status stays 0 either way.
    if let Err(e) = scores::fetch_and_print_scores(&api, &mut out).await {
        error!("could not write scores to stdout: {e}");
    }

    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("mlbscores {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "mlbscores - today's MLB scoreboard in your terminal

Usage:
  mlbscores
  mlbscores --help
  mlbscores --version

Environment:
  MLBSCORES_API_BASE          Scoreboard base URL (default ESPN site v2 MLB)
  MLBSCORES_SCOREBOARD_JSON   Path to a local ESPN scoreboard JSON snapshot
  MLBSCORES_LOG               Log level on stderr (default off)"
}
