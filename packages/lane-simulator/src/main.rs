//! Lane simulator CLI - replays a roll list, or a seeded random game, through
//! the match flow service and prints the final scoreboard.

mod bowler;
mod output;

use backend::services::{parse_pins, parse_roster, MatchFlowService};
use backend::telemetry::{init_tracing, LogFormat};
use backend::{InMemoryMatchStore, MatchSettings};
use bowler::RandomBowler;
use clap::{Parser, ValueEnum};
use output::{render_json, render_text};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "lane-simulator")]
#[command(about = "Replay bowling rolls through the scoring engine")]
struct Args {
    /// Comma-separated player names, in lane order
    #[arg(short, long, default_value = "Player 1")]
    players: String,

    /// Comma-separated pin counts, in the order they are rolled on the lane
    #[arg(short, long, conflicts_with = "random")]
    rolls: Option<String>,

    /// Roll a random legal game for every player
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Scoreboard format
    #[arg(long, default_value = "text")]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let log_format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(if args.verbose { "debug" } else { "warn" }, log_format);

    let service = MatchFlowService::new(InMemoryMatchStore::new(), MatchSettings::from_env()?);
    let created = service.create_match(parse_roster(&args.players))?;
    info!(match_id = %created.match_id, players = created.player_ids.len(), "Lane opened");

    if args.random {
        let mut bowler = RandomBowler::new(args.seed);
        loop {
            let board = service.scoreboard(&created.match_id)?;
            if board.finished {
                break;
            }
            let pins = bowler.roll(board.max_pins);
            debug!(pins, max = board.max_pins, "Random roll");
            service.submit_roll(&created.match_id, i64::from(pins))?;
        }
    } else {
        let rolls = args.rolls.as_deref().unwrap_or_default();
        for (i, raw) in rolls.split(',').filter(|r| !r.trim().is_empty()).enumerate() {
            let submitted = parse_pins(raw)
                .and_then(|pins| service.submit_roll(&created.match_id, i64::from(pins)));
            if let Err(e) = submitted {
                eprintln!("roll #{} ({}) rejected: {} {}", i + 1, raw.trim(), e.code(), e.detail());
                return Err(Box::new(e));
            }
        }
    }

    let board = service.scoreboard(&created.match_id)?;
    let rendered = match args.format {
        Format::Text => render_text(&board),
        Format::Json => render_json(&board)?,
    };
    println!("{rendered}");
    Ok(())
}
