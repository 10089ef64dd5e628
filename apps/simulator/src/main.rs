//! Deal simulator: plays seeded Klaverjas deals with random legal moves.
//!
//! Every deal is checked against the legality rules as it is played and a
//! one-line JSON summary is written to stdout per deal. Logs go to stderr.

mod output;
mod simulator;

use std::time::Instant;

use clap::Parser;
use klaverjas_engine::domain::{RuleSet, Seat, Suit};
use klaverjas_engine::telemetry::init_tracing;
use klaverjas_engine::DealConfig;
use output::SummaryWriter;
use simulator::Simulator;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "deal-simulator")]
#[command(about = "Plays seeded Klaverjas deals with random legal moves")]
struct Args {
    /// Number of deals to simulate
    #[arg(short, long, default_value = "1")]
    deals: u32,

    /// Base seed; every deal and seat seed is derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Rule set (ROTTERDAM or AMSTERDAM)
    #[arg(long)]
    rules: Option<RuleSet>,

    /// Trump suit code (C, H, D, S). Drawn per deal when omitted
    #[arg(long)]
    trump: Option<Suit>,

    /// Seat that leads the first trick
    #[arg(long)]
    bidder: Option<Seat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(if args.verbose { "debug" } else { "warn" }, args.json);

    // KLAVERJAS_* variables fill in whatever the command line leaves out
    let mut config = DealConfig::from_env()?;
    if let Some(rules) = args.rules {
        config.rules = rules;
    }
    if let Some(bidder) = args.bidder {
        config.bidder = bidder;
    }
    if args.trump.is_some() {
        config.trump = args.trump;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!(base_seed, rules = %config.rules, deals = args.deals, "Starting deal simulator");

    let simulator = Simulator::new(base_seed, config);
    let mut writer = SummaryWriter::new(std::io::stdout().lock());
    let start = Instant::now();
    let mut errors = 0u32;

    for deal_no in 0..args.deals {
        match simulator.run_deal(deal_no) {
            Ok(summary) => writer.write(&summary)?,
            Err(e) => {
                errors += 1;
                warn!(deal_no, error = %e, code = %e.code(), "Deal failed");
            }
        }
    }
    writer.flush()?;

    info!(
        completed = args.deals - errors,
        errors,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Simulation finished"
    );
    if errors > 0 {
        return Err(format!("{errors} of {} deals failed", args.deals).into());
    }
    Ok(())
}
