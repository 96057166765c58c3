#![deny(warnings)]

use anyhow::{Context, Result};
use clap::Parser;
use polyswap_core::pattern::filter::FilterConfig;
use polyswap_core::search::{SearchConfig, search_with_seed};
use tracing_subscriber::EnvFilter;

/// Enumerate polyrhythmic siteswaps for an arbitrary beat schedule.
#[derive(Debug, Parser)]
#[command(name = "polyswap", version, about = "Polyrhythmic siteswap generator")]
struct Cli {
    /// Number of balls in the pattern.
    #[arg(short, long)]
    balls: u8,

    /// Length of one full cycle in half-beat positions (must be even).
    #[arg(short, long)]
    period: usize,

    /// Comma-separated throw positions within the period, e.g. 0,1,5,6,9.
    #[arg(long, value_delimiter = ',', value_name = "POS,POS,...")]
    beats: Vec<usize>,

    /// Number of distinct patterns to look for.
    #[arg(short = 'n', long, default_value_t = 25)]
    count: usize,

    /// Most balls a single hand may throw at once.
    #[arg(long, default_value_t = 1, value_name = "N")]
    max_multiplicity: usize,

    /// Let generated patterns contain beats with no throw.
    #[arg(long)]
    allow_zeros: bool,

    /// Track hand-crossing parity across period wraps (star patterns).
    #[arg(long)]
    star: bool,

    /// Reject patterns containing a throw taller than this.
    #[arg(long, value_name = "HEIGHT")]
    max_height: Option<u32>,

    /// Reject multiplexes that merely hold a ball in place.
    #[arg(long)]
    no_trivial_multiplexes: bool,

    /// Reject patterns where two balls land in one hand at once.
    #[arg(long)]
    no_squeezes: bool,

    /// Seed for the sampling order; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log search progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SearchConfig {
        allow_zeros: cli.allow_zeros,
        max_multiplicity: cli.max_multiplicity,
        num_balls: cli.balls,
        beats: cli.beats,
        period: cli.period,
        star: cli.star,
        filters: FilterConfig {
            max_height: cli.max_height,
            reject_trivial_multiplexes: cli.no_trivial_multiplexes,
            reject_squeezes: cli.no_squeezes,
        },
        num_to_print: cli.count,
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "sampling order seed");

    let patterns = search_with_seed(&config, seed).context("invalid search configuration")?;
    if patterns.is_empty() {
        tracing::warn!("no valid patterns for this configuration");
    }
    for pattern in &patterns {
        println!("{pattern}");
    }
    Ok(())
}
