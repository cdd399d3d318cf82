use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use shamir_recover::{input::ShareTable, Modulus, SecretSharing};

#[derive(Parser)]
#[clap(name = "sss-recover")]
#[clap(version)]
#[clap(about = "Recover a Shamir secret from a JSON table of base-encoded shares.", long_about = None)]
struct Cli {
    /// Path to the JSON share table
    #[clap(env = "SSS_INPUT", default_value = "input.json")]
    input: PathBuf,
    /// Modulus of the prime field, in decimal
    #[clap(short, long, env = "SSS_MODULUS", default_value_t = Modulus::default())]
    modulus: Modulus,
    /// Overrides the threshold `k` declared by the share table
    #[clap(short = 'k', long, env = "SSS_THRESHOLD")]
    threshold: Option<usize>,
    /// Also prints the shares at every index in 1..=n, recomputed from the first k shares
    #[clap(long)]
    recover_shares: bool,
    /// Log verbosity: error, warn, info, debug or trace. Falls back to `RUST_LOG`
    #[clap(long, env = "LOG_LEVEL")]
    log_level: Option<Level>,
}

impl Cli {
    // `LOG_LEVEL` has priority over `RUST_LOG`
    fn log_level(&self) -> Level {
        self.log_level
            .or_else(|| std::env::var("RUST_LOG").ok()?.parse().ok())
            .unwrap_or(Level::WARN)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::from_level(cli.log_level())),
        )
        .init();

    let table = ShareTable::from_path(&cli.input)
        .with_context(|| format!("Failed to load share table {}", cli.input.display()))?;
    let points = table.points().context("Failed to decode shares")?;

    let threshold = cli.threshold.unwrap_or(table.k());
    let sss = SecretSharing::new(threshold, cli.modulus.clone())
        .context("Failed to set up the reconstruction")?;

    info!(
        n = table.n(),
        k = threshold,
        available = points.len(),
        modulus = %sss.modulus(),
        "recovering secret"
    );

    println!("Number of shares (n): {}", table.n());
    println!("Minimum shares required (k): {}", threshold);
    println!();
    println!("Decoded shares:");
    for point in &points {
        println!("Share {}: y = {}", point.x, point.y);
    }

    let secret = sss.recover(&points).context("Failed to recover the secret")?;
    println!();
    println!("Secret (c): {secret}");

    if cli.recover_shares {
        let shares = table
            .recover_shares(&sss, &points)
            .context("Failed to recover the shares")?;
        println!();
        println!("Recovered shares:");
        for share in &shares {
            println!("Share {}: y = {}", share.x, share.y);
        }
    }

    Ok(())
}
