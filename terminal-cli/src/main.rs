mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, ValidatedConfig};
use gamblesim_execution::{Casino, CasinoRng, Entry, Flow, RandomSource};
use gamblesim_types::PlayerData;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// CLI flags (override the config file)
#[derive(Parser, Debug)]
#[command(name = "gamblesim", about = "Terminal gambling simulator", version)]
struct Args {
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for stderr output (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Coins the player starts with
    #[arg(long)]
    starting_coins: Option<u64>,

    /// Skip the ASCII banner on the main menu
    #[arg(long)]
    no_logo: bool,
}

impl Args {
    fn resolve(self) -> Result<ValidatedConfig> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(coins) = self.starting_coins {
            config.starting_coins = coins;
        }
        if self.no_logo {
            config.show_logo = false;
        }
        Ok(config.validate()?)
    }
}

fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn render(out: &mut impl Write, entries: Vec<Entry>) -> io::Result<()> {
    for entry in entries {
        match entry {
            Entry::Line(text) => writeln!(out, "{text}")?,
            Entry::Prompt(text) => write!(out, "{text}")?,
        }
    }
    out.flush()
}

fn run<R: RandomSource>(mut casino: Casino<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut flow = casino.start().context("failed to start session")?;
    render(&mut out, casino.drain_output()).context("failed to write output")?;

    let mut lines = stdin.lock().lines();
    while flow == Flow::Continue {
        let Some(line) = lines.next() else {
            writeln!(out).context("failed to write output")?;
            warn!(coins = casino.player().coins(), "input closed, leaving the casino");
            return Ok(());
        };
        let line = line.context("failed to read input")?;
        flow = casino.process_input(&line)?;
        render(&mut out, casino.drain_output()).context("failed to write output")?;
    }
    info!(coins = casino.player().coins(), "goodbye");
    Ok(())
}

fn main() -> Result<()> {
    let config = Args::parse().resolve()?;
    init_tracing(config.log_level);
    info!(
        starting_coins = config.starting_coins,
        seed = ?config.seed,
        "starting gambling simulator"
    );

    let player = PlayerData::with_coins(config.starting_coins);
    let rng = match config.seed {
        Some(seed) => CasinoRng::seeded(seed),
        None => CasinoRng::from_entropy(),
    };
    run(Casino::new(player, rng).with_logo(config.show_logo))
}
