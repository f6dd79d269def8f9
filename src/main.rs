//! # Coinrush Main Entry Point
//!
//! Parses the command line, sets up logging and the window, and hands over to
//! the scene manager.

use clap::Parser;
use coinrush::config::{ARENA_HEIGHT, ARENA_WIDTH};
use coinrush::{CoinRushError, CoinRushResult, InputHandler, SceneManager, SpawnConfig, SpawnCounts};
use log::info;
use macroquad::prelude::*;
use macroquad::window::Conf;
use std::path::PathBuf;

/// Command line arguments for Coinrush.
#[derive(Parser, Debug)]
#[command(name = "coinrush")]
#[command(about = "Collect coins, dodge spikes, beat the clock")]
#[command(version)]
struct Args {
    /// Random seed for entity placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of obstacles (with --spikes and --coins, skips the setup screen)
    #[arg(long)]
    obstacles: Option<u32>,

    /// Number of spikes
    #[arg(long)]
    spikes: Option<u32>,

    /// Number of coins
    #[arg(long)]
    coins: Option<u32>,

    /// JSON session config file (skips the setup screen)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Collect Coins Game".to_owned(),
        window_width: ARENA_WIDTH,
        window_height: ARENA_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> CoinRushResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Coinrush v{}", coinrush::VERSION);

    let (config, skip_setup) = resolve_config(&args)?;
    info!("using seed {}", config.seed);

    set_pc_assets_folder("assets");
    prevent_quit();

    let mut scenes = SceneManager::new(config, skip_setup, InputHandler::new()).await?;
    scenes.run().await
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> CoinRushResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| CoinRushError::InvalidState(format!("logging setup failed: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .try_init()
            .map_err(|e| CoinRushError::InvalidState(format!("logging setup failed: {}", e)))?;
    }

    Ok(())
}

/// Builds the session config from the arguments.
///
/// Returns the config and whether the setup screen can be skipped.
fn resolve_config(args: &Args) -> CoinRushResult<(SpawnConfig, bool)> {
    let from_file = args.config.is_some();
    let mut config = match &args.config {
        Some(path) => SpawnConfig::load_from_json_file(path)?,
        None => SpawnConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    } else if !from_file {
        config.seed = clock_seed();
    }

    let counts_given = match (args.obstacles, args.spikes, args.coins) {
        (Some(obstacles), Some(spikes), Some(coins)) => {
            config.counts = SpawnCounts::new(obstacles, spikes, coins);
            true
        }
        (None, None, None) => false,
        _ => {
            return Err(CoinRushError::InvalidConfig(
                "--obstacles, --spikes and --coins must be given together".to_string(),
            ))
        }
    };

    Ok((config, from_file || counts_given))
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("coinrush").chain(args.iter().copied()))
    }

    #[test]
    fn test_counts_skip_setup() {
        let args = parse(&["--seed", "7", "--obstacles", "1", "--spikes", "2", "--coins", "3"]);
        let (config, skip_setup) = resolve_config(&args).unwrap();
        assert!(skip_setup);
        assert_eq!(config.seed, 7);
        assert_eq!(config.counts, SpawnCounts::new(1, 2, 3));
    }

    #[test]
    fn test_no_counts_shows_setup() {
        let (_, skip_setup) = resolve_config(&parse(&["--seed", "7"])).unwrap();
        assert!(!skip_setup);
    }

    #[test]
    fn test_partial_counts_rejected() {
        let args = parse(&["--obstacles", "1", "--coins", "3"]);
        assert!(matches!(
            resolve_config(&args),
            Err(CoinRushError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_file_skips_setup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "seed": 31, "counts": {{ "obstacles": 2, "spikes": 2, "coins": 4 }} }}"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let (config, skip_setup) = resolve_config(&parse(&["--config", &path])).unwrap();
        assert!(skip_setup);
        assert_eq!(config.seed, 31);
        assert_eq!(config.counts.coins, 4);
    }
}
