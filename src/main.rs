use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use github_breakout::render::{render_card, GameData, ThemeKind};
use github_breakout::{resolve, Grid, LevelThresholds, SourceConfig, SynthesisConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate breakout-style SVG cards from a GitHub contribution calendar",
    long_about = None
)]
struct Cli {
    /// GitHub username the cards are generated for
    username: String,

    /// Personal access token; enables fetching real contribution data
    token: Option<String>,

    /// Synthesis profile used when real data is unavailable
    #[arg(long, value_enum, default_value = "busy")]
    preset: Preset,

    /// Seed for the synthetic generator, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the SVG and JSON files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

/// Named synthesis profiles.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// Busy workdays with a July/August dip
    Busy,
    /// Moderate workdays, no seasonal dip
    Moderate,
    /// Quiet workdays, no seasonal dip
    Quiet,
}

impl Preset {
    fn source_config(self) -> (SynthesisConfig, LevelThresholds) {
        match self {
            Preset::Busy => (SynthesisConfig::default(), LevelThresholds::default()),
            Preset::Moderate => (SynthesisConfig::moderate(), LevelThresholds::compact()),
            Preset::Quiet => (SynthesisConfig::quiet(), LevelThresholds::compact()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let (synthesis, thresholds) = cli.preset.source_config();
    let config = SourceConfig {
        synthesis,
        thresholds,
        seed: cli.seed,
        endpoint: None,
    };

    log::info!("generating breakout cards for {}", cli.username);
    let data = resolve(&cli.username, cli.token.as_deref(), &config).await?;

    let series = data.series();
    let grid = Grid::from_series(series);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    for kind in [ThemeKind::Light, ThemeKind::Dark] {
        let svg = render_card(&cli.username, &grid, kind.palette());
        let path = cli
            .out_dir
            .join(format!("github-breakout-{}.svg", kind.as_str()));
        fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    let game_data = GameData::build(&cli.username, series, &grid);
    let json = game_data
        .to_json()
        .context("Failed to serialize game data")?;
    let json_path = cli.out_dir.join("github-breakout-data.json");
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    log::info!("wrote {}", json_path.display());

    log::info!(
        "{} total contributions across {} active days ({} data)",
        grid.total_contributions(),
        grid.active_days(),
        data.origin()
    );

    Ok(())
}
