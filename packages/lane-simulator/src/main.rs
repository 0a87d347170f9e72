//! Lane simulator CLI - fast in-memory bowling game simulation.
//!
//! Drives complete games through the real scoring engine and reports
//! score distributions per rolling style.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::Simulator;
use tracing::info;
use types::{OutputFormat, RollStyle};

#[derive(Parser)]
#[command(name = "lane-simulator")]
#[command(about = "Fast in-memory bowling game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of lanes (players) per game
    #[arg(short, long, default_value = "4")]
    lanes: u8,

    /// Rolling style for every lane
    #[arg(long, default_value = "house")]
    style: RollStyle,

    /// Comma-separated style per lane (overrides --lanes and --style)
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["style", "lanes"])]
    styles: Option<Vec<RollStyle>>,

    /// Base seed (per-game seeds are derived from it)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let styles: Vec<RollStyle> = match args.styles {
        Some(ref styles) if !styles.is_empty() => styles.clone(),
        _ => vec![args.style; args.lanes as usize],
    };
    if styles.is_empty() {
        return Err("at least one lane is required".into());
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let style_names: Vec<String> = styles.iter().map(|s| s.name().to_string()).collect();

    if args.show_output {
        info!(
            games = args.games,
            lanes = styles.len(),
            base_seed,
            "Starting lane simulator"
        );
    }

    let mut writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let started = Instant::now();
    let mut score_sum: u64 = 0;
    let mut score_count: u64 = 0;
    let mut best_score: u16 = 0;
    let mut perfect_games: u32 = 0;

    for game_id in 0..args.games {
        let seed = base_seed.wrapping_add(u64::from(game_id));
        let mut sim = Simulator::new(seed);

        let game_started = Instant::now();
        let result = sim.run_game(&styles)?;
        let duration_ms = game_started.elapsed().as_secs_f64() * 1000.0;

        for &score in &result.final_scores {
            score_sum += u64::from(score);
            score_count += 1;
            best_score = best_score.max(score);
            if score == 300 {
                perfect_games += 1;
            }
        }

        let game_metrics = build_game_metrics(
            game_id,
            seed,
            &style_names,
            args.games,
            &result,
            duration_ms,
        );
        writer.write_game(&game_metrics)?;
    }

    let elapsed = started.elapsed().as_secs_f64();
    let (data_path, csv_path) = writer.output_paths();
    let data_path = data_path.cloned();
    let csv_path = csv_path.clone();
    writer.finish()?;

    let mean_score = if score_count == 0 {
        0.0
    } else {
        score_sum as f64 / score_count as f64
    };
    let games_per_sec = f64::from(args.games) / elapsed.max(f64::EPSILON);
    info!(
        games = args.games,
        games_per_sec,
        mean_score,
        best_score,
        perfect_games,
        "Simulation complete"
    );
    if args.show_output {
        if let Some(path) = data_path {
            info!(path = %path.display(), "Game records written");
        }
        info!(path = %csv_path.display(), "Summary written");
    }

    Ok(())
}
