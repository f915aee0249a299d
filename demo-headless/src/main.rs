use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wildfire_core::{History, SimulationConfig};

/// Forest fire history demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "wildfire-demo")]
#[command(about = "Forest fire cellular automaton demo", long_about = None)]
struct Args {
    /// JSON configuration file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells [default: 200]
    #[arg(long)]
    width: Option<i64>,

    /// Grid height in cells [default: 200]
    #[arg(long)]
    height: Option<i64>,

    /// Probability that a cell starts as a tree, in (0, 1] [default: 0.6]
    #[arg(short, long)]
    density: Option<f64>,

    /// Number of ticks to compute [default: 60]
    #[arg(short, long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Cap applied to --steps [default: 250]
    #[arg(long)]
    max_steps: Option<i64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print every frame as text ('.' empty, 'T' tree, '*' fire)
    #[arg(short, long, conflicts_with = "json")]
    ascii: bool,

    /// Print the burn summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Start from the config file (or defaults) and apply explicit flags
    fn resolve_config(&self) -> Result<SimulationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => SimulationConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.resolve_config()?;
    let params = config.params();
    if params.steps != config.steps {
        info!(
            "Requested {} steps, capped at {}",
            config.steps, config.max_steps
        );
    }

    let history = params.run()?;

    if args.json {
        print_json(&history)?;
    } else if args.ascii {
        print_frames(&history);
    } else {
        print_table(&history);
    }
    Ok(())
}

fn print_table(history: &History) {
    println!("=== Wildfire History ===\n");
    println!(
        "Grid: {}x{}, seed: {}",
        history.width(),
        history.height(),
        seed_label(history.seed())
    );
    if let Some((row, col)) = history.ignition() {
        println!("Ignition: row {row}, col {col}\n");
    } else {
        println!("Ignition: none (no trees)\n");
    }

    println!("Tick | Trees  | Burning | Empty");
    println!("-----|--------|---------|-------");
    for (tick, stats) in history.stats().iter().enumerate() {
        println!(
            "{:4} | {:6} | {:7} | {:6}",
            tick, stats.trees, stats.burning, stats.empty
        );
    }

    let summary = history.summary();
    println!("\n=== Simulation Complete ===");
    println!(
        "Burned: {}/{} trees ({:.1}%)",
        summary.burned_cells,
        summary.initial_trees,
        summary.burned_fraction * 100.0
    );
    println!(
        "Peak burning cells: {} at tick {}",
        summary.peak_burning, summary.peak_burning_tick
    );
    match summary.extinguished_at {
        Some(tick) => println!("Extinguished at tick {tick}"),
        None => println!("Still burning after tick {}", history.steps()),
    }
}

fn seed_label(seed: Option<u64>) -> String {
    seed.map_or_else(|| "-".to_string(), |seed| seed.to_string())
}

fn print_frames(history: &History) {
    for (tick, frame) in history.iter().enumerate() {
        println!("--- tick {tick} ---");
        print!("{}", frame.render_ascii());
    }
}

fn print_json(history: &History) -> Result<(), serde_json::Error> {
    let report = serde_json::json!({
        "width": history.width(),
        "height": history.height(),
        "seed": history.seed(),
        "ignition": history.ignition(),
        "frames": history.len(),
        "summary": history.summary(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
