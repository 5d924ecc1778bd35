//! Game of Life CLI - Run a simulation in the terminal.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use conway_life::{
    compute::Simulator,
    render::{TerminalDisplay, ThreadSleep},
    schema::SimulationConfig,
};

#[derive(Parser, Debug)]
#[command(name = "conway-life")]
#[command(about = "Run Conway's Game of Life in the terminal")]
struct Args {
    /// Width and height of the square board [default: 25]
    #[arg(short = 'b', long = "board_size")]
    board_size: Option<usize>,

    /// Number of generations to simulate [default: 100]
    #[arg(short = 'g', long = "generations")]
    generations: Option<u64>,

    /// Fraction of the board populated at start, 0.0-1.0 [default: 0.4]
    #[arg(short = 's', long = "saturation")]
    saturation: Option<f64>,

    /// Seconds paused between generations [default: 0.2]
    #[arg(short = 'f', long = "freq")]
    freq: Option<f64>,

    /// Seed for the random initial board
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; command line flags override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print an example configuration and exit
    #[arg(long)]
    example: bool,

    /// Do not clear the terminal between frames
    #[arg(long)]
    no_clear: bool,
}

impl Args {
    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(saturation) = self.saturation {
            config.saturation = saturation;
        }
        if let Some(freq) = self.freq {
            config.frame_delay = freq;
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if args.example {
        print_example_config();
        return;
    }

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }),
        None => SimulationConfig::default(),
    };
    args.apply(&mut config);

    let mut simulator = Simulator::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    });

    let display = if args.no_clear {
        TerminalDisplay::stdout().without_clear()
    } else {
        TerminalDisplay::stdout()
    };

    match simulator.run(display, ThreadSleep) {
        Ok(summary) => info!(
            "Rendered {} frame(s), {} cells alive",
            summary.frames_rendered, summary.final_stats.live_cells
        ),
        Err(e) => {
            error!("Simulation aborted at generation {}", simulator.generation());
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_example_config() {
    match serde_json::to_string_pretty(&SimulationConfig::default()) {
        Ok(json) => {
            println!("Example configuration (config.json):");
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("Error serializing example config: {}", e);
            process::exit(1);
        }
    }
}
