//! PI-Puzzle-Helper - find digit sequences on the pieces of the Pi puzzle.
//!
//! Reads the rectangular digit block, cuts it into the puzzle's pieces and
//! prints either every piece or the pieces holding the requested sequences.

pub mod error;
mod render;
mod source;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;
use puzzle_core::{respond, GridBuilder, MatchScope, PartitionSpec};

use render::Format;

#[derive(Parser)]
#[command(name = "pi-puzzle-helper")]
#[command(about = "Locate digit sequences on the pieces of the Pi puzzle")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Options {
    /// Text file holding the rectangular digit block
    #[arg(long, env = "PI_PUZZLE_SOURCE", default_value = "puzzle.txt", global = true)]
    source: PathBuf,

    /// JSON layout file with x_offset, x_step, y_offset, y_step
    #[arg(long, env = "PI_PUZZLE_LAYOUT", global = true)]
    layout: Option<PathBuf>,

    /// Characters before the first vertical cut
    #[arg(long, global = true)]
    x_offset: Option<f64>,

    /// Characters between vertical cuts
    #[arg(long, global = true)]
    x_step: Option<f64>,

    /// Lines before the first horizontal cut
    #[arg(long, global = true)]
    y_offset: Option<f64>,

    /// Lines between horizontal cuts
    #[arg(long, global = true)]
    y_step: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Search every line of a piece, not only its first line
    #[arg(long, default_value = "false", global = true)]
    all_lines: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every piece of the puzzle
    Grid,
    /// Show the pieces containing comma-separated digit sequences
    Search {
        /// e.g. "314159, 2653"; an empty query shows every piece
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },
    /// Check version
    Version,
}

impl Options {
    /// Calibration, then layout file, then single-value flags.
    fn partition(&self) -> anyhow::Result<PartitionSpec> {
        let base = match &self.layout {
            Some(path) => source::load_layout(path)?,
            None => PartitionSpec::default(),
        };
        let spec = PartitionSpec {
            x_offset: self.x_offset.unwrap_or(base.x_offset),
            x_step: self.x_step.unwrap_or(base.x_step),
            y_offset: self.y_offset.unwrap_or(base.y_offset),
            y_step: self.y_step.unwrap_or(base.y_step),
        };
        Ok(spec.validated()?)
    }

    fn scope(&self) -> MatchScope {
        if self.all_lines {
            MatchScope::AllFragments
        } else {
            MatchScope::FirstFragment
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered output only.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let query = match &cli.command {
        Commands::Grid => String::new(),
        Commands::Search { query } => query.clone(),
        Commands::Version => {
            println!("pi-puzzle-helper {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    let spec = cli.options.partition()?;
    let builder = GridBuilder::new(spec);
    info!("Partition: {:?}", builder.spec());

    let lines = source::load_lines(&cli.options.source);
    let grid = builder.build(&lines);
    info!("Grid: {} rows x {} cols", grid.rows(), grid.cols());

    let response = respond(&grid, &query, cli.options.scope());
    print!("{}", render::render(&response, cli.options.format)?);

    Ok(())
}
