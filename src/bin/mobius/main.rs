//! mobius: command-line driver for the Möbius strip analysis.
//!
//! # Logging
//!
//! Set `RUST_LOG` to control log output, or use `-v` / `-vv` / `-vvv`:
//! - `RUST_LOG=mobius=info` - Final measurements
//! - `RUST_LOG=mobius=debug` - Grid sizes, steps and quadrature rules
//!
//! # Example
//!
//! ```bash
//! mobius analyze --radius 2 --width 0.8 --resolution 200
//! mobius --format json convergence --resolutions 50,200,800
//! mobius export --resolution 100 --output strip.obj
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use mobius::math::QuadratureRule;
use mobius::operations::query::EdgeLengthStrategy;
use mobius::AnalysisParams;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{analyze, convergence, export};

/// mobius - Estimate the surface area and edge length of a Möbius strip.
#[derive(Parser)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute surface area and edge length
    Analyze {
        #[command(flatten)]
        shape: ShapeArgs,

        #[command(flatten)]
        numerics: NumericsArgs,
    },

    /// Repeat the analysis at increasing resolutions
    Convergence {
        /// Center-line radius R
        #[arg(long, default_value = "2.0")]
        radius: f64,

        /// Strip width w
        #[arg(long, default_value = "0.8")]
        width: f64,

        /// Comma-separated samples per axis
        #[arg(long, value_delimiter = ',', default_value = "50,200,800")]
        resolutions: Vec<usize>,

        #[command(flatten)]
        numerics: NumericsArgs,
    },

    /// Write the mesh and boundary curves as Wavefront OBJ
    Export {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Shape constants shared by the commands.
#[derive(Args, Clone, Copy)]
pub struct ShapeArgs {
    /// Center-line radius R
    #[arg(long, default_value = "2.0")]
    pub radius: f64,

    /// Strip width w
    #[arg(long, default_value = "0.8")]
    pub width: f64,

    /// Samples per parameter axis n
    #[arg(long, short = 'n', default_value = "200")]
    pub resolution: usize,
}

/// Numerical method selection.
#[derive(Args, Clone, Copy)]
pub struct NumericsArgs {
    /// Arc-length strategy for the boundary
    #[arg(long, default_value = "derivative")]
    pub edge_strategy: EdgeStrategyArg,

    /// Quadrature rule
    #[arg(long, default_value = "simpson")]
    pub quadrature: QuadratureArg,
}

impl NumericsArgs {
    pub fn analysis_params(self) -> AnalysisParams {
        AnalysisParams::default()
            .with_edge_strategy(match self.edge_strategy {
                EdgeStrategyArg::Derivative => EdgeLengthStrategy::Derivative,
                EdgeStrategyArg::Chordal => EdgeLengthStrategy::Chordal,
            })
            .with_quadrature(match self.quadrature {
                QuadratureArg::Simpson => QuadratureRule::Simpson,
                QuadratureArg::Trapezoid => QuadratureRule::Trapezoid,
            })
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EdgeStrategyArg {
    /// Integrate the finite-difference speed along the edge
    Derivative,
    /// Sum distances between consecutive edge samples
    Chordal,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QuadratureArg {
    /// Composite Simpson's rule
    Simpson,
    /// Composite trapezoidal rule
    Trapezoid,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mobius=info",
            2 => "mobius=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Analyze { shape, numerics } => analyze::run(*shape, *numerics, &cli),
        Commands::Convergence {
            radius,
            width,
            resolutions,
            numerics,
        } => convergence::run(*radius, *width, resolutions, *numerics, &cli),
        Commands::Export { shape, output } => export::run(*shape, output, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
