//! Prepare a GEMF input directory from a labelled contact network, initial states and
//! transition rates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};

use gemfprep::config::PrepSettings;
use gemfprep::pipeline::prepare;

#[derive(Parser, Debug)]
#[command(name = "gemf_prep", version)]
#[command(about = "Translate a labelled contact network and transition rates into GEMF input files")]
struct Args {
    /// JSON file with any of the settings below; flags override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Contact network (TSV)
    #[arg(short, long, value_name = "PATH")]
    contact_network: Option<PathBuf>,

    /// Initial states (TSV)
    #[arg(short = 's', long, value_name = "PATH")]
    initial_states: Option<PathBuf>,

    /// State transition rates (TSV)
    #[arg(short, long, value_name = "PATH")]
    rates: Option<PathBuf>,

    /// End time
    #[arg(short = 't', long)]
    end_time: Option<f64>,

    /// Output directory (must not exist)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Max number of events [default: 4294967295]
    #[arg(long)]
    max_events: Option<u64>,

    /// Path to GEMF executable [default: GEMF]
    #[arg(long, env = "GEMF_PATH")]
    gemf_path: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let flags = PrepSettings {
        contact_network: args.contact_network,
        initial_states: args.initial_states,
        rates: args.rates,
        output: args.output,
        end_time: args.end_time,
        max_events: args.max_events,
        simulator: args.gemf_path,
    };
    let settings = match &args.config {
        Some(path) => PrepSettings::from_json_file(path)?.overlay(flags),
        None => flags,
    };
    debug!(settings = %serde_json::to_string(&settings)?, "settings");

    let cfg = settings.resolve()?.normalize_paths()?;
    cfg.check()?;

    let summary = prepare(&cfg)?;
    info!(
        nodes = summary.nodes,
        edges = summary.directed_edges,
        states = summary.states,
        "GEMF inputs ready"
    );
    info!(
        "run `{}` from {} to simulate",
        cfg.simulator,
        summary.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
