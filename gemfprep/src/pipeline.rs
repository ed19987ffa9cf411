use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::config::PrepConfig;
use crate::io::network::ContactNetwork;
use crate::io::outdir::{write_label_map, GemfOutputs, NETWORK_FILE, OUT_FILE, STATUS_FILE};
use crate::io::rates::RateTable;
use crate::io::status::InitialStatus;
use crate::model::para::{write_para, SimulationSettings, TransitionMatrices};

/// What a finished run produced, for reporting.
#[derive(Debug, Clone)]
pub struct PrepSummary {
    pub output: PathBuf,
    pub nodes: usize,
    pub directed_edges: usize,
    pub status_rows: usize,
    pub states: usize,
    pub inducers: Vec<usize>,
}

fn open_input(path: &Path) -> anyhow::Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(BufReader::new(f))
}

/// Translate the three input files into a fresh GEMF input directory.
///
/// On error the partially written output directory is left behind and must be discarded.
pub fn prepare(cfg: &PrepConfig) -> anyhow::Result<PrepSummary> {
    let outputs = GemfOutputs::create(&cfg.output)?;
    info!(dir = %outputs.dir.display(), "output directory created");

    let GemfOutputs { dir, para, network, node2num, status, state2num, out } = outputs;
    drop(out);

    let net = ContactNetwork::read(open_input(&cfg.contact_network)?)
        .with_context(|| format!("Invalid contact network file: {}", cfg.contact_network.display()))?;
    let directed_edges = net.write_edges(network)?;
    write_label_map(node2num, &net.nodes)?;
    info!(nodes = net.nodes.len(), directed_edges, "network translated");

    let init = InitialStatus::read(open_input(&cfg.initial_states)?, &net.nodes)
        .with_context(|| format!("Invalid initial states file: {}", cfg.initial_states.display()))?;
    init.write_status(status)?;
    let InitialStatus { mut states, status: rows } = init;
    info!(rows = rows.len(), states = states.len(), "initial states translated");

    let table = RateTable::read(open_input(&cfg.rates)?, &mut states)
        .with_context(|| format!("Invalid transition rates file: {}", cfg.rates.display()))?;
    write_label_map(state2num, &states)?;

    let matrices = TransitionMatrices::build(&table, states.len());
    let settings = SimulationSettings {
        max_time: cfg.end_time,
        max_events: cfg.max_events,
        data_file: NETWORK_FILE.to_string(),
        status_file: STATUS_FILE.to_string(),
        out_file: OUT_FILE.to_string(),
    };
    write_para(para, &matrices, Some(&settings))?;
    let inducers: Vec<usize> = matrices.inducers().collect();
    info!(states = states.len(), transitions = table.len(), inducers = ?inducers, "parameter file written");

    Ok(PrepSummary {
        output: dir,
        nodes: net.nodes.len(),
        directed_edges,
        status_rows: rows.len(),
        states: states.len(),
        inducers,
    })
}
