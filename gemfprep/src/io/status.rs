use std::io::{Read, Write};

use crate::error::{Result, TranslateError};
use crate::io::tsv::read_records;
use crate::registry::Registry;

/// Initial state index per input row, in file order.
///
/// Rows are not reordered or checked for completeness against the network: the simulator
/// reads the n-th status line as node n, so the input must list nodes in declaration order.
#[derive(Debug, Clone)]
pub struct InitialStatus {
    pub states: Registry,
    pub status: Vec<usize>,
}

impl InitialStatus {
    /// Parse `node<TAB>state` rows, registering states as they first appear.
    pub fn read<R: Read>(input: R, nodes: &Registry) -> Result<Self> {
        let mut states = Registry::states();
        let mut status = Vec::new();

        for record in read_records(input)? {
            let [node, state] = record.exact::<2>("node<TAB>state")?;
            nodes.lookup(node).map_err(|_| TranslateError::UnknownNode {
                line: record.line,
                label: node.to_string(),
            })?;
            status.push(states.register(state));
        }

        if status.len() != nodes.len() {
            tracing::warn!(
                rows = status.len(),
                nodes = nodes.len(),
                "initial states file does not list every network node exactly once"
            );
        }
        tracing::debug!(rows = status.len(), states = states.len(), "initial states parsed");
        Ok(Self { states, status })
    }

    pub fn write_status<W: Write>(&self, mut out: W) -> Result<()> {
        for s in &self.status {
            writeln!(out, "{}", s)?;
        }
        out.flush()?;
        Ok(())
    }
}
