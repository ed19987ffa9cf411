use std::io::{Read, Write};

use crate::error::{Result, TranslateError};
use crate::io::tsv::read_records;
use crate::registry::Registry;

const NODE_SHAPE: &str = "NODE<TAB>label<TAB>attributes";
const EDGE_SHAPE: &str = "EDGE<TAB>u<TAB>v<TAB>attributes<TAB>d|u";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directionality {
    Directed,
    Undirected,
}

impl Directionality {
    fn parse(token: &str, line: u64) -> Result<Self> {
        match token {
            "d" => Ok(Directionality::Directed),
            "u" => Ok(Directionality::Undirected),
            other => Err(TranslateError::InvalidDirectionality { line, value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub src: usize,
    pub dst: usize,
    pub directionality: Directionality,
}

impl EdgeRecord {
    /// The directed edges this record stands for: one, or forward then reverse.
    pub fn directed(&self) -> impl Iterator<Item = (usize, usize)> {
        let reverse = match self.directionality {
            Directionality::Directed => None,
            Directionality::Undirected => Some((self.dst, self.src)),
        };
        std::iter::once((self.src, self.dst)).chain(reverse)
    }
}

/// A contact network relabelled to GEMF node numbers.
#[derive(Debug, Clone)]
pub struct ContactNetwork {
    pub nodes: Registry,
    pub edges: Vec<EdgeRecord>,
}

impl ContactNetwork {
    /// Parse `NODE`/`EDGE` rows. Nodes must be declared before any edge uses them.
    pub fn read<R: Read>(input: R) -> Result<Self> {
        let mut nodes = Registry::nodes();
        let mut edges = Vec::new();

        for record in read_records(input)? {
            match record.fields.first().map(String::as_str) {
                Some("NODE") => {
                    let [_, label, _attrs] = record.exact::<3>(NODE_SHAPE)?;
                    if nodes.contains(label) {
                        return Err(TranslateError::DuplicateNode {
                            line: record.line,
                            label: label.to_string(),
                        });
                    }
                    nodes.register(label);
                }
                Some("EDGE") => {
                    let [_, u, v, _attrs, d_or_u] = record.exact::<5>(EDGE_SHAPE)?;
                    let directionality = Directionality::parse(d_or_u, record.line)?;
                    let endpoint = |label: &str| {
                        nodes.lookup(label).map_err(|_| TranslateError::UnknownNode {
                            line: record.line,
                            label: label.to_string(),
                        })
                    };
                    let src = endpoint(u)?;
                    let dst = endpoint(v)?;
                    edges.push(EdgeRecord { src, dst, directionality });
                }
                _ => return Err(record.malformed("a NODE or EDGE row")),
            }
        }

        tracing::debug!(nodes = nodes.len(), edge_records = edges.len(), "contact network parsed");
        Ok(Self { nodes, edges })
    }

    pub fn directed_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().flat_map(EdgeRecord::directed)
    }

    /// Write `src<TAB>dst` per directed edge; returns the number of lines written.
    pub fn write_edges<W: Write>(&self, mut out: W) -> Result<usize> {
        let mut written = 0;
        for (src, dst) in self.directed_edges() {
            writeln!(out, "{}\t{}", src, dst)?;
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }
}
