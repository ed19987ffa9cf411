use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::registry::Registry;

pub const PARA_FILE: &str = "para.txt";
pub const NETWORK_FILE: &str = "network.txt";
pub const NODE2NUM_FILE: &str = "node2num.txt";
pub const STATUS_FILE: &str = "status.txt";
pub const STATE2NUM_FILE: &str = "state2num.txt";
pub const OUT_FILE: &str = "output.txt";

/// Write handles for every file of a GEMF input directory, opened up front.
///
/// Each stage takes the handles it owns by value, so a file is closed as soon as
/// its producing stage drops it.
pub struct GemfOutputs {
    pub dir: PathBuf,
    pub para: BufWriter<File>,
    pub network: BufWriter<File>,
    pub node2num: BufWriter<File>,
    pub status: BufWriter<File>,
    pub state2num: BufWriter<File>,
    /// Left empty for the simulator to fill.
    pub out: File,
}

impl GemfOutputs {
    /// Create `dir` (which must not exist yet; parents are created) and open all files.
    pub fn create(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        if let Some(parent) = dir.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent of output dir failed (path={:?})", parent))?;
        }
        std::fs::create_dir(dir).with_context(|| format!("create output dir failed (path={:?})", dir))?;

        let open = |name: &str| -> anyhow::Result<File> {
            let path = dir.join(name);
            File::create(&path).with_context(|| format!("create output file failed (path={:?})", path))
        };

        Ok(Self {
            dir: dir.to_path_buf(),
            para: BufWriter::new(open(PARA_FILE)?),
            network: BufWriter::new(open(NETWORK_FILE)?),
            node2num: BufWriter::new(open(NODE2NUM_FILE)?),
            status: BufWriter::new(open(STATUS_FILE)?),
            state2num: BufWriter::new(open(STATE2NUM_FILE)?),
            out: open(OUT_FILE)?,
        })
    }
}

/// Serialise a registry as one JSON object `{"label": index, ...}` in index order.
pub fn write_label_map<W: Write>(mut out: W, registry: &Registry) -> anyhow::Result<()> {
    let map: serde_json::Map<String, serde_json::Value> = registry
        .iter()
        .map(|(label, idx)| (label.to_string(), serde_json::Value::from(idx)))
        .collect();
    serde_json::to_writer(&mut out, &map).context("serialise label map failed")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
