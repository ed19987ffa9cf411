use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// `UINT_MAX` of the simulator's C event counter.
pub const DEFAULT_MAX_EVENTS: u64 = 4_294_967_295;
pub const DEFAULT_SIMULATOR: &str = "GEMF";

/// Run settings as given by a `--config` JSON file and/or command-line flags.
///
/// Every field is optional here; `resolve` fills defaults and rejects missing inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrepSettings {
    pub contact_network: Option<PathBuf>,
    pub initial_states: Option<PathBuf>,
    pub rates: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub end_time: Option<f64>,
    pub max_events: Option<u64>,
    pub simulator: Option<String>,
}

impl PrepSettings {
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(f))
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Fields set in `flags` win over fields set here.
    pub fn overlay(self, flags: PrepSettings) -> Self {
        Self {
            contact_network: flags.contact_network.or(self.contact_network),
            initial_states: flags.initial_states.or(self.initial_states),
            rates: flags.rates.or(self.rates),
            output: flags.output.or(self.output),
            end_time: flags.end_time.or(self.end_time),
            max_events: flags.max_events.or(self.max_events),
            simulator: flags.simulator.or(self.simulator),
        }
    }

    pub fn resolve(self) -> anyhow::Result<PrepConfig> {
        Ok(PrepConfig {
            contact_network: self.contact_network.context("missing contact network (--contact-network)")?,
            initial_states: self.initial_states.context("missing initial states (--initial-states)")?,
            rates: self.rates.context("missing transition rates (--rates)")?,
            output: self.output.context("missing output directory (--output)")?,
            end_time: self.end_time.context("missing end time (--end-time)")?,
            max_events: self.max_events.unwrap_or(DEFAULT_MAX_EVENTS),
            simulator: self.simulator.unwrap_or_else(|| DEFAULT_SIMULATOR.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PrepConfig {
    pub contact_network: PathBuf,
    pub initial_states: PathBuf,
    pub rates: PathBuf,
    pub output: PathBuf,
    pub end_time: f64,
    pub max_events: u64,
    /// Simulator executable; reported to the user, not run.
    pub simulator: String,
}

impl PrepConfig {
    /// Expand `~` and make every path absolute against the current directory.
    pub fn normalize_paths(mut self) -> anyhow::Result<Self> {
        for p in [&mut self.contact_network, &mut self.initial_states, &mut self.rates, &mut self.output] {
            let expanded = expand_home(p);
            *p = std::path::absolute(&expanded)
                .with_context(|| format!("cannot resolve path {}", expanded.display()))?;
        }
        Ok(self)
    }

    pub fn check(&self) -> anyhow::Result<()> {
        for p in [&self.contact_network, &self.initial_states, &self.rates] {
            anyhow::ensure!(p.is_file(), "File not found: {}", p.display());
        }
        anyhow::ensure!(
            self.end_time.is_finite() && self.end_time > 0.0,
            "End time must be positive: {}",
            self.end_time
        );
        anyhow::ensure!(!self.output.exists(), "Output directory exists: {}", self.output.display());
        Ok(())
    }
}

fn expand_home(p: &Path) -> PathBuf {
    let Ok(rest) = p.strip_prefix("~") else {
        return p.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => p.to_path_buf(),
    }
}
