use std::collections::BTreeMap;
use std::io::Write;

use crate::error::Result;
use crate::io::rates::RateTable;
use crate::math::matrix::RateMatrix;

/// Dense GEMF transition matrices over `n` states.
#[derive(Debug, Clone)]
pub struct TransitionMatrices {
    pub nodal: RateMatrix,
    /// One block per inducer state, ascending by inducer index.
    pub edged: BTreeMap<usize, RateMatrix>,
}

impl TransitionMatrices {
    /// `n_states` must cover every index in `table` (the full state registry size).
    pub fn build(table: &RateTable, n_states: usize) -> Self {
        let mut nodal = RateMatrix::zeros(n_states);
        let mut edged: BTreeMap<usize, RateMatrix> =
            table.inducers().map(|by| (by, RateMatrix::zeros(n_states))).collect();

        for ((by, from, to), rate) in table.iter() {
            let block = match by {
                None => &mut nodal,
                Some(by) => edged.entry(by).or_insert_with(|| RateMatrix::zeros(n_states)),
            };
            block.set(from, to, rate);
        }

        Self { nodal, edged }
    }

    pub fn inducers(&self) -> impl Iterator<Item = usize> + '_ {
        self.edged.keys().copied()
    }

    /// `[NODAL_TRAN_MATRIX]` and `[EDGED_TRAN_MATRIX]` sections.
    pub fn write_matrices<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "[NODAL_TRAN_MATRIX]")?;
        write!(out, "{}", self.nodal)?;
        writeln!(out)?;

        writeln!(out, "[EDGED_TRAN_MATRIX]")?;
        for block in self.edged.values() {
            write!(out, "{}", block)?;
            writeln!(out)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Run settings appended after the matrices in the parameter file.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub max_time: f64,
    pub max_events: u64,
    pub data_file: String,
    pub status_file: String,
    pub out_file: String,
}

impl SimulationSettings {
    /// With no inducers, `[INDUCER_LIST]` gets an empty value line, matching an empty
    /// `[EDGED_TRAN_MATRIX]` section.
    pub fn write_sections<W: Write>(&self, out: &mut W, inducers: &[usize]) -> Result<()> {
        let inducer_list = inducers.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ");
        let sections: [(&str, String); 11] = [
            ("STATUS_BEGIN", "0".to_string()),
            ("INDUCER_LIST", inducer_list),
            ("SIM_ROUNDS", "1".to_string()),
            ("INTERVAL_NUM", "1".to_string()),
            ("MAX_TIME", self.max_time.to_string()),
            ("MAX_EVENTS", self.max_events.to_string()),
            ("DIRECTED", "1".to_string()),
            ("SHOW_INDUCER", "1".to_string()),
            ("DATA_FILE", self.data_file.clone()),
            ("STATUS_FILE", self.status_file.clone()),
            ("OUT_FILE", self.out_file.clone()),
        ];
        for (header, value) in sections {
            writeln!(out, "[{}]", header)?;
            writeln!(out, "{}", value)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Write the complete parameter file; the settings tail is optional.
pub fn write_para<W: Write>(
    mut out: W,
    matrices: &TransitionMatrices,
    settings: Option<&SimulationSettings>,
) -> Result<()> {
    matrices.write_matrices(&mut out)?;
    if let Some(settings) = settings {
        let inducers: Vec<usize> = matrices.inducers().collect();
        settings.write_sections(&mut out, &inducers)?;
    }
    out.flush()?;
    Ok(())
}
