use std::fmt;

/// Square row-major matrix of transition rates, `n x n`, zero-initialised.
#[derive(Debug, Clone, PartialEq)]
pub struct RateMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl RateMatrix {
    pub fn zeros(n: usize) -> Self {
        Self { n, cells: vec![0.0; n * n] }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.n + col]
    }

    pub fn set(&mut self, row: usize, col: usize, rate: f64) {
        assert!(row < self.n && col < self.n, "cell ({}, {}) outside {n}x{n} matrix", row, col, n = self.n);
        self.cells[row * self.n + col] = rate;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks(0) panics; an empty matrix simply has no rows
        self.cells.chunks(self.n.max(1))
    }
}

/// One tab-joined line per row; absent rates print as the literal `0`.
impl fmt::Display for RateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                if *v == 0.0 {
                    f.write_str("0")?;
                } else {
                    write!(f, "{}", v)?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
