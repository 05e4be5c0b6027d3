use crate::engine::SalesSummary;
use crate::errors::{ReportError, SaleError};
use log::info;
use std::fmt;
use std::fmt::Formatter;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Where the report is written when no other location is requested.
pub const DEFAULT_OUTPUT_PATH: &str = "sales_results.txt";

/// The final sales report: the total, how long the run took, and every
/// diagnostic collected along the way.
#[derive(Debug)]
pub struct Report {
    total_cost: f64,
    elapsed: Duration,
    errors: Vec<SaleError>,
}

impl Report {
    pub fn new(total_cost: f64, errors: Vec<SaleError>, elapsed: Duration) -> Self {
        Self {
            total_cost,
            elapsed,
            errors,
        }
    }

    pub fn from_summary(summary: SalesSummary, elapsed: Duration) -> Self {
        Self::new(summary.total_cost, summary.errors, elapsed)
    }

    /// Writes the report to `path`, replacing anything already there.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();

        fs::write(path, self.to_string())
            .map_err(|err| ReportError::WriteError(path.to_path_buf(), err))?;

        info!("report written to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total cost sales: ${:.2}", self.total_cost)?;
        writeln!(
            f,
            "Execution Time: {:.6} seconds",
            self.elapsed.as_secs_f64()
        )?;

        if self.errors.is_empty() {
            return Ok(());
        }

        write!(f, "\nErrors Encountered:\n")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }

        Ok(())
    }
}
