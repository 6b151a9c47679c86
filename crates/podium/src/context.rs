//! The immutable application context.

use podium_data::{DataSource, Result, summer_sports, summer_years};
use polars::prelude::DataFrame;

/// Everything the dashboard needs after startup: the loaded athlete
/// table and the control ranges derived from it.
///
/// Built once before the server starts and shared immutably (via `Arc`)
/// for the lifetime of the process; no handler mutates it.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    /// The athlete table, restricted to the working columns.
    pub table: DataFrame,
    /// Summer-season years, ascending; drives the year slider.
    pub years: Vec<i32>,
    /// Summer-season sports, sorted; drives the sport dropdown.
    pub sports: Vec<String>,
}

impl DashboardContext {
    /// Load the table from `source` and derive the control ranges.
    pub async fn load(source: &DataSource) -> Result<Self> {
        let table = podium_data::load(source).await?;
        Self::from_table(table)
    }

    /// Build a context from an already loaded table. Used by tests and
    /// anywhere the table comes from somewhere other than the CSV.
    pub fn from_table(table: DataFrame) -> Result<Self> {
        let years = summer_years(&table)?;
        let sports = summer_sports(&table)?;
        Ok(Self {
            table,
            years,
            sports,
        })
    }

    /// Initial slider position: the earliest Summer-season year.
    pub fn default_year(&self) -> Option<i32> {
        self.years.first().copied()
    }
}
