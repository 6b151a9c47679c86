//! Athlete counts by year and sex for the line chart.

use crate::error::{Result, StatsError};
use podium_data::SUMMER;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Athlete count for one (year, sex) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteYearCount {
    /// Olympic year.
    pub year: i32,
    /// Athlete sex, `F` or `M`.
    pub sex: String,
    /// Number of athlete-event rows in the group.
    pub count: u32,
}

/// Count Summer-season athletes grouped by (year, sex).
///
/// Unlike the other aggregates this spans all years; the selected year
/// only marks a position on the resulting chart. A hovered `team`
/// restricts the counts to that delegation.
pub fn athlete_counts(
    df: &DataFrame,
    sport: Option<&str>,
    team: Option<&str>,
) -> Result<Vec<AthleteYearCount>> {
    let mut lf = df
        .clone()
        .lazy()
        .filter(col("season").eq(lit(SUMMER)).and(col("sex").is_not_null()));
    if let Some(team) = team {
        lf = lf.filter(col("team").eq(lit(team)));
    }
    if let Some(sport) = sport {
        lf = lf.filter(col("sport").eq(lit(sport)));
    }

    let grouped = lf
        .group_by([col("year"), col("sex")])
        .agg([len().alias("count")])
        .sort(["year", "sex"], SortMultipleOptions::default())
        .collect()?;

    let years = grouped.column("year")?.i32()?;
    let sexes = grouped.column("sex")?.str()?;
    let counts = grouped.column("count")?.cast(&DataType::UInt32)?;
    let counts = counts.u32()?;

    let mut rows = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let year = years
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing year".to_string()))?;
        let sex = sexes
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing sex".to_string()))?;
        let count = counts
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing count".to_string()))?;

        rows.push(AthleteYearCount {
            year,
            sex: sex.to_string(),
            count,
        });
    }

    Ok(rows)
}
