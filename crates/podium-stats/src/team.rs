//! Per-team participation stats for the choropleth.

use crate::error::{Result, StatsError};
use podium_data::SUMMER;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Participation stats for one team under the current filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Team (country/delegation) name.
    pub team: String,
    /// Number of athlete-event rows for the team.
    pub total_athletes: u32,
    /// Number of those rows with sex `F`.
    pub female_athletes: u32,
    /// `female_athletes / total_athletes * 100`, 0.0 when the total is 0.
    pub female_percentage: f64,
}

/// Compute per-team stats for one Summer-season year, optionally
/// restricted to a sport.
///
/// Rows come back sorted by team name, so downstream arg-max scans
/// resolve ties to the lexicographically smallest team. A filter
/// combination matching nothing yields an empty `Vec`.
pub fn team_stats(df: &DataFrame, year: i32, sport: Option<&str>) -> Result<Vec<TeamStats>> {
    let mut lf = df
        .clone()
        .lazy()
        .filter(
            col("season")
                .eq(lit(SUMMER))
                .and(col("year").eq(lit(year)))
                .and(col("team").is_not_null()),
        );
    if let Some(sport) = sport {
        lf = lf.filter(col("sport").eq(lit(sport)));
    }

    let grouped = lf
        .group_by([col("team")])
        .agg([
            len().alias("total_athletes"),
            col("sex").eq(lit("F")).sum().alias("female_athletes"),
        ])
        .with_column(
            when(col("total_athletes").gt(lit(0)))
                .then(
                    col("female_athletes").cast(DataType::Float64) * lit(100.0)
                        / col("total_athletes").cast(DataType::Float64),
                )
                .otherwise(lit(0.0))
                .alias("female_percentage"),
        )
        .sort(["team"], SortMultipleOptions::default())
        .collect()?;

    from_grouped(&grouped)
}

fn from_grouped(df: &DataFrame) -> Result<Vec<TeamStats>> {
    let teams = df.column("team")?.str()?;
    let totals = df.column("total_athletes")?.cast(&DataType::UInt32)?;
    let totals = totals.u32()?;
    let females = df.column("female_athletes")?.cast(&DataType::UInt32)?;
    let females = females.u32()?;
    let pcts = df.column("female_percentage")?.cast(&DataType::Float64)?;
    let pcts = pcts.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let team = teams
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing team".to_string()))?;
        let total_athletes = totals
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing total_athletes".to_string()))?;
        let female_athletes = females
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing female_athletes".to_string()))?;
        let female_percentage = pcts
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing female_percentage".to_string()))?;

        rows.push(TeamStats {
            team: team.to_string(),
            total_athletes,
            female_athletes,
            female_percentage,
        });
    }

    Ok(rows)
}

/// The teams the choropleth annotation calls out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamExtremes {
    /// Team with the most female athletes.
    pub most_female_athletes: TeamStats,
    /// Team with the highest female percentage.
    pub highest_female_percentage: TeamStats,
}

impl TeamExtremes {
    /// Scan a team-sorted aggregate for the two extreme teams.
    ///
    /// Returns `None` on an empty aggregate. Strict comparisons keep the
    /// first (lexicographically smallest) team on ties.
    pub fn from_stats(stats: &[TeamStats]) -> Option<Self> {
        let mut most = stats.first()?;
        let mut highest = most;

        for s in &stats[1..] {
            if s.female_athletes > most.female_athletes {
                most = s;
            }
            if s.female_percentage > highest.female_percentage {
                highest = s;
            }
        }

        Some(Self {
            most_female_athletes: most.clone(),
            highest_female_percentage: highest.clone(),
        })
    }
}
