//! Medal counts by sex for the sunburst.

use crate::error::{Result, StatsError};
use podium_data::SUMMER;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Medal count for one (sex, medal) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalCount {
    /// Athlete sex, `F` or `M`.
    pub sex: String,
    /// Medal type: `Gold`, `Silver` or `Bronze`.
    pub medal: String,
    /// Number of medals in the group.
    pub count: u32,
}

/// Count medals grouped by (sex, medal) for one Summer-season year.
///
/// Rows without a medal are excluded, so the sunburst only ever shows
/// medalists. `team` and `sport` narrow the selection further.
pub fn medal_counts(
    df: &DataFrame,
    year: i32,
    sport: Option<&str>,
    team: Option<&str>,
) -> Result<Vec<MedalCount>> {
    let mut lf = df
        .clone()
        .lazy()
        .filter(
            col("season")
                .eq(lit(SUMMER))
                .and(col("year").eq(lit(year)))
                .and(col("medal").is_not_null())
                .and(col("sex").is_not_null()),
        );
    if let Some(team) = team {
        lf = lf.filter(col("team").eq(lit(team)));
    }
    if let Some(sport) = sport {
        lf = lf.filter(col("sport").eq(lit(sport)));
    }

    let grouped = lf
        .group_by([col("sex"), col("medal")])
        .agg([len().alias("count")])
        .sort(["sex", "medal"], SortMultipleOptions::default())
        .collect()?;

    let sexes = grouped.column("sex")?.str()?;
    let medals = grouped.column("medal")?.str()?;
    let counts = grouped.column("count")?.cast(&DataType::UInt32)?;
    let counts = counts.u32()?;

    let mut rows = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let sex = sexes
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing sex".to_string()))?;
        let medal = medals
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing medal".to_string()))?;
        let count = counts
            .get(i)
            .ok_or_else(|| StatsError::Extract("missing count".to_string()))?;

        rows.push(MedalCount {
            sex: sex.to_string(),
            medal: medal.to_string(),
            count,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DataFrame {
        df![
            "year" => [2012i32, 2012, 2012, 2012, 2012, 2016, 2012],
            "season" => ["Summer", "Summer", "Summer", "Summer", "Summer", "Summer", "Winter"],
            "sport" => ["Swimming", "Swimming", "Fencing", "Swimming", "Fencing", "Swimming", "Skiing"],
            "team" => ["France", "France", "Japan", "Japan", "France", "France", "France"],
            "sex" => ["F", "M", "F", "F", "M", "F", "F"],
            "medal" => [Some("Gold"), Some("Silver"), Some("Gold"), None, None, Some("Bronze"), Some("Gold")],
        ]
        .unwrap()
    }

    #[test]
    fn test_null_medals_excluded() {
        let counts = medal_counts(&fixture(), 2012, None, None).unwrap();
        let total: u32 = counts.iter().map(|c| c.count).sum();
        // Three medal rows in Summer 2012.
        assert_eq!(total, 3);
    }

    #[test]
    fn test_grouping_by_sex_and_medal() {
        let counts = medal_counts(&fixture(), 2012, None, None).unwrap();
        assert_eq!(
            counts,
            vec![
                MedalCount { sex: "F".to_string(), medal: "Gold".to_string(), count: 2 },
                MedalCount { sex: "M".to_string(), medal: "Silver".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_team_restriction() {
        let counts = medal_counts(&fixture(), 2012, None, Some("Japan")).unwrap();
        assert_eq!(
            counts,
            vec![MedalCount { sex: "F".to_string(), medal: "Gold".to_string(), count: 1 }]
        );
    }

    #[test]
    fn test_empty_year_yields_empty() {
        let counts = medal_counts(&fixture(), 1896, None, None).unwrap();
        assert!(counts.is_empty());
    }
}
