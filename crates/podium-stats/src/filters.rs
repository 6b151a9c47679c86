//! The filter selection shared by the chart builders.

use serde::{Deserialize, Serialize};

/// Current state of the dashboard controls.
///
/// `year` comes from the slider, `sport` from the dropdown (clearable,
/// so optional), and `team` from the last hover on the choropleth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFilters {
    /// Selected Olympic year.
    pub year: i32,
    /// Selected sport, or `None` for all sports.
    pub sport: Option<String>,
    /// Hovered team, or `None` when nothing is hovered.
    pub team: Option<String>,
}

impl ChartFilters {
    /// Filters for a year with no sport or team restriction.
    pub const fn year(year: i32) -> Self {
        Self {
            year,
            sport: None,
            team: None,
        }
    }

    /// Restrict to a sport.
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Restrict to a hovered team.
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Selected sport as a borrowed str.
    pub fn sport_deref(&self) -> Option<&str> {
        self.sport.as_deref()
    }

    /// Hovered team as a borrowed str.
    pub fn team_deref(&self) -> Option<&str> {
        self.team.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_filters() {
        let filters = ChartFilters::year(2012).with_sport("Swimming").with_team("France");
        assert_eq!(filters.year, 2012);
        assert_eq!(filters.sport_deref(), Some("Swimming"));
        assert_eq!(filters.team_deref(), Some("France"));
    }

    #[test]
    fn test_year_only_filters() {
        let filters = ChartFilters::year(1896);
        assert_eq!(filters.sport, None);
        assert_eq!(filters.team, None);
    }
}
