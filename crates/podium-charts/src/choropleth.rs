//! Choropleth of female participation by team.

use crate::error::Result;
use crate::figure::{ChoroplethTrace, Figure, Layout, Trace, title_block};
use podium_stats::{ChartFilters, TeamExtremes, team_stats};
use polars::prelude::DataFrame;
use serde_json::json;

/// Build the choropleth for the current selection.
///
/// The map colors each team by its female percentage on a diverging
/// scale centered at 50%. It ignores `filters.team`: the map is the
/// hover source, so hover only feeds the other two charts. An empty
/// aggregate produces a map with no locations and no annotation.
pub fn choropleth_figure(df: &DataFrame, filters: &ChartFilters) -> Result<Figure> {
    let stats = team_stats(df, filters.year, filters.sport_deref())?;

    let trace = ChoroplethTrace {
        kind: "choropleth",
        locations: stats.iter().map(|s| s.team.clone()).collect(),
        locationmode: "country names",
        z: stats.iter().map(|s| s.female_percentage).collect(),
        zmin: 0.0,
        zmax: 100.0,
        zmid: 50.0,
        colorscale: "RdBu",
        customdata: stats.iter().map(|s| s.female_athletes).collect(),
        hovertemplate: "<b>%{location}</b><br>\
                        Female Percentage: %{z:.1f}%<br>\
                        Total Female Athletes: %{customdata}<extra></extra>",
        colorbar: json!({"title": "Female Percentage", "len": 0.5}),
    };

    let mut layout = Layout {
        title: Some(title_block(format!(
            "Percentage of Female Athletes by Team<br>at the Olympics in {} (Sport: {})",
            filters.year,
            filters.sport_deref().unwrap_or("All")
        ))),
        margin: Some(json!({"t": 30, "l": 10, "r": 10, "b": 10})),
        geo: Some(json!({
            "showcountries": true,
            "countrycolor": "lightgrey",
            "showcoastlines": true,
            "coastlinecolor": "lightgrey",
            "showocean": true,
            "oceancolor": "white",
            "bgcolor": "white",
            "projection_type": "equirectangular",
        })),
        ..Layout::default()
    };

    // Arg-max on an empty aggregate has no answer; skip the annotation.
    if let Some(extremes) = TeamExtremes::from_stats(&stats) {
        let pct = &extremes.highest_female_percentage;
        let most = &extremes.most_female_athletes;
        layout.annotations.push(json!({
            "text": format!(
                "Team with the highest <b>percentage</b> of female athletes: {} ({:.1}%)<br>\
                 Team with the highest <b>number</b> of female athletes: {} ({})",
                pct.team, pct.female_percentage, most.team, most.female_athletes
            ),
            "x": 0,
            "y": -0.05,
            "xref": "paper",
            "yref": "paper",
            "showarrow": false,
            "align": "left",
            "font": {"size": 14, "color": "black"},
        }));
    }

    Ok(Figure {
        data: vec![Trace::Choropleth(trace)],
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn fixture() -> DataFrame {
        df![
            "year" => [2012i32, 2012, 2012, 2012],
            "season" => ["Summer", "Summer", "Summer", "Summer"],
            "sport" => ["Swimming", "Swimming", "Fencing", "Fencing"],
            "team" => ["France", "France", "Japan", "Japan"],
            "sex" => ["F", "M", "F", "F"],
            "medal" => [Some("Gold"), None, None, None],
        ]
        .unwrap()
    }

    #[test]
    fn test_locations_and_colors_from_aggregate() {
        let figure = choropleth_figure(&fixture(), &ChartFilters::year(2012)).unwrap();
        let Trace::Choropleth(trace) = &figure.data[0] else {
            panic!("expected a choropleth trace");
        };

        assert_eq!(trace.locations, vec!["France", "Japan"]);
        assert_eq!(trace.z, vec![50.0, 100.0]);
        assert_eq!(trace.customdata, vec![1, 2]);
        assert_eq!(trace.zmid, 50.0);
    }

    #[test]
    fn test_annotation_names_extreme_teams() {
        let figure = choropleth_figure(&fixture(), &ChartFilters::year(2012)).unwrap();
        assert_eq!(figure.layout.annotations.len(), 1);

        let text = figure.layout.annotations[0]["text"].as_str().unwrap();
        assert!(text.contains("Japan"));
    }

    #[test]
    fn test_hovered_team_is_ignored() {
        let global = choropleth_figure(&fixture(), &ChartFilters::year(2012)).unwrap();
        let hovered =
            choropleth_figure(&fixture(), &ChartFilters::year(2012).with_team("Japan")).unwrap();

        assert_eq!(
            serde_json::to_value(&global).unwrap(),
            serde_json::to_value(&hovered).unwrap()
        );
    }

    #[test]
    fn test_empty_selection_renders_empty_map() {
        let figure = choropleth_figure(&fixture(), &ChartFilters::year(1896)).unwrap();
        let Trace::Choropleth(trace) = &figure.data[0] else {
            panic!("expected a choropleth trace");
        };

        assert!(trace.locations.is_empty());
        assert!(trace.z.is_empty());
        assert!(figure.layout.annotations.is_empty());
    }
}
