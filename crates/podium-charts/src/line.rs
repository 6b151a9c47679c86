//! Athlete counts by gender over time.

use crate::error::Result;
use crate::figure::{Figure, Layout, ScatterTrace, Trace, title_block};
use crate::theme::SEX_SERIES;
use podium_stats::{ChartFilters, athlete_counts};
use polars::prelude::DataFrame;
use serde_json::json;

/// Build the timeline for the current selection.
///
/// The chart spans every Summer-season year present after the sport and
/// hover filters; `filters.year` is only a dashed vertical marker. Both
/// series are always emitted, empty when a gender has no rows.
pub fn line_figure(df: &DataFrame, filters: &ChartFilters) -> Result<Figure> {
    let counts = athlete_counts(df, filters.sport_deref(), filters.team_deref())?;

    let mut data = Vec::with_capacity(SEX_SERIES.len());
    for (sex, label, color) in SEX_SERIES {
        let series: Vec<_> = counts.iter().filter(|c| c.sex == sex).collect();
        data.push(Trace::Scatter(ScatterTrace {
            kind: "scatter",
            x: series.iter().map(|c| c.year).collect(),
            y: series.iter().map(|c| c.count).collect(),
            mode: "lines+markers",
            name: label,
            line: json!({"color": color}),
            hovertemplate: "Year: %{x}<br>Count of Athletes: %{y}",
        }));
    }

    let scope = filters
        .team_deref()
        .map_or_else(|| "Globally".to_string(), |t| format!("for {t}"));
    let axis_style = json!({
        "titlefont": {"color": "black"},
        "tickfont": {"color": "black"},
        "showgrid": true,
        "gridcolor": "lightgrey",
        "linecolor": "black",
        "ticks": "outside",
    });

    let mut xaxis = axis_style.clone();
    xaxis["title"] = json!("Year");
    xaxis["zeroline"] = json!(true);
    xaxis["zerolinecolor"] = json!("black");
    let mut yaxis = axis_style;
    yaxis["title"] = json!("Count of Athletes");
    yaxis["zeroline"] = json!(false);

    let year = filters.year;
    let layout = Layout {
        title: Some(title_block(format!(
            "Athlete Count by Gender Over Time {scope}"
        ))),
        margin: Some(json!({"t": 50, "l": 10, "r": 10, "b": 10})),
        xaxis: Some(xaxis),
        yaxis: Some(yaxis),
        legend: Some(json!({"title": {"text": "Gender"}})),
        plot_bgcolor: Some("white"),
        shapes: vec![json!({
            "type": "line",
            "x0": year,
            "x1": year,
            "y0": 0,
            "y1": 1,
            "xref": "x",
            "yref": "paper",
            "line": {"dash": "dash", "color": "black"},
        })],
        annotations: vec![json!({
            "text": format!("Year: {year}"),
            "x": year,
            "y": 1,
            "xref": "x",
            "yref": "paper",
            "showarrow": false,
            "xanchor": "left",
        })],
        ..Layout::default()
    };

    Ok(Figure { data, layout })
}
