//! Medal counts by gender as a two-level sunburst.

use crate::error::Result;
use crate::figure::{Figure, Layout, SunburstTrace, Trace, title_block};
use crate::theme::SEX_SERIES;
use podium_stats::{ChartFilters, medal_counts};
use polars::prelude::DataFrame;
use serde_json::json;

/// Build the sunburst for the current selection.
///
/// Inner ring: gender. Outer ring: medal type, sized by count and
/// colored like its parent. Athletes without a medal never appear. An
/// empty selection produces a trace with no nodes.
pub fn sunburst_figure(df: &DataFrame, filters: &ChartFilters) -> Result<Figure> {
    let counts = medal_counts(
        df,
        filters.year,
        filters.sport_deref(),
        filters.team_deref(),
    )?;

    let mut ids = Vec::new();
    let mut labels = Vec::new();
    let mut parents = Vec::new();
    let mut values = Vec::new();
    let mut colors = Vec::new();
    let mut hovertemplate = Vec::new();

    for (sex, label, color) in SEX_SERIES {
        let children: Vec<_> = counts.iter().filter(|m| m.sex == sex).collect();
        if children.is_empty() {
            continue;
        }

        let total: u32 = children.iter().map(|m| m.count).sum();
        ids.push(sex.to_string());
        labels.push(label.to_string());
        parents.push(String::new());
        values.push(total);
        colors.push(color);
        hovertemplate.push(format!("Gender: {label}<br>Count: {total}<extra></extra>"));

        for medal in children {
            ids.push(format!("{sex}/{}", medal.medal));
            labels.push(medal.medal.clone());
            parents.push(sex.to_string());
            values.push(medal.count);
            colors.push(color);
            hovertemplate.push(format!(
                "Gender: {label}<br>Medal: {}<br>Count: {}<extra></extra>",
                medal.medal, medal.count
            ));
        }
    }

    let trace = SunburstTrace {
        kind: "sunburst",
        ids,
        labels,
        parents,
        values,
        branchvalues: "total",
        marker: json!({"colors": colors}),
        hovertemplate,
    };

    let scope = filters
        .team_deref()
        .map_or_else(|| "Globally".to_string(), |t| format!("for {t}"));
    let layout = Layout {
        title: Some(title_block(format!("Medal Counts by Gender {scope}"))),
        margin: Some(json!({"t": 50, "l": 10, "r": 10, "b": 10})),
        showlegend: Some(false),
        ..Layout::default()
    };

    Ok(Figure {
        data: vec![Trace::Sunburst(trace)],
        layout,
    })
}
