//! Plotly-compatible figure types.
//!
//! The builders emit these structs; serialized with `serde_json` they
//! form the `{data, layout}` object `Plotly.react` consumes on the
//! client. Trace fields mirror Plotly attribute names, so serialization
//! is a plain field-for-field mapping. Loosely structured pieces
//! (titles, annotations, shapes, geo styling) stay `serde_json::Value`.

use serde::Serialize;
use serde_json::Value;

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    /// Traces, in draw order.
    pub data: Vec<Trace>,
    /// Layout options.
    pub layout: Layout,
}

/// One trace of any of the chart types the dashboard renders.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Trace {
    /// Geographic choropleth trace.
    Choropleth(ChoroplethTrace),
    /// Line/scatter trace.
    Scatter(ScatterTrace),
    /// Sunburst trace.
    Sunburst(SunburstTrace),
}

/// Choropleth trace keyed by country name.
#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    /// Trace type discriminator, always `"choropleth"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Country names.
    pub locations: Vec<String>,
    /// How `locations` are resolved, always `"country names"`.
    pub locationmode: &'static str,
    /// Color values, one per location.
    pub z: Vec<f64>,
    /// Lower bound of the color range.
    pub zmin: f64,
    /// Upper bound of the color range.
    pub zmax: f64,
    /// Midpoint of the diverging color scale.
    pub zmid: f64,
    /// Named Plotly color scale.
    pub colorscale: &'static str,
    /// Extra per-location data referenced by the hover template.
    pub customdata: Vec<u32>,
    /// Hover template.
    pub hovertemplate: &'static str,
    /// Color bar options.
    pub colorbar: Value,
}

/// Lines+markers trace for one series of the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    /// Trace type discriminator, always `"scatter"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Years.
    pub x: Vec<i32>,
    /// Athlete counts.
    pub y: Vec<u32>,
    /// Draw mode.
    pub mode: &'static str,
    /// Legend label.
    pub name: &'static str,
    /// Line styling.
    pub line: Value,
    /// Hover template.
    pub hovertemplate: &'static str,
}

/// Two-level sunburst trace (sex, then medal).
#[derive(Debug, Clone, Serialize)]
pub struct SunburstTrace {
    /// Trace type discriminator, always `"sunburst"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Node ids.
    pub ids: Vec<String>,
    /// Node display labels.
    pub labels: Vec<String>,
    /// Parent id per node; empty string for roots.
    pub parents: Vec<String>,
    /// Node sizes; root values equal the sum of their children.
    pub values: Vec<u32>,
    /// How parent values relate to children, always `"total"`.
    pub branchvalues: &'static str,
    /// Marker options (per-node colors).
    pub marker: Value,
    /// Per-node hover templates.
    pub hovertemplate: Vec<String>,
}

/// Figure layout; only the options the dashboard uses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    /// Title block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// Margins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Value>,
    /// X axis styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Value>,
    /// Y axis styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Value>,
    /// Legend options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Value>,
    /// Whether the legend is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    /// Plot background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    /// Geographic projection and map styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Value>,
    /// Text annotations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Value>,
    /// Shapes (the timeline's selected-year marker).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Value>,
}

/// Left-anchored title block shared by all three charts.
pub(crate) fn title_block(text: String) -> Value {
    serde_json::json!({
        "text": text,
        "x": 0,
        "xanchor": "left",
        "y": 0.95,
        "yanchor": "top",
        "font": {"size": 18, "color": "black", "family": "Arial"},
    })
}
