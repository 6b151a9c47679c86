//! Declarative control-to-chart dependencies.
//!
//! The front end fetches this table once and, on each control event,
//! re-renders exactly the charts whose inputs include the control that
//! changed. One event, one complete pass; nothing is debounced or
//! batched, and events are handled strictly in order.

use serde::Serialize;

/// A UI control that can change the filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ControlInput {
    /// The year slider.
    YearSlider,
    /// The sport dropdown.
    SportDropdown,
    /// Hovering a country on the choropleth.
    MapHover,
}

/// One of the three chart panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ChartPanel {
    /// Female-participation choropleth.
    Choropleth,
    /// Athlete-count timeline.
    Line,
    /// Medal sunburst.
    Sunburst,
}

/// A chart and the controls it depends on.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChartBinding {
    /// The dependent chart.
    pub(crate) chart: ChartPanel,
    /// Controls whose changes re-render it.
    pub(crate) inputs: &'static [ControlInput],
}

/// The full binding table. The choropleth is the hover source, so it
/// never depends on hover itself.
pub(crate) fn all() -> Vec<ChartBinding> {
    vec![
        ChartBinding {
            chart: ChartPanel::Choropleth,
            inputs: &[ControlInput::YearSlider, ControlInput::SportDropdown],
        },
        ChartBinding {
            chart: ChartPanel::Line,
            inputs: &[
                ControlInput::YearSlider,
                ControlInput::SportDropdown,
                ControlInput::MapHover,
            ],
        },
        ChartBinding {
            chart: ChartPanel::Sunburst,
            inputs: &[
                ControlInput::YearSlider,
                ControlInput::SportDropdown,
                ControlInput::MapHover,
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chart_is_bound() {
        let table = all();
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|b| !b.inputs.is_empty()));
    }

    #[test]
    fn test_hover_feeds_line_and_sunburst_only() {
        for binding in all() {
            let hover_bound = binding.inputs.contains(&ControlInput::MapHover);
            match binding.chart {
                ChartPanel::Choropleth => assert!(!hover_bound),
                ChartPanel::Line | ChartPanel::Sunburst => assert!(hover_bound),
            }
        }
    }

    #[test]
    fn test_serialized_form_is_kebab_case() {
        let value = serde_json::to_value(all()).unwrap();
        assert_eq!(value[0]["chart"], "choropleth");
        assert_eq!(value[0]["inputs"][0], "year-slider");
    }
}
