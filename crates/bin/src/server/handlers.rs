//! HTTP handlers for the dashboard API.

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use podium_stats::ChartFilters;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::app_state::AppState;
use super::bindings::{self, ChartBinding};
use super::error::ApiError;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");

/// Serve the dashboard page.
pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serve the front-end script.
pub(crate) async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

/// Control ranges derived once at startup.
#[derive(Debug, Serialize)]
pub(crate) struct ControlsResponse {
    /// The season the dashboard operates on.
    pub(crate) season: &'static str,
    /// Slider values, ascending.
    pub(crate) years: Vec<i32>,
    /// Dropdown options, sorted.
    pub(crate) sports: Vec<String>,
}

/// `GET /api/controls`
pub(crate) async fn controls(State(state): State<AppState>) -> Json<ControlsResponse> {
    Json(ControlsResponse {
        season: podium_data::SUMMER,
        years: state.ctx.years.clone(),
        sports: state.ctx.sports.clone(),
    })
}

/// `GET /api/bindings`
pub(crate) async fn chart_bindings() -> Json<Vec<ChartBinding>> {
    Json(bindings::all())
}

/// Query parameters shared by the figure endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartQuery {
    /// Selected year; defaults to the earliest Summer-season year.
    pub(crate) year: Option<i32>,
    /// Selected sport; empty means all sports.
    pub(crate) sport: Option<String>,
    /// Hovered team; empty means no hover.
    pub(crate) team: Option<String>,
}

impl ChartQuery {
    fn year(&self, state: &AppState) -> Result<i32, ApiError> {
        self.year
            .or_else(|| state.ctx.default_year())
            .ok_or(ApiError::NoYears)
    }

    fn sport(&self) -> Option<&str> {
        self.sport.as_deref().filter(|s| !s.is_empty())
    }

    fn team(&self) -> Option<&str> {
        self.team.as_deref().filter(|t| !t.is_empty())
    }

    /// Resolve the query into a complete filter selection.
    fn filters(&self, state: &AppState) -> Result<ChartFilters, ApiError> {
        let mut filters = ChartFilters::year(self.year(state)?);
        if let Some(sport) = self.sport() {
            filters = filters.with_sport(sport);
        }
        if let Some(team) = self.team() {
            filters = filters.with_team(team);
        }
        Ok(filters)
    }
}

/// `GET /api/charts/choropleth` — independent of the hovered team.
pub(crate) async fn choropleth(
    State(state): State<AppState>,
    Query(params): Query<ChartQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = params.filters(&state)?;
    debug!(year = filters.year, sport = ?filters.sport, "Building choropleth");

    let figure = podium_charts::choropleth_figure(&state.ctx.table, &filters)?;
    Ok(Json(figure))
}

/// `GET /api/charts/line`
pub(crate) async fn line(
    State(state): State<AppState>,
    Query(params): Query<ChartQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = params.filters(&state)?;
    debug!(year = filters.year, sport = ?filters.sport, team = ?filters.team, "Building line chart");

    let figure = podium_charts::line_figure(&state.ctx.table, &filters)?;
    Ok(Json(figure))
}

/// `GET /api/charts/sunburst`
pub(crate) async fn sunburst(
    State(state): State<AppState>,
    Query(params): Query<ChartQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = params.filters(&state)?;
    debug!(year = filters.year, sport = ?filters.sport, team = ?filters.team, "Building sunburst");

    let figure = podium_charts::sunburst_figure(&state.ctx.table, &filters)?;
    Ok(Json(figure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium::DashboardContext;
    use polars::prelude::*;
    use std::sync::Arc;

    fn state() -> AppState {
        let df = df![
            "year" => [2012i32, 2016],
            "season" => ["Summer", "Summer"],
            "sport" => ["Swimming", "Fencing"],
            "team" => ["France", "Japan"],
            "sex" => ["F", "M"],
            "medal" => [Some("Gold"), None],
        ]
        .unwrap();
        AppState::new(Arc::new(DashboardContext::from_table(df).unwrap()))
    }

    #[test]
    fn test_year_defaults_to_earliest() {
        let query = ChartQuery {
            year: None,
            sport: None,
            team: None,
        };
        assert_eq!(query.year(&state()).unwrap(), 2012);
    }

    #[test]
    fn test_empty_params_normalize_to_none() {
        let query = ChartQuery {
            year: Some(2016),
            sport: Some(String::new()),
            team: Some(String::new()),
        };
        assert_eq!(query.sport(), None);
        assert_eq!(query.team(), None);
    }

    #[test]
    fn test_missing_year_on_empty_dataset_is_an_error() {
        let df = df![
            "year" => Vec::<i32>::new(),
            "season" => Vec::<String>::new(),
            "sport" => Vec::<String>::new(),
            "team" => Vec::<String>::new(),
            "sex" => Vec::<String>::new(),
            "medal" => Vec::<String>::new(),
        ]
        .unwrap();
        let state = AppState::new(Arc::new(DashboardContext::from_table(df).unwrap()));

        let query = ChartQuery {
            year: None,
            sport: None,
            team: None,
        };
        assert!(matches!(query.year(&state), Err(ApiError::NoYears)));
    }
}
