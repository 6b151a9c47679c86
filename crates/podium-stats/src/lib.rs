#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/podium-dash/podium/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod filters;
pub mod medals;
pub mod team;
pub mod timeline;

pub use error::{Result, StatsError};
pub use filters::ChartFilters;
pub use medals::{MedalCount, medal_counts};
pub use team::{TeamExtremes, TeamStats, team_stats};
pub use timeline::{AthleteYearCount, athlete_counts};
