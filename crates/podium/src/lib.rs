#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/podium-dash/podium/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod context;

pub use context::DashboardContext;
pub use podium_charts as charts;
pub use podium_data as data;
pub use podium_stats as stats;
