#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/podium-dash/podium/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod choropleth;
pub mod error;
pub mod figure;
pub mod line;
pub mod sunburst;
pub mod theme;

pub use choropleth::choropleth_figure;
pub use error::{ChartError, Result};
pub use figure::{Figure, Layout, Trace};
pub use line::line_figure;
pub use sunburst::sunburst_figure;
