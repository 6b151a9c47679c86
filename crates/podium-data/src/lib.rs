#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/podium-dash/podium/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod controls;
pub mod error;
pub mod loader;

pub use controls::{summer_sports, summer_years};
pub use error::{DataError, Result};
pub use loader::{DEFAULT_DATA_URL, DataSource, load, read_csv};

/// The only season the dashboard operates on.
pub const SUMMER: &str = "Summer";

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
