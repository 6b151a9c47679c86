//! Shared colors and labels across the three charts.

/// Series color for female athletes.
pub const FEMALE_COLOR: &str = "darkblue";

/// Series color for male athletes.
pub const MALE_COLOR: &str = "darkred";

/// The sex codes charted, with their display labels and colors,
/// in render order.
pub const SEX_SERIES: [(&str, &str, &str); 2] = [
    ("F", "Female", FEMALE_COLOR),
    ("M", "Male", MALE_COLOR),
];

