//! Cross-filter behavior across the aggregates.

use podium_stats::{athlete_counts, medal_counts, team_stats};
use polars::prelude::*;

/// A small table shaped like the 2012 observation from the source
/// dataset's commentary: the United States sends a majority-male
/// delegation while women take the majority of that year's medals.
fn commentary_fixture() -> DataFrame {
    df![
        "year" => [2012i32, 2012, 2012, 2012, 2012, 2012, 2012, 2012, 2012],
        "season" => ["Summer"; 9],
        "sport" => ["Swimming", "Swimming", "Athletics", "Athletics", "Gymnastics", "Swimming", "Athletics", "Gymnastics", "Swimming"],
        "team" => ["United States", "United States", "United States", "United States", "United States", "France", "France", "Japan", "Japan"],
        "sex" => ["M", "M", "M", "F", "F", "F", "F", "F", "M"],
        "medal" => [Some("Gold"), None, None, Some("Gold"), Some("Silver"), Some("Bronze"), Some("Gold"), Some("Silver"), None],
    ]
    .unwrap()
}

#[test]
fn majority_male_delegation_with_female_medal_majority() {
    let df = commentary_fixture();

    let stats = team_stats(&df, 2012, None).unwrap();
    let us = stats.iter().find(|s| s.team == "United States").unwrap();
    assert!(us.female_percentage < 50.0);

    let medals = medal_counts(&df, 2012, None, None).unwrap();
    let female: u32 = medals.iter().filter(|m| m.sex == "F").map(|m| m.count).sum();
    let male: u32 = medals.iter().filter(|m| m.sex == "M").map(|m| m.count).sum();
    assert!(female > male);
}

#[test]
fn hover_restricts_timeline_and_medals_but_not_team_stats() {
    let df = commentary_fixture();

    // team_stats takes no team parameter at all; same filters, same output.
    let before = team_stats(&df, 2012, None).unwrap();
    let after = team_stats(&df, 2012, None).unwrap();
    assert_eq!(before, after);

    let global_timeline = athlete_counts(&df, None, None).unwrap();
    let hovered_timeline = athlete_counts(&df, None, Some("France")).unwrap();
    assert_ne!(global_timeline, hovered_timeline);
    let hovered_total: u32 = hovered_timeline.iter().map(|c| c.count).sum();
    assert_eq!(hovered_total, 2);

    let global_medals = medal_counts(&df, 2012, None, None).unwrap();
    let hovered_medals = medal_counts(&df, 2012, None, Some("France")).unwrap();
    assert_ne!(global_medals, hovered_medals);
    assert!(hovered_medals.iter().all(|m| m.sex == "F"));
}

#[test]
fn aggregate_totals_partition_the_summer_rows() {
    let df = commentary_fixture();

    let stats = team_stats(&df, 2012, None).unwrap();
    let total: u32 = stats.iter().map(|s| s.total_athletes).sum();
    assert_eq!(total as usize, df.height());

    let timeline = athlete_counts(&df, None, None).unwrap();
    let timeline_total: u32 = timeline.iter().map(|c| c.count).sum();
    assert_eq!(timeline_total as usize, df.height());
}
