//! Team-stats export for the `export` subcommand.

use clap::ValueEnum;
use podium_stats::{TeamStats, team_stats};
use polars::prelude::DataFrame;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub(crate) enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Aggregation error.
    #[error("Aggregation error: {0}")]
    Stats(#[from] podium_stats::StatsError),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// Comma-separated values format.
    Csv,
    /// Compact JSON format.
    Json,
    /// Pretty-printed JSON format.
    PrettyJson,
}

/// Compute the per-team aggregate and write it to `output` or stdout.
pub(crate) fn export_team_stats(
    df: &DataFrame,
    year: i32,
    sport: Option<&str>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), ExportError> {
    let stats = team_stats(df, year, sport)?;

    match output {
        Some(path) => write_team_stats(&stats, format, File::create(path)?),
        None => write_team_stats(&stats, format, std::io::stdout().lock()),
    }
}

fn write_team_stats<W: Write>(
    stats: &[TeamStats],
    format: ExportFormat,
    mut writer: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in stats {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer(&mut writer, stats)?;
            writeln!(writer)?;
        }
        ExportFormat::PrettyJson => {
            serde_json::to_writer_pretty(&mut writer, stats)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TeamStats> {
        vec![
            TeamStats {
                team: "France".to_string(),
                total_athletes: 4,
                female_athletes: 2,
                female_percentage: 50.0,
            },
            TeamStats {
                team: "Japan".to_string(),
                total_athletes: 2,
                female_athletes: 2,
                female_percentage: 100.0,
            },
        ]
    }

    #[test]
    fn test_csv_export_with_header() {
        let mut buf = Vec::new();
        write_team_stats(&sample(), ExportFormat::Csv, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "team,total_athletes,female_athletes,female_percentage"
        );
        assert_eq!(lines.next().unwrap(), "France,4,2,50.0");
    }

    #[test]
    fn test_json_export_round_trips() {
        let mut buf = Vec::new();
        write_team_stats(&sample(), ExportFormat::Json, &mut buf).unwrap();

        let parsed: Vec<TeamStats> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_aggregate_exports_cleanly() {
        let mut buf = Vec::new();
        write_team_stats(&[], ExportFormat::PrettyJson, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "[]");
    }
}
