//! Filter-control derivation.
//!
//! The dropdown and slider are populated once at startup from the
//! distinct Summer-season sports and years; they are not recomputed
//! when filters change.

use crate::SUMMER;
use crate::error::Result;
use polars::prelude::*;

/// Distinct years with Summer-season rows, ascending.
pub fn summer_years(df: &DataFrame) -> Result<Vec<i32>> {
    let out = df
        .clone()
        .lazy()
        .filter(col("season").eq(lit(SUMMER)))
        .select([col("year").unique().sort(SortOptions::default())])
        .collect()?;

    Ok(out.column("year")?.i32()?.into_iter().flatten().collect())
}

/// Distinct sports with Summer-season rows, sorted by name.
pub fn summer_sports(df: &DataFrame) -> Result<Vec<String>> {
    let out = df
        .clone()
        .lazy()
        .filter(col("season").eq(lit(SUMMER)))
        .select([col("sport").unique().sort(SortOptions::default())])
        .collect()?;

    Ok(out
        .column("sport")?
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect())
}
