use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use ordered_float::NotNan;
use serde::Deserialize;
use tracing::info;

use crate::lookup::{LookupEntry, RangeLookupTable};
use crate::range::Interval;

/// One lookup range as it appears in a table file. Omitted bounds are
/// unbounded; closedness defaults to `[lower, upper)`.
#[derive(Deserialize, Copy, Clone)]
pub struct EntryData {
    pub lower: Option<f64>,
    pub lower_closed: Option<bool>,
    pub upper: Option<f64>,
    pub upper_closed: Option<bool>,
    pub value: f64,
}

#[derive(Deserialize, Clone)]
pub struct TableData {
    /// Substituted by the caller for source values outside every range.
    pub default: Option<f64>,
    pub entries: Vec<EntryData>,
}

impl TryFrom<EntryData> for LookupEntry<f64, f64> {
    type Error = anyhow::Error;

    fn try_from(data: EntryData) -> Result<Self> {
        // NotNan turns a NaN bound in a table file into a load error
        // instead of an interval no query can ever match
        let lower = data
            .lower
            .map(NotNan::new)
            .transpose()
            .context("lower bound is NaN")?;
        let upper = data
            .upper
            .map(NotNan::new)
            .transpose()
            .context("upper bound is NaN")?;
        let range = Interval::new(
            lower.map(NotNan::into_inner),
            data.lower_closed.unwrap_or(true),
            upper.map(NotNan::into_inner),
            data.upper_closed.unwrap_or(false),
        )?;
        Ok(LookupEntry::new(range, data.value))
    }
}

pub fn table_from_str(input: &str) -> Result<(RangeLookupTable<f64, f64>, Option<f64>)> {
    let data: TableData = toml::from_str(input)?;
    let entries = data
        .entries
        .iter()
        .map(|&entry| LookupEntry::try_from(entry))
        .collect::<Result<Vec<_>>>()?;
    let table = RangeLookupTable::build(entries)?;
    info!("loaded range lookup table with {} entries", table.len());
    Ok((table, data.default))
}

pub fn load_table(path: impl AsRef<Path>) -> Result<(RangeLookupTable<f64, f64>, Option<f64>)> {
    let path = path.as_ref();
    let mut input = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read lookup table file {}", path.display()))?;
    table_from_str(&input)
}
