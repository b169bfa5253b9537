use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// One normalized posting. Field order is the on-disk column order; equality,
/// hashing, and ordering are field-wise over all six columns, so a record is
/// a duplicate only when every field matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Record {
    pub company: String,
    pub role: String,
    pub location: String,
    pub link: String,
    pub date_posted: String,
    pub is_us_location: String,
}

impl Record {
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.company,
            &self.role,
            &self.location,
            &self.link,
            &self.date_posted,
            &self.is_us_location,
        ]
    }

    fn from_row(row: &csv::StringRecord) -> Option<Self> {
        Some(Self {
            company: row.get(0)?.to_string(),
            role: row.get(1)?.to_string(),
            location: row.get(2)?.to_string(),
            link: row.get(3)?.to_string(),
            date_posted: row.get(4)?.to_string(),
            is_us_location: row.get(5)?.to_string(),
        })
    }
}

/// A freshly normalized table: parsed header plus records in input row order.
#[derive(Debug, Clone)]
pub struct Batch {
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

// ── Raw snapshot ──

/// Persist the filtered table text between the fetch and normalize stages.
pub fn write_raw(path: &Path, text: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn read_raw(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read snapshot {}", path.display()))
}

// ── CSV ──

/// Load a batch file written by the normalize stage. `None` if absent.
pub fn read_batch(path: &Path) -> Result<Option<Batch>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let header = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .map(|cell| cell.to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("Malformed row in {}", path.display()))?;
        if let Some(record) = Record::from_row(&row) {
            records.push(record);
        }
    }
    Ok(Some(Batch { header, records }))
}

/// Load the accumulated dataset as a set of records. A missing file is an
/// empty set: every incoming record counts as new.
pub fn read_dataset(path: &Path) -> Result<HashSet<Record>> {
    if !path.exists() {
        info!("No dataset at {}, starting from empty", path.display());
        return Ok(HashSet::new());
    }
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut records = HashSet::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("Malformed row in {}", path.display()))?;
        if let Some(record) = Record::from_row(&row) {
            records.insert(record);
        }
    }
    Ok(records)
}

/// Write header + records as CSV, creating the parent directory on first use.
/// Quoting of embedded commas and quotes is handled by the writer.
pub fn write_batch(path: &Path, header: &[String], records: &[Record]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("Failed to write {}", path.display()))?;
    writer.write_record(header)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}
