use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::store::{self, Batch, Record};

/// Counts reported after an incremental merge.
pub struct MergeStats {
    pub new: usize,
    pub duplicates: usize,
    pub existing: usize,
}

/// Drop every record already present in the accumulated dataset and rewrite
/// the batch file with the remainder in ascending full-tuple order, so
/// successive runs produce stable diffs. The dataset file itself is never
/// written here; promoting the merged batch into it is a separate step.
///
/// Returns `None` for an empty batch: nothing is written.
pub fn merge_batch(
    batch: &Batch,
    dataset_path: &Path,
    batch_path: &Path,
) -> Result<Option<MergeStats>> {
    if batch.records.is_empty() {
        return Ok(None);
    }

    let existing = store::read_dataset(dataset_path)?;
    // Set semantics also collapse duplicates within the batch itself.
    let incoming: HashSet<Record> = batch.records.iter().cloned().collect();

    let mut unique: Vec<Record> = incoming.difference(&existing).cloned().collect();
    unique.sort();

    let duplicates = incoming.len() - unique.len();
    store::write_batch(batch_path, &batch.header, &unique)?;
    info!(
        "Merged batch: {} new, {} duplicate, {} already accumulated",
        unique.len(),
        duplicates,
        existing.len()
    );

    Ok(Some(MergeStats {
        new: unique.len(),
        duplicates,
        existing: existing.len(),
    }))
}
