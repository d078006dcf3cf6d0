//! List Keying
//!
//! Rows handed to a keyed list view must have unique keys. Paged WordPress
//! responses can repeat a record when content shifts between pages, so
//! repeats are dropped here, keeping the first occurrence.

use std::collections::HashSet;

use crate::models::Record;

/// Records in response order, with repeated ids removed.
pub fn rows<R: Record>(records: &[R]) -> Vec<R> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| {
            let id = record.record_id();
            let fresh = seen.insert(id.clone());
            if !fresh {
                log::warn!("[list] duplicate record id {} skipped", id);
            }
            fresh
        })
        .cloned()
        .collect()
}
