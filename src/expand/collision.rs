//! Destination collision detection

use std::collections::HashMap;

use super::ResolvedEntry;
use crate::error::{ContentError, Result};

/// Scan a resolved manifest for entries that share a destination.
///
/// Runs over the fully expanded sequence. Expansion never produces the
/// same destination twice from one entry, so any duplicate found here is a
/// conflict between declared entries. The first duplicate in manifest
/// order aborts the whole call.
pub(crate) fn check_collisions(entries: &[ResolvedEntry]) -> Result<()> {
    let mut seen: HashMap<&str, &ResolvedEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(existing) = seen.insert(entry.destination.as_str(), entry) {
            return Err(ContentError::DestinationCollision {
                destination: entry.destination.clone(),
                existing_source: existing.source.clone(),
                new_source: entry.source.clone(),
            });
        }
    }
    Ok(())
}
