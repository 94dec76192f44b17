//! Export a solved quantity set to JSON.
//!
//! The file holds a single object keyed by the external labels
//! (`Return`, `Beta`, `Risk-Free Rate`, `Treynor Ratio`).

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::domain::QuantitySet;
use crate::error::AppError;

/// Write a solved set to a pretty-printed JSON file.
pub fn write_quantity_set_json(path: &Path, set: &QuantitySet) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, set)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    info!(path = %path.display(), "exported quantity set");
    Ok(())
}
