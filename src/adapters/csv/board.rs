//! Board export writer

use crate::domain::{Column, MigrationError, Result, Row};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write the sorted board to `path`, replacing any existing file
///
/// Rows are written to a temporary file next to the destination which is
/// then renamed over it, so readers never observe a partially written
/// export.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written or persisted.
pub fn write_board(path: impl AsRef<Path>, columns: &[Column], rows: &[Row]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let staging = NamedTempFile::new_in(dir)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(staging);

    writer.write_record(Column::header(columns))?;
    for row in rows {
        writer.write_record(row.record(columns))?;
    }

    let mut staging = writer
        .into_inner()
        .map_err(|e| MigrationError::Csv(format!("Failed to flush export: {}", e.error())))?;
    staging.flush()?;
    staging.as_file().sync_all()?;

    staging.persist(path).map_err(|e| {
        MigrationError::Export(format!(
            "Failed to replace {}: {}",
            path.display(),
            e.error
        ))
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Board export written");
    Ok(())
}
