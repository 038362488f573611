//! User mapping reader

use crate::domain::{MigrationError, Result, UserMapping};
use std::path::Path;

/// Load the source → destination username table
///
/// The first line is a header and is skipped. Each following record needs a
/// non-blank source and destination name; anything else is skipped with a
/// warning.
///
/// # Errors
///
/// Returns an error if the file is missing or not readable as delimited text.
pub fn read_user_mapping(path: impl AsRef<Path>) -> Result<UserMapping> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MigrationError::Configuration(format!(
            "User mapping file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut mapping = UserMapping::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let line = index + 2;

        let source = record.get(0).unwrap_or_default();
        let destination = record.get(1).unwrap_or_default();
        if source.is_empty() || destination.is_empty() {
            tracing::warn!(
                path = %path.display(),
                line,
                "Skipping incomplete user mapping line"
            );
            continue;
        }

        if let Some(previous) = mapping.insert(source, destination) {
            tracing::warn!(
                username = %source,
                previous = %previous,
                line,
                "Duplicate user mapping, later entry wins"
            );
        }
    }

    tracing::info!(
        path = %path.display(),
        users = mapping.len(),
        "Loaded user mapping"
    );
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn mapping_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_header_skipped_and_trimmed() {
        let file = mapping_file("trello,youtrack\n alice , a.smith\nbob,b.jones\n");
        let mapping = read_user_mapping(file.path()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.translate("alice"), "a.smith");
        assert_eq!(mapping.translate("bob"), "b.jones");
        assert_eq!(mapping.translate("trello"), "");
    }

    #[test]
    fn test_short_and_blank_lines_skipped() {
        let file = mapping_file("trello,youtrack\nalice\n,\ncarol,c.white\n\n");
        let mapping = read_user_mapping(file.path()).unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.translate("carol"), "c.white");
    }

    #[test]
    fn test_quoted_fields() {
        let file = mapping_file("trello,youtrack\n\"dave, jr\",\"d.jr\"\n");
        let mapping = read_user_mapping(file.path()).unwrap();
        assert_eq!(mapping.translate("dave, jr"), "d.jr");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_user_mapping(dir.path().join("users.csv"));
        assert!(matches!(result, Err(MigrationError::Configuration(_))));
    }
}
