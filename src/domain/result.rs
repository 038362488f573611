//! Result type alias

use super::errors::MigrationError;

/// Result type alias for fallible operations
///
/// # Examples
///
/// ```
/// use trello2youtrack::domain::result::Result;
/// use trello2youtrack::domain::errors::MigrationError;
///
/// fn failing_function() -> Result<()> {
///     Err(MigrationError::Export("empty board".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MigrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(3)
        }

        let value = inner()?;
        assert_eq!(value, 3);
        Ok(())
    }
}
