//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file does not exist
    FileNotFound(String),
    /// Input file is not valid UTF-8
    InvalidEncoding(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidEncoding(path) => {
                write!(f, "File is not valid UTF-8: {path}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_encoding_error_display() {
        let error = CliError::InvalidEncoding("binary.dat".to_string());
        assert_eq!(error.to_string(), "File is not valid UTF-8: binary.dat");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("test.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("test error"));
    }

    #[test]
    fn test_error_with_unicode_path() {
        let error = CliError::FileNotFound("문서/테스트 파일.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 문서/테스트 파일.txt");
    }
}
