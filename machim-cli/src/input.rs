//! Input handling
//!
//! Inputs are whole documents: the named files in argument order, or stdin
//! when no files are given. Splitting is per document, so offsets printed by
//! the offset-carrying formats are relative to each document's start.

use anyhow::Context;
use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// One unit of input text with its origin label.
#[derive(Debug)]
pub struct Document {
    /// File path, or `<stdin>`.
    pub source: String,
    /// Full document text.
    pub text: String,
}

/// Read the given files in order, or stdin when the list is empty.
pub fn read_documents(files: &[PathBuf]) -> CliResult<Vec<Document>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    files.iter().map(|path| read_file(path)).collect()
}

fn read_file(path: &Path) -> CliResult<Document> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        Err(error) if error.kind() == ErrorKind::InvalidData => {
            return Err(CliError::InvalidEncoding(path.display().to_string()).into());
        }
        Err(error) => {
            return Err(anyhow::Error::new(error)
                .context(format!("Failed to read file: {}", path.display())));
        }
    };
    Ok(Document {
        source: path.display().to_string(),
        text,
    })
}

fn read_stdin() -> CliResult<Document> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(Document {
        source: "<stdin>".to_string(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "밥을 먹었다.\n물을 마셨다.";
        fs::write(&file_path, content).unwrap();

        let documents = read_documents(&[file_path.clone()]).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].text, content);
        assert_eq!(documents[0].source, file_path.display().to_string());
    }

    #[test]
    fn test_read_files_in_argument_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a.txt");
        let second = temp_dir.path().join("b.txt");
        fs::write(&first, "first").unwrap();
        fs::write(&second, "second").unwrap();

        let documents = read_documents(&[second.clone(), first.clone()]).unwrap();
        assert_eq!(documents[0].text, "second");
        assert_eq!(documents[1].text, "first");
    }

    #[test]
    fn test_missing_file_is_reported_by_name() {
        let result = read_documents(&[PathBuf::from("/nonexistent/file.txt")]);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("File not found"));
        assert!(message.contains("/nonexistent/file.txt"));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.dat");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = read_documents(&[file_path]);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("not valid UTF-8"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let documents = read_documents(&[file_path]).unwrap();
        assert_eq!(documents[0].text, "");
    }
}
