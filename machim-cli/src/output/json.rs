//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as one pretty-printed array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// The sentence text
    pub text: String,
    /// Byte offset of the first character in the source document
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, text: &str, start: usize, end: usize) -> Result<()> {
        self.sentences.push(SentenceRecord {
            text: text.to_string(),
            start,
            end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_a_parseable_array_with_spans() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_sentence("밥을 먹었다.", 0, 17).unwrap();
        formatter.format_sentence("물을 마셨다.", 18, 35).unwrap();
        formatter.finish().unwrap();

        let records: Vec<SentenceRecord> =
            serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "밥을 먹었다.");
        assert_eq!(records[1].start, 18);
        assert_eq!(records[1].end, 35);
    }

    #[test]
    fn test_empty_input_is_an_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
