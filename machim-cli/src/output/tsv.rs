//! Tab-separated output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// TSV formatter - one `start<TAB>end<TAB>text` row per sentence.
///
/// The byte span lets downstream tools slice the original document even when
/// the sentence text itself contains tab characters.
pub struct TsvFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TsvFormatter<W> {
    /// Create a new TSV formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TsvFormatter<W> {
    fn format_sentence(&mut self, text: &str, start: usize, end: usize) -> Result<()> {
        writeln!(self.writer, "{start}\t{end}\t{text}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_carry_span_and_text() {
        let mut formatter = TsvFormatter::new(Vec::new());
        formatter.format_sentence("밥을 먹었다.", 0, 17).unwrap();
        formatter.format_sentence("물을 마셨다.", 18, 35).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows, ["0\t17\t밥을 먹었다.", "18\t35\t물을 마셨다."]);
    }
}
