use crate::core::ScanSummary;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &ScanSummary) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_summary(&mut self, summary: &ScanSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_separator(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "=".repeat(60))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &ScanSummary) -> anyhow::Result<()> {
        for file in &summary.files {
            self.write_separator()?;
            writeln!(
                self.writer,
                "File: {}",
                file.path.display().to_string().bold()
            )?;
            self.write_separator()?;

            for report in &file.duplicates {
                writeln!(
                    self.writer,
                    "{} {}",
                    report.identity.to_string().yellow(),
                    "(duplicate)".red()
                )?;
                for occurrence in &report.occurrences {
                    writeln!(
                        self.writer,
                        "  line {}: {}",
                        occurrence.line_number,
                        occurrence.trimmed_text()
                    )?;
                }
                writeln!(self.writer)?;
            }
        }

        if summary.has_duplicates() {
            self.write_separator()?;
            writeln!(
                self.writer,
                "{}",
                format!(
                    "{} duplicate relation declaration(s) found across {} file(s).",
                    summary.total_duplicates,
                    summary.files.len()
                )
                .red()
            )?;
        } else {
            writeln!(
                self.writer,
                "{}",
                "No duplicate relation declarations found.".green()
            )?;
        }
        Ok(())
    }
}
