//! Report rendering.

use std::io::Write;

use annocheck_core::AnnotationReport;
use anyhow::Result;

/// Plain text: a section per criterion, one `<row> <reference>` line per
/// mismatch, then a total.
pub fn write_text<W: Write>(writer: &mut W, report: &AnnotationReport, quiet: bool) -> Result<()> {
    for (criterion, errors) in report.iter() {
        writeln!(writer, "{}: {} mismatched rows", criterion, errors.len())?;
        if quiet {
            continue;
        }
        for error in errors {
            writeln!(writer, "{} {}", error.row, error.reference)?;
        }
    }

    writeln!(writer, "Total: {}", report.total())?;
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, report: &AnnotationReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
