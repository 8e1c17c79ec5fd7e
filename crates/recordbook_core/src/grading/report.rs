//! Plain-text grade report writer.

use crate::model::student::Student;
use chrono::{Local, NaiveDateTime};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const REPORT_TITLE: &str = "=== Student Grade Report ===";
/// `yyyy-MM-dd HH:mm:ss`
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the report for `students`, stamped with `generated_at`.
pub fn write_report<W: Write>(
    students: &[Student],
    generated_at: NaiveDateTime,
    mut writer: W,
) -> std::io::Result<()> {
    writeln!(writer, "{REPORT_TITLE}")?;
    writeln!(
        writer,
        "Generated on: {}",
        generated_at.format(REPORT_TIMESTAMP_FORMAT)
    )?;
    writeln!(writer)?;
    for student in students {
        writeln!(writer, "{}", student.report_line())?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total Students: {}", students.len())?;
    writer.flush()
}

/// Writes the report to `path` using the current local time.
pub fn write_report_to_file(students: &[Student], path: impl AsRef<Path>) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_report(students, Local::now().naive_local(), BufWriter::new(file))
}
