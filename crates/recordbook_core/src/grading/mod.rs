//! Student result ingestion and grade report generation.
//!
//! # Responsibility
//! - Parse `id,full name,score` lines into `Student` records.
//! - Render the plain-text grade report.
//!
//! # Invariants
//! - Parsing is all-or-nothing per input: the first bad line aborts the read.
//! - Every parse error names the 1-based line number it came from.

pub mod parser;
pub mod report;

pub use parser::{parse_line, parse_students, read_students_from_file, ParseError, ParseResult};
pub use report::{write_report, write_report_to_file, REPORT_TIMESTAMP_FORMAT, REPORT_TITLE};
