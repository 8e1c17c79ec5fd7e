//! Grade report pipeline: read student file, write report.

use crate::grading::{read_students_from_file, write_report_to_file, ParseError};
use crate::model::student::Student;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type GradingResult<T> = Result<T, GradingError>;

#[derive(Debug)]
pub enum GradingError {
    Parse(ParseError),
    Report {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for GradingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Report { path, source } => {
                write!(f, "failed to write report `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for GradingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Report { source, .. } => Some(source),
        }
    }
}

impl From<ParseError> for GradingError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

/// Reads `input`, then writes the report to `output`.
///
/// Nothing is written when parsing fails.
pub fn generate_report(input: impl AsRef<Path>, output: impl AsRef<Path>) -> GradingResult<Vec<Student>> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let started_at = Instant::now();

    let students = read_students_from_file(input).map_err(|err| {
        error!(
            "event=grades_read module=grading status=error path={} error={}",
            input.display(),
            err
        );
        GradingError::from(err)
    })?;
    info!(
        "event=grades_read module=grading status=ok count={} path={}",
        students.len(),
        input.display()
    );

    write_report_to_file(&students, output).map_err(|source| GradingError::Report {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        "event=grades_report module=grading status=ok count={} duration_ms={} path={}",
        students.len(),
        started_at.elapsed().as_millis(),
        output.display()
    );

    Ok(students)
}
