//! Comma-separated student record parser.

use crate::model::student::{Student, MAX_SCORE};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

const EXPECTED_FIELDS: usize = 3;
const BYTE_ORDER_MARK: char = '\u{feff}';

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug)]
pub enum ParseError {
    /// Wrong field count, or a required field is empty.
    MalformedRecord { line: usize, message: String },
    /// A numeric field is not an integer.
    InvalidFormat {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// Score parsed but lies outside `0..=100`.
    OutOfRange { line: usize, score: i64 },
    FileNotFound(PathBuf),
    Io(std::io::Error),
}

impl ParseError {
    /// 1-based line number for record-level errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line, .. }
            | Self::InvalidFormat { line, .. }
            | Self::OutOfRange { line, .. } => Some(*line),
            Self::FileNotFound(_) | Self::Io(_) => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord { line, message } => write!(f, "Line {line}: {message}"),
            Self::InvalidFormat { line, field, value } => {
                write!(f, "Line {line}: Invalid {field} format '{value}'.")
            }
            Self::OutOfRange { line, score } => write!(
                f,
                "Line {line}: Score must be between 0 and {MAX_SCORE}, but found {score}."
            ),
            Self::FileNotFound(path) => write!(
                f,
                "The file '{}' was not found. Please make sure it exists in the program directory.",
                path.display()
            ),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Parses one raw line.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line_number: usize, raw: &str) -> ParseResult<Option<Student>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() != EXPECTED_FIELDS {
        return Err(ParseError::MalformedRecord {
            line: line_number,
            message: format!(
                "Expected {EXPECTED_FIELDS} fields (ID, FullName, Score), but found {}.",
                fields.len()
            ),
        });
    }

    let id = fields[0]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat {
            line: line_number,
            field: "ID",
            value: fields[0].to_string(),
        })?;

    let full_name = fields[1];
    if full_name.is_empty() {
        return Err(ParseError::MalformedRecord {
            line: line_number,
            message: "Full name cannot be empty.".to_string(),
        });
    }

    // Parse wide so negative and oversized scores surface as range errors.
    let score = fields[2]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidFormat {
            line: line_number,
            field: "score",
            value: fields[2].to_string(),
        })?;
    let score = u32::try_from(score)
        .ok()
        .filter(|value| *value <= MAX_SCORE)
        .ok_or(ParseError::OutOfRange {
            line: line_number,
            score,
        })?;

    Ok(Some(Student::new(id, full_name, score)))
}

/// Parses every line from `reader`, stopping at the first error.
///
/// A byte order mark before the first line is skipped.
pub fn parse_students(reader: impl BufRead) -> ParseResult<Vec<Student>> {
    let mut students = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|err| match err.kind() {
            ErrorKind::InvalidData => ParseError::MalformedRecord {
                line: line_number,
                message: "Line is not valid UTF-8 text.".to_string(),
            },
            _ => ParseError::Io(err),
        })?;
        let content = match index {
            0 => line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line.as_str()),
            _ => line.as_str(),
        };
        if let Some(student) = parse_line(line_number, content)? {
            students.push(student);
        }
    }
    Ok(students)
}

/// Opens `path` and parses it with [`parse_students`].
///
/// # Errors
/// - `FileNotFound` when `path` does not exist.
pub fn read_students_from_file(path: impl AsRef<Path>) -> ParseResult<Vec<Student>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ParseError::FileNotFound(path.to_path_buf()),
        _ => ParseError::Io(err),
    })?;
    parse_students(BufReader::new(file))
}
