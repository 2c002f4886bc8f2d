//! Load-file parsing.
//!
//! Reads the line-oriented load format: a header line (discarded), then one
//! load per line as three whitespace-separated fields:
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-9.1,2.4) (3.0,-12.5)
//! ```
//!
//! Points are `(<x>,<y>)` with plain decimal coordinates (optional leading
//! `-`, optional fractional part). The first bad line aborts the whole
//! parse; the error chain names the line, the field, and the underlying
//! cause.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

use crate::models::{Load, Point};

/// A load-file parsing failure.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be opened or read.
    Read {
        /// Path of the load file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A line failed to parse.
    Line {
        /// 1-based line number (the header is line 1).
        line: usize,
        /// What went wrong on the line.
        source: LineError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, .. } => write!(f, "failed to read load file {}", path.display()),
            Self::Line { line, .. } => write!(f, "unable to parse line {line}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Line { source, .. } => Some(source),
        }
    }
}

/// A failure within a single load line.
#[derive(Debug)]
pub enum LineError {
    /// Wrong number of whitespace-separated fields.
    FieldCount {
        /// How many fields the line actually had.
        found: usize,
    },
    /// The load number field is not an integer.
    LoadNumber {
        /// Underlying integer parse error.
        source: ParseIntError,
    },
    /// A point field failed to parse.
    Point {
        /// Which field: `"pickup"` or `"dropoff"`.
        field: &'static str,
        /// What was wrong with the point.
        source: PointError,
    },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => {
                write!(f, "malformed load: expected 3 fields, received {found}")
            }
            Self::LoadNumber { .. } => write!(f, "load number unable to be parsed"),
            Self::Point { field, .. } => write!(f, "{field} point unable to be parsed"),
        }
    }
}

impl Error for LineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FieldCount { .. } => None,
            Self::LoadNumber { source } => Some(source),
            Self::Point { source, .. } => Some(source),
        }
    }
}

/// A failure within a single point field.
#[derive(Debug)]
pub enum PointError {
    /// The field does not have the `(<x>,<y>)` shape.
    Format {
        /// The offending field text.
        value: String,
    },
    /// A coordinate failed to parse as a float.
    Coordinate {
        /// Which coordinate: `'x'` or `'y'`.
        axis: char,
        /// Underlying float parse error.
        source: ParseFloatError,
    },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { value } => {
                write!(f, "{value:?} does not match the point format (<x>,<y>)")
            }
            Self::Coordinate { axis, .. } => {
                write!(f, "point {axis} coordinate unable to be parsed")
            }
        }
    }
}

impl Error for PointError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format { .. } => None,
            Self::Coordinate { source, .. } => Some(source),
        }
    }
}

/// Reads the file at `path` and parses out its loads.
pub fn parse_loads<P: AsRef<Path>>(path: P) -> Result<Vec<Load>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), path)
}

/// Parses loads from any buffered reader; `path` is used for error context
/// only.
pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Load>, ParseError> {
    let mut loads = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let text = line.map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line_number == 1 {
            // header
            continue;
        }
        let load = parse_line(&text).map_err(|source| ParseError::Line {
            line: line_number,
            source,
        })?;
        loads.push(load);
    }
    Ok(loads)
}

fn parse_line(input: &str) -> Result<Load, LineError> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let number: i64 = fields[0]
        .parse()
        .map_err(|source| LineError::LoadNumber { source })?;
    let pickup = parse_point(fields[1]).map_err(|source| LineError::Point {
        field: "pickup",
        source,
    })?;
    let dropoff = parse_point(fields[2]).map_err(|source| LineError::Point {
        field: "dropoff",
        source,
    })?;

    Ok(Load::new(number, pickup, dropoff))
}

fn parse_point(input: &str) -> Result<Point, PointError> {
    let format_err = || PointError::Format {
        value: input.to_string(),
    };

    let inner = input
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(format_err)?;
    let (x_text, y_text) = inner.split_once(',').ok_or_else(format_err)?;
    if !is_plain_decimal(x_text) || !is_plain_decimal(y_text) {
        return Err(format_err());
    }

    let x = x_text
        .parse()
        .map_err(|source| PointError::Coordinate { axis: 'x', source })?;
    let y = y_text
        .parse()
        .map_err(|source| PointError::Coordinate { axis: 'y', source })?;
    Ok(Point::new(x, y))
}

/// Accepts `-?\d+(\.\d*)?`: at least one integer digit, optional fraction.
///
/// Deliberately narrower than `f64::from_str`, which would also take
/// exponents, `inf`, `nan`, and a leading `+`.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    !integer.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && fraction.map_or(true, |f| f.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_text(text: &str) -> Result<Vec<Load>, ParseError> {
        parse_reader(text.as_bytes(), Path::new("test-input"))
    }

    #[test]
    fn test_parses_loads_and_skips_header() {
        let loads = parse_text(
            "loadNumber pickup dropoff\n\
             1 (-9.1,2.4) (3.0,-12.5)\n\
             2 (0,0) (5,5)\n",
        )
        .expect("valid input");
        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].number(), 1);
        assert_eq!(loads[0].pickup(), Point::new(-9.1, 2.4));
        assert_eq!(loads[0].dropoff(), Point::new(3.0, -12.5));
        assert_eq!(loads[1].number(), 2);
    }

    #[test]
    fn test_header_only_is_zero_loads() {
        let loads = parse_text("loadNumber pickup dropoff\n").expect("valid input");
        assert!(loads.is_empty());
    }

    #[test]
    fn test_empty_input_is_zero_loads() {
        let loads = parse_text("").expect("valid input");
        assert!(loads.is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_text("header\n1 (1,2)\n").expect_err("two fields");
        match err {
            ParseError::Line {
                line,
                source: LineError::FieldCount { found },
            } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_load_number() {
        let err = parse_text("header\nseven (1,2) (3,4)\n").expect_err("non-numeric number");
        match err {
            ParseError::Line {
                line: 2,
                source: LineError::LoadNumber { .. },
            } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_point_names_the_field() {
        let err = parse_text("header\n1 (1,2) 3,4\n").expect_err("unparenthesized point");
        match err {
            ParseError::Line {
                line: 2,
                source:
                    LineError::Point {
                        field: "dropoff",
                        source: PointError::Format { value },
                    },
            } => assert_eq!(value, "3,4"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_chain_is_preserved() {
        let err = parse_text("header\n1 (a,2) (3,4)\n").expect_err("bad coordinate");
        assert_eq!(err.to_string(), "unable to parse line 2");
        let line_err = err.source().expect("line cause");
        assert_eq!(line_err.to_string(), "pickup point unable to be parsed");
        assert!(line_err.source().is_some());
    }

    #[test]
    fn test_rejects_exponent_and_plus_sign() {
        assert!(parse_text("header\n1 (1e3,2) (3,4)\n").is_err());
        assert!(parse_text("header\n1 (+1,2) (3,4)\n").is_err());
        assert!(parse_text("header\n1 (nan,2) (3,4)\n").is_err());
    }

    #[test]
    fn test_accepts_trailing_dot_and_integer_coordinates() {
        let loads = parse_text("header\n1 (3.,-4) (0.25,100)\n").expect("valid input");
        assert_eq!(loads[0].pickup(), Point::new(3.0, -4.0));
        assert_eq!(loads[0].dropoff(), Point::new(0.25, 100.0));
    }

    #[test]
    fn test_first_error_aborts_with_no_partial_results() {
        let result = parse_text("header\n1 (1,2) (3,4)\nbad line here also bad\n");
        assert!(matches!(result, Err(ParseError::Line { line: 3, .. })));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = parse_loads("/definitely/not/here.txt").expect_err("missing file");
        match err {
            ParseError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
