//! YOLO label text reader.
//!
//! Each non-blank line is `<class_id> <x_center> <y_center> <width> <height>`,
//! separated by any whitespace, with all four floats given as fractions of
//! the image size.
//!
//! Malformed lines never abort [`parse`]: a line with the wrong number of
//! tokens and a line whose tokens do not parse as numbers are both dropped,
//! and parsing moves on to the next line. Callers that need to know what was
//! dropped use [`parse_with_report`]; callers that would rather fail use
//! [`parse_strict`].
//!
//! Class ids are read as `i64`. An id outside that range counts as a
//! malformed number and its line is skipped like any other.

use std::fmt;

use log::debug;
use serde::Serialize;

use super::model::{AnnotationSet, BoundingBoxAnnotation};
use crate::error::BoxviewError;

const FIELD_COUNT: usize = 5;

/// Parses label text into an [`AnnotationSet`], skipping malformed lines.
///
/// Empty or whitespace-only input gives an empty set.
pub fn parse(content: &str) -> AnnotationSet {
    parse_with_report(content).0
}

/// Parses label text and also reports every line that was skipped.
pub fn parse_with_report(content: &str) -> (AnnotationSet, ParseReport) {
    let mut annotations = AnnotationSet::new();
    let mut report = ParseReport::new();

    for (line_num, line) in numbered_lines(content) {
        match parse_label_line(line) {
            Ok(Some(annotation)) => annotations.push(annotation),
            Ok(None) => {}
            Err(issue) => {
                debug!("skipping annotation line {line_num}: {issue}");
                report.add(SkippedLine {
                    line: line_num,
                    issue,
                });
            }
        }
    }

    report.parsed = annotations.len();
    (annotations, report)
}

/// Parses label text, failing on the first malformed line.
pub fn parse_strict(content: &str) -> Result<AnnotationSet, BoxviewError> {
    let mut annotations = AnnotationSet::new();

    for (line_num, line) in numbered_lines(content) {
        let parsed = parse_label_line(line).map_err(|issue| BoxviewError::LabelParse {
            line: line_num,
            message: issue.to_string(),
        })?;
        if let Some(annotation) = parsed {
            annotations.push(annotation);
        }
    }

    Ok(annotations)
}

/// Parses a single label line.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_label_line(line: &str) -> Result<Option<BoundingBoxAnnotation>, LineIssue> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // One past the expected count is enough to tell "too many" apart.
    let tokens: Vec<&str> = trimmed
        .split_whitespace()
        .take(FIELD_COUNT + 1)
        .collect();

    if tokens.len() != FIELD_COUNT {
        let found = if tokens.len() > FIELD_COUNT {
            trimmed.split_whitespace().count()
        } else {
            tokens.len()
        };
        return Err(LineIssue::FieldCount { found });
    }

    let class_id = tokens[0]
        .parse::<i64>()
        .map_err(|_| LineIssue::InvalidNumber {
            field: Field::ClassId,
            token: tokens[0].to_string(),
        })?;

    Ok(Some(BoundingBoxAnnotation {
        class_id,
        x_center: parse_f64_token(tokens[1], Field::XCenter)?,
        y_center: parse_f64_token(tokens[2], Field::YCenter)?,
        width: parse_f64_token(tokens[3], Field::Width)?,
        height: parse_f64_token(tokens[4], Field::Height)?,
    }))
}

/// Fuzz-only entrypoint for single-line parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_label_line(input: &str) {
    let _ = parse_label_line(input);
}

fn parse_f64_token(raw: &str, field: Field) -> Result<f64, LineIssue> {
    raw.parse::<f64>().map_err(|_| LineIssue::InvalidNumber {
        field,
        token: raw.to_string(),
    })
}

/// Lines of the text, numbered from 1 as an editor would show them.
///
/// Surrounding blank lines come through as blank and are dropped by
/// [`parse_label_line`], which is the same as trimming the blob up front.
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
}

/// The fields of a label line, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ClassId,
    XCenter,
    YCenter,
    Width,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::ClassId => "class_id",
            Field::XCenter => "x_center",
            Field::YCenter => "y_center",
            Field::Width => "width",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}

/// Why a single line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineIssue {
    /// The line did not split into exactly five tokens.
    FieldCount { found: usize },
    /// A token could not be read as the number its position requires.
    InvalidNumber { field: Field, token: String },
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineIssue::FieldCount { found } => {
                write!(f, "expected {FIELD_COUNT} tokens, found {found}")
            }
            LineIssue::InvalidNumber {
                field: Field::ClassId,
                token,
            } => write!(f, "invalid class_id '{token}'; expected integer"),
            LineIssue::InvalidNumber { field, token } => {
                write!(f, "invalid {field} '{token}'; expected floating-point number")
            }
        }
    }
}

/// A line that [`parse_with_report`] dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub issue: LineIssue,
}

/// What happened to each line of a label file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Number of lines that became annotations.
    pub parsed: usize,
    /// Lines that were dropped, in file order.
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, skipped: SkippedLine) {
        self.skipped.push(skipped);
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Returns true if no line was dropped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped.is_empty() {
            return writeln!(f, "Parsed {} annotation(s), no lines skipped", self.parsed);
        }

        writeln!(
            f,
            "Parsed {} annotation(s), skipped {} line(s):",
            self.parsed,
            self.skipped.len()
        )?;
        for skipped in &self.skipped {
            writeln!(f, "  [SKIP] line {}: {}", skipped.line, skipped.issue)?;
        }
        Ok(())
    }
}
