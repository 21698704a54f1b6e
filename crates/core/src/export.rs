//! Pure formatters for the shareable summary and the one-row CSV export.
//!
//! Nothing here performs I/O; the caller supplies the export instant and is
//! responsible for delivering the bytes.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::{ProfileLabel, QuizResult};

/// Name written to the export when the user did not give one.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Subject of the result headline when the user did not give a name.
pub const DEFAULT_HEADLINE_NAME: &str = "You";

/// `YYYY-MM-DD_HHMMSS`, always rendered in UTC.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

pub const CSV_HEADER: &str = "name,profile,creative_count,analytical_count,timestamp_utc";

const FILE_PREFIX: &str = "quiz_result_";
const FILE_SUFFIX: &str = ".csv";

/// Display name with surrounding whitespace removed; blank names count as absent.
#[must_use]
pub fn effective_name(display_name: Option<&str>) -> Option<&str> {
    display_name.map(str::trim).filter(|name| !name.is_empty())
}

/// Export timestamp in the fixed sortable format.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(EXPORT_TIMESTAMP_FORMAT).to_string()
}

//
// ─── SHARE SUMMARY ────────────────────────────────────────────────────────────
//

/// Copy-paste narrative for a result.
#[must_use]
pub fn share_text(result: &QuizResult) -> String {
    format!(
        "I just took a quick Creativity \u{2194} Analytics quiz. Result: **{label}** ({a}\u{d7}A : {b}\u{d7}B).\n\
         \n\
         I believe modern marketing needs both imagination *and* measurement \u{2014} the real edge is knowing when to lean which way.\n\
         \n\
         Curious where you land? Try the quiz here and comment your result.",
        label = result.label(),
        a = result.creative_count(),
        b = result.analytical_count(),
    )
}

/// Text shown on the result screen and offered for sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSummary {
    pub label: ProfileLabel,
    /// `"{who} = {label}  ·  A: {c}  B: {a}"`.
    pub headline: String,
    /// `"{c}×A / {a}×B"`.
    pub tally: String,
    pub blurb: &'static str,
    pub share_text: String,
}

impl ShareSummary {
    #[must_use]
    pub fn new(display_name: Option<&str>, result: &QuizResult) -> Self {
        let who = effective_name(display_name).unwrap_or(DEFAULT_HEADLINE_NAME);
        let label = result.label();
        let (a, b) = (result.creative_count(), result.analytical_count());

        Self {
            label,
            headline: format!("{who} = {label}  \u{b7}  A: {a}  B: {b}"),
            tally: format!("{a}\u{d7}A / {b}\u{d7}B"),
            blurb: label.blurb(),
            share_text: share_text(result),
        }
    }
}

//
// ─── EXPORT RECORD ────────────────────────────────────────────────────────────
//

/// Single data row of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub name: String,
    pub profile: String,
    pub creative_count: u32,
    pub analytical_count: u32,
    pub timestamp_utc: String,
}

impl ExportRecord {
    #[must_use]
    pub fn new(display_name: Option<&str>, result: &QuizResult, at: DateTime<Utc>) -> Self {
        Self {
            name: effective_name(display_name)
                .unwrap_or(ANONYMOUS_NAME)
                .to_owned(),
            profile: result.label().as_str().to_owned(),
            creative_count: result.creative_count(),
            analytical_count: result.analytical_count(),
            timestamp_utc: format_timestamp(at),
        }
    }

    /// `quiz_result_{timestamp_utc}.csv`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", self.timestamp_utc)
    }

    /// Header row plus this record, each newline-terminated.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 64);
        out.push_str(CSV_HEADER);
        out.push('\n');
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            csv_field(&self.name),
            csv_field(&self.profile),
            self.creative_count,
            self.analytical_count,
            csv_field(&self.timestamp_utc),
        );
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
