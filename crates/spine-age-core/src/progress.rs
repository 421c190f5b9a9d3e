//! Per-email progress log.
//!
//! One plain-text file per email address, one line per submission:
//!
//! ```text
//! 2025-03-14 | Age: 30 | Spine Age: 16 | Scores: {"Core and Posture":6,"Strength and Balance":6,"Recovery and Lifestyle":10}
//! ```
//!
//! Lines are only ever appended. Each line goes out in a single write so that
//! concurrent submissions for the same email interleave whole lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::AssessmentResult;
use crate::error::AssessmentError;
use crate::scoring::CategoryScores;

const FIELD_SEPARATOR: &str = " | ";
const FILE_PREFIX: &str = "user_progress_";
const FILE_EXTENSION: &str = "txt";

/// One submission as recorded in the progress log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub date: NaiveDate,
    pub actual_age: u32,
    pub spine_age: u32,
    pub category_scores: CategoryScores,
}

impl From<&AssessmentResult> for ProgressRecord {
    fn from(result: &AssessmentResult) -> Self {
        Self {
            date: result.date,
            actual_age: result.actual_age,
            spine_age: result.spine_age,
            category_scores: result.category_scores,
        }
    }
}

impl ProgressRecord {
    /// Render the record as one log line, without the trailing newline.
    pub fn to_line(&self) -> Result<String> {
        let scores =
            serde_json::to_string(&self.category_scores).context("failed to serialize scores")?;
        Ok(format!(
            "{}{sep}Age: {}{sep}Spine Age: {}{sep}Scores: {}",
            self.date.format("%Y-%m-%d"),
            self.actual_age,
            self.spine_age,
            scores,
            sep = FIELD_SEPARATOR,
        ))
    }

    /// Parse a line written by [`ProgressRecord::to_line`].
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut fields = line.trim_end().splitn(4, FIELD_SEPARATOR);
        let mut next = |name: &str| {
            fields
                .next()
                .with_context(|| format!("missing {name} field"))
        };

        let date = NaiveDate::parse_from_str(next("date")?, "%Y-%m-%d")
            .context("invalid date field")?;
        let actual_age = labeled(next("age")?, "Age: ")?
            .parse()
            .context("invalid age field")?;
        let spine_age = labeled(next("spine age")?, "Spine Age: ")?
            .parse()
            .context("invalid spine age field")?;
        let category_scores: CategoryScores =
            serde_json::from_str(labeled(next("scores")?, "Scores: ")?)
                .context("invalid scores field")?;

        anyhow::ensure!(
            category_scores.is_within_bounds(),
            "category scores out of range"
        );

        Ok(Self {
            date,
            actual_age,
            spine_age,
            category_scores,
        })
    }
}

fn labeled<'a>(field: &'a str, label: &str) -> Result<&'a str> {
    field
        .strip_prefix(label)
        .with_context(|| format!("expected field starting with {label:?}, got {field:?}"))
}

/// Filename stem for an email: `@` becomes `_at_`.
///
/// Returns `None` for an empty (or all-whitespace) email. Emails containing
/// `/` or `\` are rejected so the log always lands directly inside its
/// directory.
pub fn log_stem(email: &str) -> Result<Option<String>, AssessmentError> {
    let email = email.trim();
    if email.contains(['/', '\\']) {
        return Err(AssessmentError::InvalidEmail(email.to_string()));
    }
    Ok((!email.is_empty()).then(|| email.replace('@', "_at_")))
}

/// Path of the progress log for an email inside `dir`.
pub fn log_path(dir: &Path, email: &str) -> Result<Option<PathBuf>, AssessmentError> {
    Ok(log_stem(email)?.map(|stem| dir.join(format!("{FILE_PREFIX}{stem}.{FILE_EXTENSION}"))))
}

/// Append one record to the email's log.
///
/// Returns the log path, or `None` when the email is empty and nothing was
/// written.
pub fn append_progress(dir: &Path, email: &str, record: &ProgressRecord) -> Result<Option<PathBuf>> {
    let Some(path) = log_path(dir, email)? else {
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let mut line = record.to_line()?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open progress log {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("failed to append to progress log {}", path.display()))?;

    info!(path = %path.display(), spine_age = record.spine_age, "progress saved");
    Ok(Some(path))
}

/// Read every well-formed record from the email's log, oldest first.
///
/// A missing log yields an empty history. Malformed lines are skipped.
pub fn read_history(dir: &Path, email: &str) -> Result<Vec<ProgressRecord>> {
    let Some(path) = log_path(dir, email)? else {
        return Ok(Vec::new());
    };
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read progress log {}", path.display()))?;

    let records = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| match ProgressRecord::parse_line(line) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %path.display(), line = i + 1, "skipping malformed progress line: {e:#}");
                None
            }
        })
        .collect();
    Ok(records)
}
