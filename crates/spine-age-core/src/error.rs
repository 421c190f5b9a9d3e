//! Assessment error types.
//!
//! Input-boundary failures: bad answer labels, answer strings of the wrong
//! length, ages outside the accepted range, unknown policy names and emails
//! that cannot name a log file.

use thiserror::Error;

/// Errors that can occur while collecting or scoring an assessment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    /// An answer did not start with one of the labels A, B or C.
    #[error("unknown answer label: {0:?}")]
    UnknownLabel(String),

    /// A scripted answer string did not cover every question exactly once.
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    /// The stated age is outside the accepted range.
    #[error("actual age {age} is outside {min}..={max}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    /// The configured estimator policy is not known.
    #[error("unknown spine age policy: {0}")]
    UnknownPolicy(String),

    /// The email cannot name a progress log file.
    #[error("email {0:?} must not contain a path separator")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            AssessmentError::UnknownLabel("D) maybe".into()).to_string(),
            "unknown answer label: \"D) maybe\""
        );
        assert_eq!(
            AssessmentError::AnswerCount {
                expected: 11,
                actual: 3
            }
            .to_string(),
            "expected 11 answers, got 3"
        );
        assert_eq!(
            AssessmentError::AgeOutOfRange {
                age: 7,
                min: 10,
                max: 100
            }
            .to_string(),
            "actual age 7 is outside 10..=100"
        );
        assert_eq!(
            AssessmentError::InvalidEmail("x/y@z".into()).to_string(),
            "email \"x/y@z\" must not contain a path separator"
        );
    }
}
