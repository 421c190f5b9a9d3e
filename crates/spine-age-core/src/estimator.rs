//! Spine age estimation.
//!
//! Maps a total score (0..=22) and the respondent's stated age to an
//! estimated spine age. Two decision tables exist; [`SpineAgePolicy`] picks
//! one and they are never combined.
//!
//! Thresholds are inclusive and checked from the highest down, so a score
//! exactly on a boundary lands in the younger bucket.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AssessmentError;

/// Youngest accepted actual age.
pub const MIN_ACTUAL_AGE: u32 = 10;
/// Oldest accepted actual age.
pub const MAX_ACTUAL_AGE: u32 = 100;

/// Respondents at or below this age use the youth table.
const YOUTH_MAX_AGE: u32 = 18;
/// Near-perfect scores from respondents at or above this age are capped.
const OLDER_MIN_AGE: u32 = 50;
const OLDER_CAP_SCORE: u32 = 21;
const OLDER_CAP_AGE: u32 = 30;

const YOUTH_TABLE: &[(u32, u32)] = &[(20, 12), (17, 15), (14, 18)];
const YOUTH_FLOOR: u32 = 22;

const ADULT_TABLE: &[(u32, u32)] = &[(21, 16), (19, 24), (17, 30), (14, 40), (11, 50)];
const ADULT_FLOOR: u32 = 60;

const CLASSIC_TABLE: &[(u32, u32)] = &[(20, 35), (16, 45), (12, 55)];
const CLASSIC_FLOOR: u32 = 65;

/// Which decision table to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpineAgePolicy {
    /// Age-adjusted table with a youth bracket and an older-respondent cap.
    #[default]
    AgeAdjusted,
    /// Four-bucket table that ignores the stated age.
    Classic,
}

impl SpineAgePolicy {
    /// Estimate spine age from a total score and the stated actual age.
    pub fn estimate(self, total_score: u32, actual_age: u32) -> u32 {
        let spine_age = match self {
            SpineAgePolicy::AgeAdjusted => age_adjusted(total_score, actual_age),
            SpineAgePolicy::Classic => lookup(CLASSIC_TABLE, CLASSIC_FLOOR, total_score),
        };
        debug!(policy = %self, total_score, actual_age, spine_age, "estimated spine age");
        spine_age
    }
}

fn age_adjusted(total_score: u32, actual_age: u32) -> u32 {
    if actual_age <= YOUTH_MAX_AGE {
        lookup(YOUTH_TABLE, YOUTH_FLOOR, total_score)
    } else if actual_age >= OLDER_MIN_AGE && total_score >= OLDER_CAP_SCORE {
        OLDER_CAP_AGE
    } else {
        lookup(ADULT_TABLE, ADULT_FLOOR, total_score)
    }
}

/// First row whose threshold the score reaches, else the floor.
fn lookup(table: &[(u32, u32)], floor: u32, score: u32) -> u32 {
    table
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(floor, |&(_, age)| age)
}

/// Check that an actual age lies in the accepted range.
pub fn validate_actual_age(age: u32) -> Result<u32, AssessmentError> {
    if (MIN_ACTUAL_AGE..=MAX_ACTUAL_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(AssessmentError::AgeOutOfRange {
            age,
            min: MIN_ACTUAL_AGE,
            max: MAX_ACTUAL_AGE,
        })
    }
}

impl fmt::Display for SpineAgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpineAgePolicy::AgeAdjusted => write!(f, "age-adjusted"),
            SpineAgePolicy::Classic => write!(f, "classic"),
        }
    }
}

impl FromStr for SpineAgePolicy {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "age-adjusted" | "age_adjusted" | "adjusted" => Ok(SpineAgePolicy::AgeAdjusted),
            "classic" | "simple" => Ok(SpineAgePolicy::Classic),
            other => Err(AssessmentError::UnknownPolicy(other.to_string())),
        }
    }
}
