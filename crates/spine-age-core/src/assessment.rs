//! Assessment results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::estimator::SpineAgePolicy;
use crate::model::Response;
use crate::scoring::CategoryScores;

/// The outcome of one submission. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Unique submission identifier.
    pub id: Uuid,
    /// Day of submission.
    pub date: NaiveDate,
    /// Stated actual age; 0 when none was given.
    pub actual_age: u32,
    /// Sum of all category scores.
    pub total_score: u32,
    /// Estimated spine age in years.
    pub spine_age: u32,
    /// Decision table used for the estimate.
    pub policy: SpineAgePolicy,
    /// Score snapshot at submission time.
    pub category_scores: CategoryScores,
}

impl AssessmentResult {
    /// Score the responses and estimate the spine age.
    pub fn from_responses(
        responses: &[Response],
        actual_age: u32,
        policy: SpineAgePolicy,
        date: NaiveDate,
    ) -> Self {
        Self::from_scores(
            CategoryScores::from_responses(responses),
            actual_age,
            policy,
            date,
        )
    }

    /// Estimate the spine age for an existing score snapshot.
    pub fn from_scores(
        category_scores: CategoryScores,
        actual_age: u32,
        policy: SpineAgePolicy,
        date: NaiveDate,
    ) -> Self {
        let total_score = category_scores.total();
        let spine_age = policy.estimate(total_score, actual_age);
        info!(total_score, spine_age, actual_age, %policy, "assessment complete");

        Self {
            id: Uuid::new_v4(),
            date,
            actual_age,
            total_score,
            spine_age,
            policy,
            category_scores,
        }
    }

    /// `actual_age - spine_age`, or `None` when no age was given.
    pub fn delta(&self) -> Option<i64> {
        (self.actual_age > 0).then(|| i64::from(self.actual_age) - i64::from(self.spine_age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::collector::{collect_responses, ScriptedAnswers};
    use crate::model::AnswerLabel;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn assess(label: AnswerLabel, actual_age: u32) -> AssessmentResult {
        let mut source = ScriptedAnswers::parse(
            &label.to_string().repeat(catalog::questions().len()),
            catalog::questions().len(),
        )
        .unwrap();
        let responses = collect_responses(catalog::questions(), &mut source).unwrap();
        AssessmentResult::from_responses(&responses, actual_age, SpineAgePolicy::default(), date())
    }

    #[test]
    fn thirty_year_old_all_a() {
        let result = assess(AnswerLabel::A, 30);
        assert_eq!(result.total_score, 22);
        assert_eq!(result.spine_age, 16);
        assert_eq!(result.delta(), Some(14));
    }

    #[test]
    fn fifteen_year_old_all_c() {
        let result = assess(AnswerLabel::C, 15);
        assert_eq!(result.total_score, 0);
        assert_eq!(result.spine_age, 22);
        assert_eq!(result.delta(), Some(-7));
    }

    #[test]
    fn sixty_year_old_at_cap_boundary() {
        let at_cap = AssessmentResult::from_scores(
            CategoryScores::new(6, 5, 10),
            60,
            SpineAgePolicy::AgeAdjusted,
            date(),
        );
        assert_eq!(at_cap.total_score, 21);
        assert_eq!(at_cap.spine_age, 30);

        let below_cap = AssessmentResult::from_scores(
            CategoryScores::new(6, 4, 10),
            60,
            SpineAgePolicy::AgeAdjusted,
            date(),
        );
        assert_eq!(below_cap.total_score, 20);
        assert_eq!(below_cap.spine_age, 24);
    }

    #[test]
    fn missing_age_still_estimates() {
        let result = assess(AnswerLabel::B, 0);
        assert_eq!(result.total_score, 11);
        assert!(result.spine_age > 0);
        assert_eq!(result.delta(), None);
    }

    #[test]
    fn identical_inputs_give_identical_estimates() {
        let a = assess(AnswerLabel::B, 42);
        let b = assess(AnswerLabel::B, 42);
        assert_eq!(a.spine_age, b.spine_age);
        assert_eq!(a.category_scores, b.category_scores);
        assert_ne!(a.id, b.id);
    }
}
