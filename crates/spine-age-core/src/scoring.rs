//! Answer scoring and per-category accumulation.
//!
//! Every option is scored by its label alone: A = 2, B = 1, C = 0. The
//! wording of the option never matters, so questions with different option
//! sets score identically.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Category, Response};

/// Immutable per-category score snapshot.
///
/// Serializes as an object keyed by category name, in catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(rename = "Core and Posture")]
    core_posture: u32,
    #[serde(rename = "Strength and Balance")]
    strength_balance: u32,
    #[serde(rename = "Recovery and Lifestyle")]
    recovery_lifestyle: u32,
}

impl CategoryScores {
    pub fn new(core_posture: u32, strength_balance: u32, recovery_lifestyle: u32) -> Self {
        Self {
            core_posture,
            strength_balance,
            recovery_lifestyle,
        }
    }

    /// Fold a response sequence into a snapshot.
    pub fn from_responses(responses: &[Response]) -> Self {
        responses.iter().fold(Self::default(), |scores, response| {
            let points = response.selected.points();
            debug!(
                question = response.question.id,
                option = response.selected_text(),
                category = %response.question.category,
                points,
                "scored response"
            );
            scores.with_added(response.question.category, points)
        })
    }

    fn with_added(mut self, category: Category, points: u32) -> Self {
        *self.slot_mut(category) += points;
        self
    }

    fn slot_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::CorePosture => &mut self.core_posture,
            Category::StrengthBalance => &mut self.strength_balance,
            Category::RecoveryLifestyle => &mut self.recovery_lifestyle,
        }
    }

    /// Score for one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::CorePosture => self.core_posture,
            Category::StrengthBalance => self.strength_balance,
            Category::RecoveryLifestyle => self.recovery_lifestyle,
        }
    }

    /// Sum across all categories.
    pub fn total(&self) -> u32 {
        self.core_posture + self.strength_balance + self.recovery_lifestyle
    }

    /// `(category, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Returns true if every category lies within `0..=max_score`.
    pub fn is_within_bounds(&self) -> bool {
        self.iter().all(|(c, score)| score <= c.max_score())
    }
}
