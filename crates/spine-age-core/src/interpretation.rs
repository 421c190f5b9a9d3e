//! Turning an assessment into something a person can read.
//!
//! Produces the delta narrative, the per-category classification, the bar
//! chart data and the fixed explanation block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentResult;
use crate::model::Category;

/// Delta beyond which the spine counts as aging differently from the body.
const DELTA_TOLERANCE_YEARS: i64 = 5;

/// Upper bound of the chart's y-axis.
///
/// Shared by every category, so the two categories that top out at 6 never
/// fill the axis.
pub const CHART_Y_MAX: u32 = 10;

/// How the estimated spine age compares to the stated age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeltaNarrative {
    AgingBetter { years: u32 },
    AgingFaster { years: u32 },
    Matches,
}

impl DeltaNarrative {
    /// Narrate `actual_age - spine_age`. `None` when no age was given.
    pub fn for_result(result: &AssessmentResult) -> Option<Self> {
        result.delta().map(Self::from_delta)
    }

    pub fn from_delta(delta: i64) -> Self {
        let years = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
        if delta > DELTA_TOLERANCE_YEARS {
            DeltaNarrative::AgingBetter { years }
        } else if delta < -DELTA_TOLERANCE_YEARS {
            DeltaNarrative::AgingFaster { years }
        } else {
            DeltaNarrative::Matches
        }
    }

    pub fn message(&self) -> String {
        match self {
            DeltaNarrative::AgingBetter { years } => {
                format!("Your spine is aging better than your body by {years} years.")
            }
            DeltaNarrative::AgingFaster { years } => {
                format!("Your spine may be aging faster than your body by {years} years.")
            }
            DeltaNarrative::Matches => {
                "Your spine age matches your actual age. Great work!".to_string()
            }
        }
    }
}

impl fmt::Display for DeltaNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Strength or weakness of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Excellent,
    Moderate,
    #[serde(rename = "Needs attention")]
    NeedsAttention,
}

impl Classification {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Classification::Excellent
        } else if percent >= 50.0 {
            Classification::Moderate
        } else {
            Classification::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Excellent => "Excellent",
            Classification::Moderate => "Moderate",
            Classification::NeedsAttention => "Needs attention",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored and classified category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssessment {
    pub category: Category,
    pub score: u32,
    pub max: u32,
    pub percent: f64,
    pub classification: Classification,
}

impl CategoryAssessment {
    pub fn new(category: Category, score: u32) -> Self {
        let max = category.max_score();
        let percent = f64::from(score) / f64::from(max) * 100.0;
        Self {
            category,
            score,
            max,
            percent,
            classification: Classification::from_percent(percent),
        }
    }
}

/// Classify every category of a result, in catalog order.
pub fn classify(result: &AssessmentResult) -> Vec<CategoryAssessment> {
    result
        .category_scores
        .iter()
        .map(|(category, score)| CategoryAssessment::new(category, score))
        .collect()
}

/// One bar of the summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub category: Category,
    pub value: u32,
}

/// Bar chart of raw category scores on a fixed 0..=10 axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub bars: Vec<ChartBar>,
    pub y_max: u32,
    pub y_label: String,
}

impl ChartData {
    pub fn for_result(result: &AssessmentResult) -> Self {
        Self {
            bars: result
                .category_scores
                .iter()
                .map(|(category, value)| ChartBar { category, value })
                .collect(),
            y_max: CHART_Y_MAX,
            y_label: "Score out of 6/10".to_string(),
        }
    }
}

/// Fixed text shown under every result.
pub const DISCLAIMER: &str = "This questionnaire is an educational self-assessment, \
not a medical diagnosis. If you have persistent or severe back pain, numbness or \
weakness, consult a qualified healthcare professional.";

/// What each category measures.
pub fn category_description(category: Category) -> &'static str {
    match category {
        Category::CorePosture => {
            "Core and Posture looks at morning stiffness, deep squat tolerance and \
             thoracic rotation: how well your trunk moves and holds position."
        }
        Category::StrengthBalance => {
            "Strength and Balance looks at explosive loading, hip control and \
             single-leg stability: how well your spine tolerates dynamic load."
        }
        Category::RecoveryLifestyle => {
            "Recovery and Lifestyle looks at soreness, decompression habits, sleep \
             and sitting posture: how well your spine recovers between loads."
        }
    }
}

/// The full explanation block: disclaimer followed by one line per category.
pub fn explanation_block() -> Vec<String> {
    std::iter::once(DISCLAIMER.to_string())
        .chain(
            Category::ALL
                .into_iter()
                .map(|c| category_description(c).to_string()),
        )
        .collect()
}

/// Everything shown for one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub narrative: Option<DeltaNarrative>,
    pub categories: Vec<CategoryAssessment>,
    pub chart: ChartData,
    pub explanation: Vec<String>,
}

impl Interpretation {
    pub fn for_result(result: &AssessmentResult) -> Self {
        Self {
            narrative: DeltaNarrative::for_result(result),
            categories: classify(result),
            chart: ChartData::for_result(result),
            explanation: explanation_block(),
        }
    }

    /// Categories scoring below 50%.
    pub fn weaknesses(&self) -> impl Iterator<Item = &CategoryAssessment> {
        self.categories
            .iter()
            .filter(|c| c.classification == Classification::NeedsAttention)
    }
}
