//! Core data model types for spine-age.
//!
//! Categories, answer labels, option sets, questions and responses. The
//! catalog itself lives in [`crate::catalog`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AssessmentError;

/// Points awarded per question for the best answer.
pub const MAX_POINTS_PER_QUESTION: u32 = 2;

/// One of the three fixed question groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Core and Posture")]
    CorePosture,
    #[serde(rename = "Strength and Balance")]
    StrengthBalance,
    #[serde(rename = "Recovery and Lifestyle")]
    RecoveryLifestyle,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 3] = [
        Category::CorePosture,
        Category::StrengthBalance,
        Category::RecoveryLifestyle,
    ];

    /// Human-readable category name.
    pub fn name(self) -> &'static str {
        match self {
            Category::CorePosture => "Core and Posture",
            Category::StrengthBalance => "Strength and Balance",
            Category::RecoveryLifestyle => "Recovery and Lifestyle",
        }
    }

    /// Number of catalog questions in this category.
    pub fn question_count(self) -> u32 {
        match self {
            Category::CorePosture | Category::StrengthBalance => 3,
            Category::RecoveryLifestyle => 5,
        }
    }

    /// Highest score the category can reach.
    pub fn max_score(self) -> u32 {
        self.question_count() * MAX_POINTS_PER_QUESTION
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The label of a multiple-choice option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLabel {
    #[default]
    A,
    B,
    C,
}

impl AnswerLabel {
    /// All labels in display order. The first one is the default selection.
    pub const ALL: [AnswerLabel; 3] = [AnswerLabel::A, AnswerLabel::B, AnswerLabel::C];

    /// Points awarded for selecting this label.
    pub fn points(self) -> u32 {
        match self {
            AnswerLabel::A => 2,
            AnswerLabel::B => 1,
            AnswerLabel::C => 0,
        }
    }

    /// Position of the label within an option set.
    pub fn index(self) -> usize {
        match self {
            AnswerLabel::A => 0,
            AnswerLabel::B => 1,
            AnswerLabel::C => 2,
        }
    }

    /// Parse a label from the first character of an option string
    /// (e.g. `"B) Sometimes"`).
    pub fn from_option_text(text: &str) -> Result<Self, AssessmentError> {
        match text.trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(AnswerLabel::A),
            Some('B') => Ok(AnswerLabel::B),
            Some('C') => Ok(AnswerLabel::C),
            _ => Err(AssessmentError::UnknownLabel(text.to_string())),
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerLabel::A => write!(f, "A"),
            AnswerLabel::B => write!(f, "B"),
            AnswerLabel::C => write!(f, "C"),
        }
    }
}

/// Three option texts, labeled A, B and C in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    pub options: [&'static str; 3],
}

impl OptionSet {
    /// Option text for a label.
    pub fn text(&self, label: AnswerLabel) -> &'static str {
        self.options[label.index()]
    }

    /// Iterate `(label, text)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AnswerLabel, &'static str)> + '_ {
        AnswerLabel::ALL.into_iter().map(|l| (l, self.text(l)))
    }
}

/// A single catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable identifier (e.g. "morning-stiffness").
    pub id: &'static str,
    /// Question text shown to the respondent.
    pub text: &'static str,
    /// The category this question contributes to.
    pub category: Category,
    /// The answer options for this question.
    pub options: &'static OptionSet,
    /// Optional explanatory hint.
    pub hint: Option<&'static str>,
}

/// The selected answer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub question: &'static Question,
    pub selected: AnswerLabel,
}

impl Response {
    pub fn new(question: &'static Question, selected: AnswerLabel) -> Self {
        Self { question, selected }
    }

    /// The option text that was selected.
    pub fn selected_text(&self) -> &'static str {
        self.question.options.text(self.selected)
    }
}
