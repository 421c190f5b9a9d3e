//! Response collection.
//!
//! The presentation layer implements [`AnswerSource`]; the core only asks it
//! for one label per question, in catalog order.

use anyhow::Result;
use tracing::debug;

use crate::error::AssessmentError;
use crate::model::{AnswerLabel, Question, Response};

// ---------------------------------------------------------------------------
// Answer source trait
// ---------------------------------------------------------------------------

/// Something that can select an answer for a question.
pub trait AnswerSource {
    /// Select one of the question's three options.
    ///
    /// `index` is the zero-based catalog position of the question.
    fn select(&mut self, index: usize, question: &'static Question) -> Result<AnswerLabel>;
}

/// Ask `source` for one answer per question and return the responses.
pub fn collect_responses<S: AnswerSource + ?Sized>(
    questions: &'static [Question],
    source: &mut S,
) -> Result<Vec<Response>> {
    let mut responses = Vec::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        let selected = source.select(index, question)?;
        debug!(question = question.id, %selected, "answer selected");
        responses.push(Response::new(question, selected));
    }
    Ok(responses)
}

// ---------------------------------------------------------------------------
// Scripted answers
// ---------------------------------------------------------------------------

/// Answers supplied up front as a string of labels, e.g. `"AABCA BBAAC A"`.
#[derive(Debug, Clone)]
pub struct ScriptedAnswers {
    labels: Vec<AnswerLabel>,
}

impl ScriptedAnswers {
    /// Parse a label string. Whitespace, commas and dashes are ignored.
    pub fn parse(script: &str, expected: usize) -> Result<Self, AssessmentError> {
        let labels = script
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
            .map(|c| AnswerLabel::from_option_text(&c.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        if labels.len() != expected {
            return Err(AssessmentError::AnswerCount {
                expected,
                actual: labels.len(),
            });
        }
        Ok(Self { labels })
    }

}

impl AnswerSource for ScriptedAnswers {
    fn select(&mut self, index: usize, _question: &'static Question) -> Result<AnswerLabel> {
        self.labels.get(index).copied().ok_or_else(|| {
            AssessmentError::AnswerCount {
                expected: index + 1,
                actual: self.labels.len(),
            }
            .into()
        })
    }
}
