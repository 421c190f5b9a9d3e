//! Interactive terminal prompts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use spine_age_core::collector::AnswerSource;
use spine_age_core::estimator::validate_actual_age;
use spine_age_core::model::{AnswerLabel, Category, Question};

/// Reads answers line by line from `input`, writing prompts to `output`.
///
/// Empty input picks the default (first) option; end of input does the same
/// for every remaining question.
pub struct PromptAnswers<R, W> {
    input: R,
    output: W,
    current_category: Option<Category>,
}

impl<R: BufRead, W: Write> PromptAnswers<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            current_category: None,
        }
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("failed to flush prompt")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer from stdin")?;
        Ok((read > 0).then(|| line.trim().to_string()))
    }

    /// End the prompt block with a blank line.
    pub fn finish(&mut self) -> Result<()> {
        writeln!(self.output)?;
        self.output.flush().context("failed to flush prompt")
    }

    /// Ask for an optional email address. Empty input means none.
    pub fn ask_email(&mut self) -> Result<Option<String>> {
        write!(self.output, "Email to save your progress (optional): ")?;
        Ok(self.read_line()?.filter(|e| !e.is_empty()))
    }

    /// Ask for the actual age until a valid one (or nothing) is entered.
    pub fn ask_age(&mut self) -> Result<Option<u32>> {
        loop {
            write!(self.output, "Your actual age in years (10-100, optional): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(None);
            }
            match line.parse::<u32>().map_err(|e| e.to_string()).and_then(|age| {
                validate_actual_age(age).map_err(|e| e.to_string())
            }) {
                Ok(age) => return Ok(Some(age)),
                Err(e) => writeln!(self.output, "  {e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for PromptAnswers<R, W> {
    fn select(&mut self, index: usize, question: &'static Question) -> Result<AnswerLabel> {
        if self.current_category != Some(question.category) {
            writeln!(self.output, "\n### {}", question.category)?;
            self.current_category = Some(question.category);
        }

        writeln!(self.output, "\n{}. {}", index + 1, question.text)?;
        if let Some(hint) = question.hint {
            writeln!(self.output, "   ({hint})")?;
        }
        for (_, text) in question.options.iter() {
            writeln!(self.output, "   {text}")?;
        }

        loop {
            write!(self.output, "Answer [A/B/C, default A]: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(AnswerLabel::default());
            };
            if line.is_empty() {
                return Ok(AnswerLabel::default());
            }
            match AnswerLabel::from_option_text(&line) {
                Ok(label) if line.len() == 1 || line[1..].starts_with(')') => {
                    return Ok(label)
                }
                _ => writeln!(self.output, "  Please answer A, B or C.")?,
            }
        }
    }
}
