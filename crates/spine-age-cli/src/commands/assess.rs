//! The `spine-age assess` command.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::error;

use spine_age_core::assessment::AssessmentResult;
use spine_age_core::catalog;
use spine_age_core::collector::{collect_responses, ScriptedAnswers};
use spine_age_core::config::{load_config_from, ReportFormat};
use spine_age_core::estimator::SpineAgePolicy;
use spine_age_core::interpretation::Interpretation;
use spine_age_core::progress::{append_progress, ProgressRecord};
use spine_age_report::html::write_html_report;
use spine_age_report::pdf::write_pdf_report;

use crate::output::render_summary;
use crate::prompt::PromptAnswers;

/// Options for one submission.
#[derive(Debug, Default)]
pub struct AssessOptions {
    pub age: Option<u32>,
    pub email: Option<String>,
    pub answers: Option<String>,
    pub policy: Option<SpineAgePolicy>,
    pub report: bool,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    result: &'a AssessmentResult,
    interpretation: &'a Interpretation,
}

pub fn execute(opts: AssessOptions) -> Result<()> {
    let config = load_config_from(opts.config.as_deref())?;
    let policy = opts.policy.unwrap_or(config.policy);
    let format = opts.format.unwrap_or(config.format);
    let output_dir = opts.output.unwrap_or(config.output_dir);
    let log_dir = opts.log_dir.unwrap_or(config.log_dir);

    // Collect
    let questions = catalog::questions();
    let (responses, age, email) = match &opts.answers {
        Some(script) => {
            let mut source = ScriptedAnswers::parse(script, questions.len())?;
            let responses = collect_responses(questions, &mut source)?;
            (responses, opts.age, opts.email)
        }
        None => {
            // Prompts stay off stdout when it carries JSON.
            let prompt_out: Box<dyn Write> = if opts.json {
                Box::new(io::stderr())
            } else {
                Box::new(io::stdout())
            };
            let stdin = io::stdin();
            let mut prompt = PromptAnswers::new(stdin.lock(), prompt_out);
            let email = match opts.email {
                Some(e) => Some(e),
                None => prompt.ask_email()?,
            };
            let age = match opts.age {
                Some(a) => Some(a),
                None => prompt.ask_age()?,
            };
            let responses = collect_responses(questions, &mut prompt)?;
            prompt.finish()?;
            (responses, age, email)
        }
    };

    // Score, estimate, interpret
    let today = chrono::Local::now().date_naive();
    let result = AssessmentResult::from_responses(&responses, age.unwrap_or(0), policy, today);
    let interpretation = Interpretation::for_result(&result);

    if opts.json {
        let out = JsonOutput {
            result: &result,
            interpretation: &interpretation,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_summary(&result, &interpretation));
    }

    // Export actions. Each one fails on its own without hiding the result.
    let notice = |msg: String| {
        if opts.json {
            eprintln!("{msg}");
        } else {
            println!("{msg}");
        }
    };
    let mut failed = 0usize;

    if opts.report {
        if format.includes_pdf() {
            match write_pdf_report(&result, &output_dir) {
                Ok(path) => notice(format!("Report saved to: {}", path.display())),
                Err(e) => {
                    error!("PDF report export failed: {e:#}");
                    eprintln!("Report export failed: {e:#}");
                    failed += 1;
                }
            }
        }
        if format.includes_html() {
            match write_html_report(&result, &output_dir) {
                Ok(path) => notice(format!("HTML summary saved to: {}", path.display())),
                Err(e) => {
                    error!("HTML report export failed: {e:#}");
                    eprintln!("HTML export failed: {e:#}");
                    failed += 1;
                }
            }
        }
    }

    if let Some(email) = email.as_deref() {
        match append_progress(&log_dir, email, &ProgressRecord::from(&result)) {
            Ok(Some(_)) => notice(format!("Progress saved for: {}", email.trim())),
            Ok(None) => {}
            Err(e) => {
                error!("progress save failed: {e:#}");
                eprintln!("Progress save failed: {e:#}");
                failed += 1;
            }
        }
    }

    anyhow::ensure!(failed == 0, "{failed} export action(s) failed");
    Ok(())
}
