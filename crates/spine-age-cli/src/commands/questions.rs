//! The `spine-age questions` command.

use anyhow::Result;

use spine_age_core::catalog;
use spine_age_core::model::Category;

pub fn execute() -> Result<()> {
    let mut number = 0;
    for category in Category::ALL {
        println!(
            "{} ({} questions, max {} points)",
            category,
            category.question_count(),
            category.max_score()
        );
        for question in catalog::questions_in(category) {
            number += 1;
            println!("  {number}. {}", question.text);
            if let Some(hint) = question.hint {
                println!("     ({hint})");
            }
            for (_, text) in question.options.iter() {
                println!("       {text}");
            }
        }
        println!();
    }
    println!(
        "{} questions, total score 0-{}",
        catalog::questions().len(),
        catalog::max_total()
    );
    Ok(())
}
