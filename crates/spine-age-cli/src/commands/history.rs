//! The `spine-age history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use spine_age_core::config::load_config_from;
use spine_age_core::model::Category;
use spine_age_core::progress::{log_path, read_history};

pub fn execute(email: String, log_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let log_dir = log_dir.unwrap_or(config.log_dir);

    let Some(path) = log_path(&log_dir, &email)? else {
        anyhow::bail!("email must not be empty");
    };

    let records = read_history(&log_dir, &email)?;
    if records.is_empty() {
        println!("No progress recorded for {} ({})", email.trim(), path.display());
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["Date".to_string(), "Age".into(), "Spine Age".into()];
    header.extend(Category::ALL.iter().map(|c| c.name().to_string()));
    table.set_header(header);

    for record in &records {
        let mut row = vec![
            Cell::new(record.date.format("%Y-%m-%d")),
            Cell::new(record.actual_age),
            Cell::new(record.spine_age),
        ];
        row.extend(record.category_scores.iter().map(|(category, score)| {
            Cell::new(format!("{score} / {}", category.max_score()))
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!("{} submission(s) for {}", records.len(), email.trim());
    Ok(())
}
