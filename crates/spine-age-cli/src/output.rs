//! Terminal rendering of an assessment.

use comfy_table::{Cell, Table};

use spine_age_core::assessment::AssessmentResult;
use spine_age_core::interpretation::{ChartData, Interpretation};

/// Characters per chart point.
const CHART_SCALE: usize = 3;

/// Full text summary: spine age, narrative, table, chart, explanation.
pub fn render_summary(result: &AssessmentResult, interpretation: &Interpretation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Your estimated functional spine age: {} years\n",
        result.spine_age
    ));
    if let Some(narrative) = &interpretation.narrative {
        out.push_str(&format!("{narrative}\n"));
    }

    out.push_str("\nSection scores\n");
    out.push_str(&category_table(interpretation).to_string());
    out.push('\n');
    let focus: Vec<&str> = interpretation
        .weaknesses()
        .map(|c| c.category.name())
        .collect();
    if !focus.is_empty() {
        out.push_str(&format!("Focus areas: {}\n", focus.join(", ")));
    }

    out.push_str("\nSection score overview\n");
    out.push_str(&render_chart(&interpretation.chart));

    out.push_str("\nWhat this means\n");
    for paragraph in &interpretation.explanation {
        out.push_str(&format!("  {paragraph}\n"));
    }
    out
}

fn category_table(interpretation: &Interpretation) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Score", "Percent", "Status"]);
    for c in &interpretation.categories {
        table.add_row(vec![
            Cell::new(c.category.name()),
            Cell::new(format!("{} / {}", c.score, c.max)),
            Cell::new(format!("{:.1}%", c.percent)),
            Cell::new(c.classification.label()),
        ]);
    }
    table
}

/// Horizontal text bar chart on the fixed `0..=y_max` axis.
pub fn render_chart(chart: &ChartData) -> String {
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.category.name().len())
        .max()
        .unwrap_or(0);
    let axis_len = chart.y_max as usize * CHART_SCALE;

    let mut out = String::new();
    for bar in &chart.bars {
        let filled = (bar.value.min(chart.y_max) as usize) * CHART_SCALE;
        out.push_str(&format!(
            "  {:<label_width$} |{}{}| {}\n",
            bar.category.name(),
            "#".repeat(filled),
            " ".repeat(axis_len - filled),
            bar.value
        ));
    }
    out.push_str(&format!(
        "  {:<label_width$}  0{:>width$}\n",
        "",
        chart.y_max,
        width = axis_len - 1
    ));
    out.push_str(&format!("  ({})\n", chart.y_label));
    out
}
