//! HTML summary generator.
//!
//! Produces a self-contained HTML file with all CSS inlined and the bar chart
//! drawn as inline SVG.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use spine_age_core::assessment::AssessmentResult;
use spine_age_core::interpretation::{ChartData, Classification, Interpretation};
use spine_age_core::model::Category;

use crate::pdf::REPORT_TITLE;

/// File name the HTML summary is written under.
pub const HTML_REPORT_FILE_NAME: &str = "Spine_Age_Report.html";

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML summary for an assessment.
pub fn generate_html(result: &AssessmentResult) -> String {
    let interpretation = Interpretation::for_result(result);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{REPORT_TITLE}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{REPORT_TITLE}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"meta\">{} | actual age {} | policy {}</p>\n",
        result.date.format("%Y-%m-%d"),
        result.actual_age,
        result.policy
    ));
    html.push_str(&format!(
        "<p class=\"spine-age\">Estimated functional spine age: <strong>{} years</strong></p>\n",
        result.spine_age
    ));
    if let Some(narrative) = &interpretation.narrative {
        html.push_str(&format!(
            "<p class=\"narrative\">{}</p>\n",
            html_escape(&narrative.message())
        ));
    }
    html.push_str("</header>\n");

    // Chart and classification
    html.push_str("<section class=\"overview\">\n");
    html.push_str("<h2>Section Score Overview</h2>\n");
    html.push_str(&generate_bar_chart(&interpretation.chart));

    html.push_str("<table class=\"summary\">\n");
    html.push_str(
        "<thead><tr><th>Category</th><th>Score</th><th>Percent</th><th>Status</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for c in &interpretation.categories {
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{} / {}</td><td>{:.1}%</td><td>{}</td></tr>\n",
            status_class(c.classification),
            html_escape(c.category.name()),
            c.score,
            c.max,
            c.percent,
            c.classification
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Explanation
    html.push_str("<section class=\"explanation\">\n");
    html.push_str("<h2>What this means</h2>\n");
    for paragraph in &interpretation.explanation {
        html.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(result).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the HTML summary into `dir` under [`HTML_REPORT_FILE_NAME`].
pub fn write_html_report(result: &AssessmentResult, dir: &Path) -> Result<PathBuf> {
    let html = generate_html(result);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory {}", dir.display()))?;
    let path = dir.join(HTML_REPORT_FILE_NAME);
    std::fs::write(&path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    info!(path = %path.display(), "HTML report written");
    Ok(path)
}

fn status_class(classification: Classification) -> &'static str {
    match classification {
        Classification::Excellent => "excellent",
        Classification::Moderate => "moderate",
        Classification::NeedsAttention => "attention",
    }
}

fn bar_color(category: Category) -> &'static str {
    match category {
        Category::CorePosture => "#4CAF50",
        Category::StrengthBalance => "#FFC107",
        Category::RecoveryLifestyle => "#2196F3",
    }
}

/// Vertical bar chart. The y-axis always spans `0..=chart.y_max`.
fn generate_bar_chart(chart: &ChartData) -> String {
    let plot_height = 250;
    let bar_width = 90;
    let gap = 40;
    let axis_x = 60;
    let top = 20;
    let label_height = 40;

    let plot_width = chart.bars.len() * (bar_width + gap) + gap;
    let y_max = chart.y_max.max(1) as usize;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        axis_x + plot_width,
        top + plot_height + label_height
    );

    // Axis with a tick every 2 points
    svg.push_str(&format!(
        "  <line x1=\"{axis_x}\" y1=\"{top}\" x2=\"{axis_x}\" y2=\"{}\" stroke=\"currentColor\"/>\n",
        top + plot_height
    ));
    for tick in (0..=y_max).step_by(2) {
        let y = top + plot_height - tick * plot_height / y_max;
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{y}\" font-size=\"12\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{tick}</text>\n",
            axis_x - 6
        ));
    }
    svg.push_str(&format!(
        "  <text x=\"14\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" transform=\"rotate(-90 14 {})\" text-anchor=\"middle\">{}</text>\n",
        top + plot_height / 2,
        top + plot_height / 2,
        html_escape(&chart.y_label)
    ));

    for (i, bar) in chart.bars.iter().enumerate() {
        let x = axis_x + gap + i * (bar_width + gap);
        let value = (bar.value as usize).min(y_max);
        let height = value * plot_height / y_max;
        let y = top + plot_height - height;

        svg.push_str(&format!(
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{bar_width}\" height=\"{height}\" fill=\"{}\" rx=\"4\"><title>{}: {}</title></rect>\n",
            bar_color(bar.category),
            html_escape(bar.category.name()),
            bar.value
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>\n",
            x + bar_width / 2,
            top + plot_height + 18,
            html_escape(bar.category.name())
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --good: #dcfce7; --mid: #fef9c3; --bad: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --good: #064e3b; --mid: #713f12; --bad: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; padding: 2rem; max-width: 48rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.spine-age { font-size: 1.4rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.excellent { background: var(--good); }
.moderate { background: var(--mid); }
.attention { background: var(--bad); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spine_age_core::estimator::SpineAgePolicy;
    use spine_age_core::interpretation::DISCLAIMER;
    use spine_age_core::scoring::CategoryScores;

    fn make_result(actual_age: u32) -> AssessmentResult {
        AssessmentResult::from_scores(
            CategoryScores::new(6, 3, 4),
            actual_age,
            SpineAgePolicy::AgeAdjusted,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&make_result(45));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Functional Spine Age Report"));
        assert!(html.contains("2025-03-14"));
        assert!(html.contains("<strong>50 years</strong>"));
        assert!(html.contains("Strength and Balance"));
        assert!(html.contains("Needs attention"));
        assert!(html.contains("Excellent"));
        assert!(html.contains(&html_escape(DISCLAIMER)));
        assert!(html.contains("Raw JSON Data"));
        assert!(html.contains("&quot;spine_age&quot;: 50"));
    }

    #[test]
    fn narrative_omitted_without_age() {
        assert!(!generate_html(&make_result(0)).contains("class=\"narrative\""));
        assert!(generate_html(&make_result(45)).contains("class=\"narrative\""));
    }

    #[test]
    fn chart_axis_is_fixed_at_ten() {
        let html = generate_html(&make_result(45));
        // Top tick is 10 even though two categories max out at 6.
        assert!(html.contains(">10</text>"));
        // Full-height bar for Core and Posture would be 250; 6/10 of it is 150.
        assert!(html.contains("height=\"150\" fill=\"#4CAF50\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_html_report(&make_result(45), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), HTML_REPORT_FILE_NAME);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }

    #[test]
    fn escapes_html() {
        assert_eq!(html_escape("<a & 'b'>"), "&lt;a &amp; &#x27;b&#x27;&gt;");
    }
}
