//! Single-page PDF report.
//!
//! One A4 page with the built-in Helvetica font and a single text content
//! stream, serialized with `pdf-writer`. Building the bytes is pure;
//! [`write_pdf_report`] is the separate step that puts them on disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::info;

use spine_age_core::assessment::AssessmentResult;

/// File name the report is offered under.
pub const PDF_REPORT_FILE_NAME: &str = "Spine_Age_Report.pdf";

/// Report title.
pub const REPORT_TITLE: &str = "Functional Spine Age Report";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const LEFT_MARGIN: f32 = 56.0;
const TOP_MARGIN: f32 = 72.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 28.0;
/// Extra space between the labeled fields and the category lines.
const SECTION_GAP: f32 = 14.0;
/// Rough Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

const FONT_NAME: Name<'static> = Name(b"F1");

/// The labeled fields and category lines, in page order (title excluded).
pub fn report_lines(result: &AssessmentResult) -> (Vec<String>, Vec<String>) {
    let fields = vec![
        format!("Date: {}", result.date.format("%Y-%m-%d")),
        format!("Actual Age: {} years", result.actual_age),
        format!("Estimated Spine Age: {} years", result.spine_age),
    ];
    let categories = result
        .category_scores
        .iter()
        .map(|(category, score)| format!("{category}: {score} / {}", category.max_score()))
        .collect();
    (fields, categories)
}

/// Build the report document and return its bytes.
pub fn build_pdf(result: &AssessmentResult) -> Vec<u8> {
    let (fields, categories) = report_lines(result);

    let mut content = Content::new();
    let title_width = REPORT_TITLE.len() as f32 * TITLE_SIZE * AVG_GLYPH_WIDTH;
    let mut y = PAGE_HEIGHT - TOP_MARGIN;
    show_line(
        &mut content,
        TITLE_SIZE,
        (PAGE_WIDTH - title_width) / 2.0,
        y,
        REPORT_TITLE,
    );

    for line in &fields {
        y -= LINE_HEIGHT;
        show_line(&mut content, BODY_SIZE, LEFT_MARGIN, y, line);
    }
    y -= SECTION_GAP;
    for line in &categories {
        y -= LINE_HEIGHT;
        show_line(&mut content, BODY_SIZE, LEFT_MARGIN, y, line);
    }

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().fonts().pair(FONT_NAME, font_id);
    page.finish();

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
    pdf.stream(content_id, &content.finish());
    pdf.finish()
}

/// Write the report into `dir` under [`PDF_REPORT_FILE_NAME`].
///
/// The document is generated into a temporary file in the same directory and
/// then renamed, so an existing report is never left half-written.
pub fn write_pdf_report(result: &AssessmentResult, dir: &Path) -> Result<PathBuf> {
    let bytes = build_pdf(result);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory {}", dir.display()))?;

    let path = dir.join(PDF_REPORT_FILE_NAME);
    let mut working = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create working file in {}", dir.display()))?;
    working
        .write_all(&bytes)
        .context("failed to write PDF report")?;
    working
        .persist(&path)
        .with_context(|| format!("failed to save PDF report to {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "PDF report written");
    Ok(path)
}

fn show_line(content: &mut Content, size: f32, x: f32, y: f32, text: &str) {
    let text = standard_text(text);
    content.begin_text();
    content.set_font(FONT_NAME, size);
    content.next_line(x, y);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

/// Restrict text to what the standard Helvetica encoding can show.
/// Non-ASCII and control characters become `?`.
fn standard_text(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
