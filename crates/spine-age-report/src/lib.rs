//! spine-age-report: PDF and HTML report generation.

pub mod html;
pub mod pdf;
