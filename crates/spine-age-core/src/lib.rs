//! spine-age-core: question catalog, scoring and spine age estimation.
//!
//! This crate holds everything between the questionnaire and the rendered
//! report: the fixed catalog, the answer collection seam, scoring, the
//! estimator policies, interpretation and the per-email progress log.

pub mod assessment;
pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod estimator;
pub mod interpretation;
pub mod model;
pub mod progress;
pub mod scoring;
