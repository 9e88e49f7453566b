//! Report generation module.
//!
//! Two renderings of a [`QualityAssessment`](crate::scoring::QualityAssessment):
//! - the seven-line text summary (default CLI output)
//! - a [`QualityReport`] serialized as JSON (`--json` CLI flag)
//!
//! # Example
//!
//! ```rust,ignore
//! use dq_score::reporting::ReportGenerator;
//!
//! print!("{}", ReportGenerator::render_text(&assessment));
//!
//! let report = ReportGenerator::build_report("customers.csv", &assessment, &weights);
//! println!("{}", ReportGenerator::render_json(&report)?);
//! ```

mod generator;

pub use generator::{OVERALL_LABEL, QualityReport, ReportGenerator};
