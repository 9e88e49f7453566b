//! Quality metric functions.
//!
//! Each metric is a pure function over a borrowed `DataFrame` and yields a
//! score in [0, 1]. Metrics whose input can partly fail to parse return an
//! outcome type carrying the diagnostics next to the score:
//!
//! - [`completeness`]: share of non-null cells in the table
//! - [`uniqueness`]: distinct values of a column over the row count
//! - [`consistency`]: share of rows matching a date format
//! - [`freshness`]: share of the most recent values within a staleness threshold
//! - [`velocity`]: share of rows dated inside a recent window
//! - [`criticality`]: business-weighted completeness of selected columns

mod completeness;
mod consistency;
mod criticality;
pub mod dates;
mod freshness;
mod uniqueness;
mod velocity;

pub use completeness::{column_completeness, completeness};
pub use consistency::{ConsistencyOutcome, consistency};
pub use criticality::{ColumnCriticality, CriticalityOutcome, criticality};
pub use dates::DateCheck;
pub use freshness::{FreshnessOutcome, FreshnessParams, freshness};
pub use uniqueness::uniqueness;
pub use velocity::{VelocityOutcome, velocity};
