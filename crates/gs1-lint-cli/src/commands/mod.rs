//! Command implementations.

mod check;
mod explain;
mod list;

pub use check::{CheckCommand, CheckReport, CheckResult, ErrorDetail};
pub use explain::{ExplainCommand, LinterExplanation};
pub use list::{LinterSummary, ListCommand, ListOutput};
