//! GS1 data value linters.
//!
//! A linter checks one candidate value (the raw bytes of a GS1 Application
//! Identifier's data) against one rule. Linters are plain functions:
//!
//! - `fn(&[u8]) -> LintResult`
//! - total and panic-free for every input, including the empty value
//! - on failure, an [`ErrorRange`] that always lies within the input
//!
//! The built-in linters live in [`linters`]. [`LinterId`] enumerates them as
//! data, and [`LinterRegistry`] dispatches by name, optionally reporting
//! every outcome to a [`LintObserver`].
//!
//! ```
//! use gs1_lint_core::{linters, ErrorRange, LintErrorKind};
//!
//! assert!(linters::iso5218(b"2").is_ok());
//!
//! let err = linters::iso5218(b"3").unwrap_err();
//! assert_eq!(err.kind, LintErrorKind::InvalidBiologicalSexCode);
//! assert_eq!(err.range, ErrorRange::at(0));
//! ```

#![warn(missing_docs)]

pub mod charset;
pub mod error;
pub mod linter;
pub mod linters;
pub mod observe;
pub mod range;
pub mod registry;
pub mod result;

#[cfg(test)]
mod testing;

// Re-exports
pub use error::{LintError, LintErrorKind, RegistryError};
pub use linter::{FnLinter, LintFn, Linter, LinterId};
pub use observe::{LintObserver, NoopObserver, TracingObserver};
pub use range::ErrorRange;
pub use registry::LinterRegistry;
pub use result::{fail, LintResult, LintResultExt};
