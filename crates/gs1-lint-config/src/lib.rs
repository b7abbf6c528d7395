//! Configuration for the GS1 lint tools.
//!
//! Settings are read from `gs1lint.yaml`, with `${VAR}` / `${VAR:-default}`
//! expansion, then overlaid with `GS1LINT_*` environment variables.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;

// Tests touching the process environment must not interleave.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
