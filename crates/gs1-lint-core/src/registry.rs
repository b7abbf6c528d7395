//! Name-keyed dispatch over linters.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::linter::{Linter, LinterId};
use crate::observe::{LintObserver, NoopObserver};
use crate::result::LintResult;

/// Registry of linters, looked up by name.
///
/// ```
/// use gs1_lint_core::{LintErrorKind, LinterRegistry};
///
/// let registry = LinterRegistry::with_defaults();
/// assert!(registry.lint("iso5218", b"9").unwrap().is_ok());
///
/// let err = registry.lint("iso5218", b"3").unwrap().unwrap_err();
/// assert_eq!(err.kind, LintErrorKind::InvalidBiologicalSexCode);
/// ```
#[derive(Clone)]
pub struct LinterRegistry {
    linters: HashMap<String, Arc<dyn Linter>>,
    observer: Arc<dyn LintObserver>,
}

impl LinterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            linters: HashMap::new(),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Create registry with every built-in linter.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register every built-in linter.
    pub fn register_defaults(&mut self) {
        for id in LinterId::all() {
            self.register(*id);
        }
    }

    /// Replace the observer that receives every outcome.
    pub fn with_observer(mut self, observer: impl LintObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Register a linter, replacing any linter of the same name.
    pub fn register<L>(&mut self, linter: L)
    where
        L: Linter + 'static,
    {
        let name = linter.name().to_string();
        self.linters.insert(name, Arc::new(linter));
    }

    /// Remove a linter by name.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Linter>> {
        self.linters.remove(name)
    }

    /// Get a linter by name.
    pub fn get(&self, name: &str) -> Option<&dyn Linter> {
        self.linters.get(name).map(|l| l.as_ref())
    }

    /// Whether a linter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.linters.contains_key(name)
    }

    /// Run a linter by name.
    ///
    /// The outer error is a caller mistake (unknown name); the inner
    /// result is the verdict on `data`.
    pub fn lint(&self, name: &str, data: &[u8]) -> Result<LintResult, RegistryError> {
        let linter = self.lookup(name)?;
        Ok(self.run(linter, data))
    }

    /// Run a linter over a batch of values, keeping input order.
    pub fn lint_all<I, T>(&self, name: &str, values: I) -> Result<Vec<LintResult>, RegistryError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let linter = self.lookup(name)?;
        Ok(values
            .into_iter()
            .map(|value| self.run(linter, value.as_ref()))
            .collect())
    }

    /// List all linter names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.linters.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered linters.
    pub fn len(&self) -> usize {
        self.linters.len()
    }

    /// Whether no linters are registered.
    pub fn is_empty(&self) -> bool {
        self.linters.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<&dyn Linter, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::UnknownLinter {
            name: name.to_string(),
            suggestions: self.find_similar(name),
        })
    }

    fn run(&self, linter: &dyn Linter, data: &[u8]) -> LintResult {
        let result = linter.lint(data);
        self.observer.observe(linter.name(), data, &result);
        result
    }

    /// Registered names close to `name`, for error messages.
    pub fn find_similar(&self, name: &str) -> Vec<String> {
        let lower = name.to_lowercase();
        self.names()
            .into_iter()
            .filter(|k| {
                k.contains(lower.as_str())
                    || (!k.is_empty() && lower.contains(k))
                    || levenshtein(k, &lower) <= 2
            })
            .take(3)
            .map(str::to_string)
            .collect()
    }
}

impl Default for LinterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for LinterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinterRegistry")
            .field("linters", &self.names())
            .finish_non_exhaustive()
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
