// ABOUTME: Reusable fakes for resolver and provider tests
// ABOUTME: Fixed in-memory implementations of the discovery seams

use crate::domain::Domain;
use crate::error::ResolveError;
use crate::traits::{DomainProvider, UserDirLookup};
use std::collections::HashMap;
use std::path::PathBuf;

/// Provider handing back a preset mapping, for tests that need full control
/// over which domains exist and where they point.
pub struct FixedProvider {
    family: &'static str,
    domains: HashMap<Domain, PathBuf>,
}

impl FixedProvider {
    pub fn new(family: &'static str, domains: HashMap<Domain, PathBuf>) -> Self {
        Self { family, domains }
    }

    /// Mapping with a single domain, the common case in locator tests.
    pub fn single(domain: Domain, dir: impl Into<PathBuf>) -> Self {
        let mut domains = HashMap::new();
        domains.insert(domain, dir.into());
        Self {
            family: "fixed",
            domains,
        }
    }
}

impl DomainProvider for FixedProvider {
    fn family(&self) -> &'static str {
        self.family
    }

    fn resolve(&self, _app: &str) -> Result<HashMap<Domain, PathBuf>, ResolveError> {
        Ok(self.domains.clone())
    }
}

/// Provider that always fails, for exercising construction errors.
pub struct FailingProvider;

impl DomainProvider for FailingProvider {
    fn family(&self) -> &'static str {
        "failing"
    }

    fn resolve(&self, _app: &str) -> Result<HashMap<Domain, PathBuf>, ResolveError> {
        Err(ResolveError::HomeNotFound)
    }
}

/// Lookup answering from a fixed key table.
#[derive(Default)]
pub struct FixedLookup {
    dirs: HashMap<String, PathBuf>,
}

impl FixedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, dir: impl Into<PathBuf>) -> Self {
        self.dirs.insert(key.to_string(), dir.into());
        self
    }
}

impl UserDirLookup for FixedLookup {
    fn user_dir(&self, key: &str) -> Option<PathBuf> {
        self.dirs.get(key).cloned()
    }
}

/// Lookup that knows nothing, forcing every home-relative fallback.
pub struct EmptyLookup;

impl UserDirLookup for EmptyLookup {
    fn user_dir(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}
