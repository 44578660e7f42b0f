// ABOUTME: Domain provider for OS families without native conventions
// ABOUTME: Minimal six-domain table anchored on a single dot-directory

use cubby_core::{Domain, DomainProvider, ResolveError};
use std::collections::HashMap;
use std::path::PathBuf;

/// Fallback for platforms with no documented convention: app-scoped domains
/// live under `~/.{app}`, documents and downloads under their conventional
/// home folders.
pub struct GenericProvider {
    home: PathBuf,
}

impl GenericProvider {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }
}

impl DomainProvider for GenericProvider {
    fn family(&self) -> &'static str {
        "generic"
    }

    fn resolve(&self, app: &str) -> Result<HashMap<Domain, PathBuf>, ResolveError> {
        let app_dir = self.home.join(format!(".{}", app));

        let mut domains = HashMap::new();
        domains.insert(Domain::Config, app_dir.join("config"));
        domains.insert(Domain::Data, app_dir.join("data"));
        domains.insert(Domain::Cache, app_dir.join("cache"));
        domains.insert(Domain::Runtime, app_dir.join("runtime"));
        domains.insert(Domain::Documents, self.home.join("Documents"));
        domains.insert(Domain::Downloads, self.home.join("Downloads"));
        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_scoped_domains_share_one_dot_directory() {
        let map = GenericProvider::new(PathBuf::from("/home/u"))
            .resolve("emacs")
            .unwrap();
        assert_eq!(map[&Domain::Config], PathBuf::from("/home/u/.emacs/config"));
        assert_eq!(map[&Domain::Data], PathBuf::from("/home/u/.emacs/data"));
        assert_eq!(map[&Domain::Cache], PathBuf::from("/home/u/.emacs/cache"));
        assert_eq!(map[&Domain::Runtime], PathBuf::from("/home/u/.emacs/runtime"));
    }

    #[test]
    fn test_documents_and_downloads_stay_under_home() {
        let map = GenericProvider::new(PathBuf::from("/home/u"))
            .resolve("emacs")
            .unwrap();
        assert_eq!(map[&Domain::Documents], PathBuf::from("/home/u/Documents"));
        assert_eq!(map[&Domain::Downloads], PathBuf::from("/home/u/Downloads"));
    }

    #[test]
    fn test_mapping_contains_exactly_the_generic_set() {
        let map = GenericProvider::new(PathBuf::from("/home/u"))
            .resolve("app")
            .unwrap();
        assert_eq!(map.len(), 6);
        assert!(!map.contains_key(&Domain::Pictures));
        assert!(!map.contains_key(&Domain::Public));
    }
}
