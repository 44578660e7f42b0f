// ABOUTME: Seams between the resolver and platform-specific discovery
// ABOUTME: One DomainProvider per OS family, with an injectable UserDirLookup

use crate::domain::Domain;
use crate::error::ResolveError;
use std::collections::HashMap;
use std::path::PathBuf;

/// Builds the domain-to-directory mapping for one OS family.
///
/// Implementations read environment variables and may consult a
/// [`UserDirLookup`]; they never create directories. `resolve` must return
/// exactly the domain set documented for the family, every value an absolute
/// path, and must be idempotent modulo environment changes — calling it again
/// rebuilds the mapping from current environment state.
pub trait DomainProvider: Send + Sync {
    /// Stable tag for the OS family ("xdg", "windows", "generic").
    fn family(&self) -> &'static str;

    /// Build the mapping for the application named `app`.
    fn resolve(&self, app: &str) -> Result<HashMap<Domain, PathBuf>, ResolveError>;
}

/// Discovery of well-known user directories (documents, pictures, ...).
///
/// Real implementations shell out to `xdg-user-dir` or read the Windows
/// "User Shell Folders" registry values. `None` means the key is unknown or
/// the facility is unavailable; the caller then uses its documented
/// home-relative fallback. Never an error.
pub trait UserDirLookup: Send + Sync {
    fn user_dir(&self, key: &str) -> Option<PathBuf>;
}
