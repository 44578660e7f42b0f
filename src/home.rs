// ABOUTME: Home directory lookup shared by all platform providers
// ABOUTME: Uses directories::BaseDirs; a missing home is a fatal resolve error

use cubby_core::ResolveError;
use directories::BaseDirs;
use std::path::PathBuf;

/// The user's home directory.
///
/// Every provider anchors its fallbacks here, so "no home" means resolution
/// cannot produce absolute paths and fails up front rather than resolving
/// relative ones.
pub(crate) fn home_dir() -> Result<PathBuf, ResolveError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ResolveError::HomeNotFound)
}
