// ABOUTME: Per-user directory resolution with one provider per OS family
// ABOUTME: Re-exports the core model and wires platform detection into UserDirs

mod home;
pub mod provider;

// Re-export the platform-agnostic model from cubby-core
pub use cubby_core::testing;
pub use cubby_core::{Domain, DomainProvider, LocateError, ResolveError, UserDirLookup, UserDirs};

/// Resolve every domain for `app` on the current platform.
///
/// Detects the OS family once, selects its provider, and builds the full
/// mapping. Fails fatally on macOS-family systems and when no home directory
/// can be determined; per-call outcomes (unknown domain, creation failure)
/// surface later from [`UserDirs::locate_file`].
pub fn user_dirs(app: &str) -> Result<UserDirs, ResolveError> {
    let provider = provider::detect()?;
    UserDirs::from_provider(app, provider)
}
