// ABOUTME: Platform-agnostic model for per-user directory resolution
// ABOUTME: Domain enum, typed errors, provider traits, and the UserDirs resolver

pub mod domain;
pub mod error;
pub mod resolver;
pub mod testing;
pub mod traits;

pub use domain::Domain;
pub use error::{LocateError, ResolveError};
pub use resolver::UserDirs;

// Re-export the seams so providers and fakes share one import path
pub use traits::{DomainProvider, UserDirLookup};
