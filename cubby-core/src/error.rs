// ABOUTME: Typed errors for domain resolution and file location
// ABOUTME: Separates fatal construction failures from recoverable per-call outcomes

use crate::domain::Domain;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while building the domain mapping. These surface at
/// resolver construction (or rebuild) and never produce a partial mapping.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The OS family has no domain table defined (macOS family in this
    /// version). Failing beats resolving wrong paths.
    #[error("No user directories defined for this platform: {os}")]
    UnsupportedPlatform { os: String },

    /// Without a home directory no family can produce absolute paths.
    #[error("Could not determine the user's home directory")]
    HomeNotFound,
}

/// Per-call failures from the file locator.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The current platform's mapping has no entry for this domain.
    /// Recoverable; callers are expected to handle it.
    #[error("No directory for domain: {0}")]
    DomainNotFound(Domain),

    /// The relative name climbs out of the domain directory (leading `..`,
    /// absolute path, or a path prefix).
    #[error("Name {name:?} escapes the {domain} directory")]
    EscapesDomain { domain: Domain, name: String },

    /// Creating the containing directory chain failed.
    #[error("Failed to create directory {}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_not_found_names_the_domain() {
        let err = LocateError::DomainNotFound(Domain::Templates);
        assert_eq!(err.to_string(), "No directory for domain: templates");
    }

    #[test]
    fn test_create_dir_keeps_io_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LocateError::CreateDir {
            dir: PathBuf::from("/nope"),
            source,
        };
        assert!(err.to_string().contains("/nope"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_platform_names_the_os() {
        let err = ResolveError::UnsupportedPlatform {
            os: "macos".to_string(),
        };
        assert!(err.to_string().contains("macos"));
    }
}
