// ABOUTME: UserDirs resolver mapping domains to directories and locating files
// ABOUTME: Owns one DomainProvider and an encapsulated domain-to-path table

use crate::domain::Domain;
use crate::error::{LocateError, ResolveError};
use crate::traits::DomainProvider;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Per-user directory table for one application.
///
/// Construction resolves the full mapping through the injected provider, so a
/// built `UserDirs` always holds a complete table for its OS family.
/// [`UserDirs::rebuild`] throws the table away and resolves it again from
/// current environment state. The mapping itself stays private; read access
/// goes through [`UserDirs::dir`] and [`UserDirs::domains`].
pub struct UserDirs {
    app: String,
    provider: Box<dyn DomainProvider>,
    domains: HashMap<Domain, PathBuf>,
}

impl UserDirs {
    /// Resolve every domain for `app` through `provider`.
    pub fn from_provider(
        app: &str,
        provider: Box<dyn DomainProvider>,
    ) -> Result<Self, ResolveError> {
        let domains = provider.resolve(app)?;
        tracing::debug!(
            app = %app,
            family = provider.family(),
            domains = domains.len(),
            "resolved domain mapping"
        );
        Ok(Self {
            app: app.to_string(),
            provider,
            domains,
        })
    }

    /// Application name the app-scoped domains are keyed on.
    pub fn app(&self) -> &str {
        &self.app
    }

    /// OS-family tag of the active provider.
    pub fn family(&self) -> &'static str {
        self.provider.family()
    }

    /// Directory for one domain, if the current platform defines it.
    pub fn dir(&self, domain: Domain) -> Option<&Path> {
        self.domains.get(&domain).map(PathBuf::as_path)
    }

    /// All resolved `(domain, directory)` pairs, in no particular order.
    pub fn domains(&self) -> impl Iterator<Item = (Domain, &Path)> + '_ {
        self.domains.iter().map(|(domain, dir)| (*domain, dir.as_path()))
    }

    /// Resolve the mapping again from current environment state, replacing
    /// the old table wholesale. Paths handed out before the rebuild keep
    /// their old values.
    pub fn rebuild(&mut self) -> Result<(), ResolveError> {
        self.domains = self.provider.resolve(&self.app)?;
        tracing::debug!(
            app = %self.app,
            domains = self.domains.len(),
            "rebuilt domain mapping"
        );
        Ok(())
    }

    /// Absolute path for `name` inside `domain`'s directory, with the
    /// containing directory chain created if missing.
    ///
    /// The file itself is never touched or checked; only its directory is
    /// guaranteed to exist afterwards. A domain missing from the platform's
    /// mapping reports [`LocateError::DomainNotFound`]; a name that climbs
    /// out of the domain directory reports [`LocateError::EscapesDomain`].
    /// `name` may contain subdirectory segments; an empty name resolves to
    /// the domain directory itself.
    pub fn locate_file(&self, domain: Domain, name: &str) -> Result<PathBuf, LocateError> {
        let dir = self
            .domains
            .get(&domain)
            .ok_or(LocateError::DomainNotFound(domain))?;
        let clean = clean_relative(Path::new(name)).ok_or_else(|| LocateError::EscapesDomain {
            domain,
            name: name.to_string(),
        })?;

        let containing = match clean.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => dir.join(parent),
            _ => dir.clone(),
        };
        std::fs::create_dir_all(&containing).map_err(|source| LocateError::CreateDir {
            dir: containing.clone(),
            source,
        })?;
        tracing::debug!(
            domain = %domain,
            dir = %containing.display(),
            "ensured containing directory"
        );

        if clean.as_os_str().is_empty() {
            Ok(dir.clone())
        } else {
            Ok(dir.join(clean))
        }
    }

    /// [`UserDirs::locate_file`] fixed to [`Domain::Config`].
    pub fn config_file(&self, name: &str) -> Result<PathBuf, LocateError> {
        self.locate_file(Domain::Config, name)
    }

    /// [`UserDirs::locate_file`] fixed to [`Domain::Data`].
    pub fn data_file(&self, name: &str) -> Result<PathBuf, LocateError> {
        self.locate_file(Domain::Data, name)
    }

    /// [`UserDirs::locate_file`] fixed to [`Domain::Cache`].
    pub fn cache_file(&self, name: &str) -> Result<PathBuf, LocateError> {
        self.locate_file(Domain::Cache, name)
    }

    /// [`UserDirs::locate_file`] fixed to [`Domain::Runtime`].
    pub fn runtime_file(&self, name: &str) -> Result<PathBuf, LocateError> {
        self.locate_file(Domain::Runtime, name)
    }

    /// [`UserDirs::locate_file`] fixed to [`Domain::Documents`].
    pub fn document_file(&self, name: &str) -> Result<PathBuf, LocateError> {
        self.locate_file(Domain::Documents, name)
    }
}

/// Collapse `.` and `..` lexically. `None` when the name is absolute, carries
/// a path prefix, or climbs above its starting point; inner `..` that stays
/// inside is allowed and collapsed.
fn clean_relative(name: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();

    for component in name.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(out)
}
