// ABOUTME: Domain provider for XDG-style systems (Linux and the BSDs)
// ABOUTME: XDG_* base dirs plus xdg-user-dir lookups for the media folders

use cubby_core::{Domain, DomainProvider, ResolveError, UserDirLookup};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Resolves the full eleven-domain table following the XDG Base Directory
/// conventions: app-scoped config/data/cache/runtime from `XDG_*` variables
/// (or their documented home-relative defaults), media folders from the
/// injected [`UserDirLookup`] with home-relative fallbacks.
pub struct XdgProvider {
    home: PathBuf,
    user_dirs: Box<dyn UserDirLookup>,
}

impl XdgProvider {
    pub fn new(home: PathBuf, user_dirs: Box<dyn UserDirLookup>) -> Self {
        Self { home, user_dirs }
    }

    /// Environment override when set to an absolute path, else the
    /// documented default under home. Relative values are ignored, per the
    /// XDG rule.
    fn base_dir(&self, var: &str, default: &str) -> PathBuf {
        match std::env::var_os(var).map(PathBuf::from) {
            Some(dir) if dir.is_absolute() => dir,
            _ => self.home.join(default),
        }
    }

    fn media_dir(&self, key: &str, fallback: &str) -> PathBuf {
        match self.user_dirs.user_dir(key) {
            Some(dir) if dir.is_absolute() => dir,
            _ => self.home.join(fallback),
        }
    }
}

impl DomainProvider for XdgProvider {
    fn family(&self) -> &'static str {
        "xdg"
    }

    fn resolve(&self, app: &str) -> Result<HashMap<Domain, PathBuf>, ResolveError> {
        let mut domains = HashMap::new();
        domains.insert(
            Domain::Config,
            self.base_dir("XDG_CONFIG_HOME", ".config").join(app),
        );
        domains.insert(
            Domain::Data,
            self.base_dir("XDG_DATA_HOME", ".local/share").join(app),
        );
        domains.insert(
            Domain::Cache,
            self.base_dir("XDG_CACHE_HOME", ".cache").join(app),
        );
        // The XDG spec defines no fallback for XDG_RUNTIME_DIR; ~/.local/run
        // keeps the runtime domain resolvable everywhere.
        domains.insert(
            Domain::Runtime,
            self.base_dir("XDG_RUNTIME_DIR", ".local/run").join(app),
        );
        domains.insert(Domain::Documents, self.media_dir("DOCUMENTS", "Documents"));
        domains.insert(Domain::Pictures, self.media_dir("PICTURES", "Pictures"));
        domains.insert(Domain::Music, self.media_dir("MUSIC", "Music"));
        domains.insert(Domain::Videos, self.media_dir("VIDEOS", "Videos"));
        domains.insert(Domain::Downloads, self.media_dir("DOWNLOAD", "Downloads"));
        domains.insert(Domain::Public, self.media_dir("PUBLICSHARE", "Public"));
        domains.insert(Domain::Templates, self.media_dir("TEMPLATES", "Templates"));
        Ok(domains)
    }
}

/// Queries the `xdg-user-dir` helper shipped with xdg-user-dirs.
///
/// A missing or failing helper is not an error; the provider falls back to
/// the documented home-relative defaults.
pub struct XdgUserDirTool;

impl UserDirLookup for XdgUserDirTool {
    fn user_dir(&self, key: &str) -> Option<PathBuf> {
        let output = Command::new("xdg-user-dir").arg(key).output().ok()?;
        if !output.status.success() {
            tracing::debug!(key = %key, "xdg-user-dir failed, using fallback");
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.trim();
        if line.is_empty() {
            None
        } else {
            Some(PathBuf::from(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubby_core::testing::{EmptyLookup, FixedLookup};
    use serial_test::serial;

    fn clear_xdg_env_vars() {
        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::remove_var("XDG_DATA_HOME");
        std::env::remove_var("XDG_CACHE_HOME");
        std::env::remove_var("XDG_RUNTIME_DIR");
    }

    fn provider(home: &str) -> XdgProvider {
        XdgProvider::new(PathBuf::from(home), Box::new(EmptyLookup))
    }

    #[test]
    #[serial]
    fn test_defaults_without_env_or_helper() {
        clear_xdg_env_vars();

        let map = provider("/home/u").resolve("emacs").unwrap();
        assert_eq!(map[&Domain::Config], PathBuf::from("/home/u/.config/emacs"));
        assert_eq!(map[&Domain::Data], PathBuf::from("/home/u/.local/share/emacs"));
        assert_eq!(map[&Domain::Cache], PathBuf::from("/home/u/.cache/emacs"));
        assert_eq!(map[&Domain::Runtime], PathBuf::from("/home/u/.local/run/emacs"));
        assert_eq!(map[&Domain::Documents], PathBuf::from("/home/u/Documents"));
        assert_eq!(map[&Domain::Downloads], PathBuf::from("/home/u/Downloads"));
        assert_eq!(map[&Domain::Public], PathBuf::from("/home/u/Public"));
        assert_eq!(map[&Domain::Templates], PathBuf::from("/home/u/Templates"));
    }

    #[test]
    #[serial]
    fn test_mapping_contains_exactly_the_xdg_set() {
        clear_xdg_env_vars();

        let map = provider("/home/u").resolve("app").unwrap();
        assert_eq!(map.len(), 11);
        for domain in Domain::ALL {
            assert!(map.contains_key(&domain), "missing {}", domain);
        }
    }

    #[test]
    #[serial]
    fn test_absolute_env_overrides_win() {
        clear_xdg_env_vars();
        std::env::set_var("XDG_CONFIG_HOME", "/custom/cfg");
        std::env::set_var("XDG_RUNTIME_DIR", "/run/user/1000");

        let map = provider("/home/u").resolve("app").unwrap();
        assert_eq!(map[&Domain::Config], PathBuf::from("/custom/cfg/app"));
        assert_eq!(map[&Domain::Runtime], PathBuf::from("/run/user/1000/app"));

        clear_xdg_env_vars();
    }

    #[test]
    #[serial]
    fn test_relative_env_values_are_ignored() {
        clear_xdg_env_vars();
        std::env::set_var("XDG_DATA_HOME", "relative/share");

        let map = provider("/home/u").resolve("app").unwrap();
        assert_eq!(map[&Domain::Data], PathBuf::from("/home/u/.local/share/app"));

        clear_xdg_env_vars();
    }

    #[test]
    #[serial]
    fn test_user_dir_lookup_wins_for_media_domains() {
        clear_xdg_env_vars();

        let lookup = FixedLookup::new()
            .with("DOCUMENTS", "/srv/docs")
            .with("DOWNLOAD", "/srv/dl");
        let provider = XdgProvider::new(PathBuf::from("/home/u"), Box::new(lookup));
        let map = provider.resolve("app").unwrap();

        assert_eq!(map[&Domain::Documents], PathBuf::from("/srv/docs"));
        assert_eq!(map[&Domain::Downloads], PathBuf::from("/srv/dl"));
        // Keys the lookup does not know still fall back under home
        assert_eq!(map[&Domain::Music], PathBuf::from("/home/u/Music"));
    }

    #[test]
    #[serial]
    fn test_relative_lookup_answers_fall_back() {
        clear_xdg_env_vars();

        let lookup = FixedLookup::new().with("PICTURES", "not/absolute");
        let provider = XdgProvider::new(PathBuf::from("/home/u"), Box::new(lookup));
        let map = provider.resolve("app").unwrap();

        assert_eq!(map[&Domain::Pictures], PathBuf::from("/home/u/Pictures"));
    }
}
