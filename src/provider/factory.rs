// ABOUTME: Provider selection keyed on the detected platform tag
// ABOUTME: One DomainProvider per OS family; macOS-family tags fail fatally

use cubby_core::{DomainProvider, ResolveError};

use crate::home;
use crate::provider::{
    GenericProvider, RegistryFolders, WindowsProvider, XdgProvider, XdgUserDirTool,
};

/// Create the provider for `os` (a `std::env::consts::OS` tag).
///
/// XDG conventions cover Linux and the BSD-style systems; Windows gets the
/// registry-backed provider; macOS-family systems have no domain table
/// defined and fail here rather than resolving a partial or wrong mapping.
/// Anything else lands on the generic provider.
pub fn provider_for(os: &str) -> Result<Box<dyn DomainProvider>, ResolveError> {
    match os {
        "linux" | "freebsd" | "dragonfly" | "netbsd" | "openbsd" | "solaris" | "illumos" => {
            let home = home::home_dir()?;
            Ok(Box::new(XdgProvider::new(home, Box::new(XdgUserDirTool))))
        }
        "windows" => {
            let home = home::home_dir()?;
            Ok(Box::new(WindowsProvider::new(home, Box::new(RegistryFolders))))
        }
        "macos" | "ios" => Err(ResolveError::UnsupportedPlatform { os: os.to_string() }),
        _ => {
            let home = home::home_dir()?;
            Ok(Box::new(GenericProvider::new(home)))
        }
    }
}

/// Provider for the OS this binary was compiled for. Selection happens once,
/// at resolver construction.
pub fn detect() -> Result<Box<dyn DomainProvider>, ResolveError> {
    provider_for(std::env::consts::OS)
}
