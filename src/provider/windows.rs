// ABOUTME: Domain provider for registry-based systems (Windows)
// ABOUTME: APPDATA/LOCALAPPDATA/TEMP env vars plus "User Shell Folders" values

use cubby_core::{Domain, DomainProvider, ResolveError, UserDirLookup};
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolves the eight-domain Windows table: app-scoped config/data/cache/
/// runtime from `APPDATA`/`LOCALAPPDATA`/`TEMP` (with `AppData` fallbacks
/// under home), media folders from the injected [`UserDirLookup`] keyed on
/// the "User Shell Folders" value names.
pub struct WindowsProvider {
    home: PathBuf,
    folders: Box<dyn UserDirLookup>,
}

impl WindowsProvider {
    pub fn new(home: PathBuf, folders: Box<dyn UserDirLookup>) -> Self {
        Self { home, folders }
    }

    fn shell_folder(&self, value: &str, fallback: &str) -> PathBuf {
        match self.folders.user_dir(value) {
            Some(dir) if dir.is_absolute() => dir,
            _ => self.home.join(fallback),
        }
    }
}

impl DomainProvider for WindowsProvider {
    fn family(&self) -> &'static str {
        "windows"
    }

    fn resolve(&self, app: &str) -> Result<HashMap<Domain, PathBuf>, ResolveError> {
        let roaming = env_dir("APPDATA")
            .unwrap_or_else(|| self.home.join("AppData").join("Roaming"));
        let local = env_dir("LOCALAPPDATA")
            .unwrap_or_else(|| self.home.join("AppData").join("Local"));
        let temp = env_dir("TEMP")
            .unwrap_or_else(|| self.home.join("AppData").join("Local").join("Temp"));

        let mut domains = HashMap::new();
        domains.insert(Domain::Config, roaming.join(app));
        domains.insert(Domain::Data, local.join(app));
        domains.insert(Domain::Cache, local.join(app).join("cache"));
        domains.insert(Domain::Runtime, temp.join(app));
        domains.insert(Domain::Documents, self.shell_folder("Personal", "Documents"));
        domains.insert(Domain::Pictures, self.shell_folder("My Pictures", "Pictures"));
        domains.insert(Domain::Music, self.shell_folder("My Music", "Music"));
        domains.insert(Domain::Videos, self.shell_folder("My Video", "Videos"));
        Ok(domains)
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
}

/// Reads per-user shell folder locations from
/// `HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Explorer\User Shell Folders`.
///
/// Off Windows this answers nothing, so the provider logic itself stays
/// testable on any host through an injected lookup.
pub struct RegistryFolders;

#[cfg(windows)]
impl UserDirLookup for RegistryFolders {
    fn user_dir(&self, key: &str) -> Option<PathBuf> {
        registry::user_shell_folder(key)
    }
}

#[cfg(not(windows))]
impl UserDirLookup for RegistryFolders {
    fn user_dir(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

#[cfg(windows)]
mod registry {
    use std::ffi::{OsStr, OsString};
    use std::os::windows::ffi::{OsStrExt, OsStringExt};
    use std::path::PathBuf;
    use windows_sys::Win32::Foundation::ERROR_SUCCESS;
    use windows_sys::Win32::System::Registry::{
        RegGetValueW, HKEY_CURRENT_USER, RRF_RT_REG_SZ,
    };

    const USER_SHELL_FOLDERS: &str =
        r"Software\Microsoft\Windows\CurrentVersion\Explorer\User Shell Folders";

    fn wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }

    /// `RegGetValueW` expands `REG_EXPAND_SZ` values (`%USERPROFILE%\...`)
    /// before returning them.
    pub(super) fn user_shell_folder(value: &str) -> Option<PathBuf> {
        let subkey = wide(USER_SHELL_FOLDERS);
        let name = wide(value);

        let mut size: u32 = 0;
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                subkey.as_ptr(),
                name.as_ptr(),
                RRF_RT_REG_SZ,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS || size == 0 {
            return None;
        }

        let mut buf: Vec<u16> = vec![0; (size as usize).div_ceil(2)];
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                subkey.as_ptr(),
                name.as_ptr(),
                RRF_RT_REG_SZ,
                std::ptr::null_mut(),
                buf.as_mut_ptr().cast(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS {
            return None;
        }

        let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        let dir = PathBuf::from(OsString::from_wide(&buf[..len]));
        if dir.as_os_str().is_empty() {
            None
        } else {
            Some(dir)
        }
    }
}
