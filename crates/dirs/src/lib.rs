//! Platform directory conventions for confstack.
//!
//! Responsibilities:
//! - Resolve user/site/global data, config, cache, state, and log directories
//!   for an application identity on Unix, macOS, and Windows.
//! - Expand multi-path directory lists (`XDG_DATA_DIRS`, `XDG_CONFIG_DIRS`).
//!
//! Does NOT handle:
//! - File existence probing or file discovery (see the `confstack` crate).
//! - Creating any of the returned directories.
//!
//! Invariants:
//! - Every lookup is a function of `(Platform, AppIdentity)`; all three
//!   platform tables compile on every host and are selected by the explicit
//!   platform tag, so each table is testable everywhere.
//! - Environment variables are only read, never written.

mod macos;
mod unix;
mod windows;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving platform directories.
#[derive(Error, Debug)]
pub enum DirsError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("ALLUSERSPROFILE environment variable not defined")]
    AllUsersProfileNotDefined,
}

/// Application identity used to derive directory paths.
#[derive(Debug, Clone, Default)]
pub struct AppIdentity {
    /// Application name; appended to every base directory.
    pub name: String,
    /// Application author; only used on Windows and for `/etc/<author>`.
    pub author: String,
    /// Application version; appended below the name when non-empty.
    pub version: String,
    /// Whether Windows user directories should use the roaming profile.
    pub roaming: bool,
}

impl AppIdentity {
    /// Create an identity with the given application name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Target platform for directory resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    MacOs,
    Windows,
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Read an environment variable, treating absence and empty as unset.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read `HOME`, failing when it is unset.
pub(crate) fn home_dir() -> Result<PathBuf, DirsError> {
    env_var("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| DirsError::MissingEnvVar("HOME".to_string()))
}

/// Join `name` and `version` below `base`, skipping empty components.
pub(crate) fn app_path<S: AsRef<str>>(base: PathBuf, components: &[S]) -> PathBuf {
    let mut path = base;
    for component in components {
        let component = component.as_ref();
        if !component.is_empty() {
            path.push(component);
        }
    }
    path
}

/// User-specific data directory.
///
/// Typical locations:
///
///   macOS:                  `~/Library/Application Support/<name>`
///   Unix:                   `~/.local/share/<name>` (or `$XDG_DATA_HOME`)
///   Windows (not roaming):  `C:\Users\<user>\AppData\Local\<author>\<name>`
///   Windows (roaming):      `C:\Users\<user>\AppData\Roaming\<author>\<name>`
pub fn user_data_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => unix::user_data_dir(id),
        Platform::MacOs => macos::user_data_dir(id),
        Platform::Windows => windows::user_data_dir(id),
    }
}

/// User-shared data directories.
///
/// Typical locations:
///
///   macOS:      `/Library/Application Support/<name>`
///   Unix:       `/usr/local/share/<name>` or `/usr/share/<name>`
///   Windows:    `C:\ProgramData\<author>\<name>`
///
/// With `multipath` on Unix this expands every entry of `$XDG_DATA_DIRS`;
/// otherwise a single directory is returned.
pub fn site_data_dirs(
    id: &AppIdentity,
    platform: Platform,
    multipath: bool,
) -> Result<Vec<PathBuf>, DirsError> {
    match platform {
        Platform::Unix => unix::site_data_dirs(id, multipath),
        Platform::MacOs => Ok(vec![macos::site_data_dir(id)]),
        Platform::Windows => Ok(vec![windows::site_data_dir(id)?]),
    }
}

/// Global data directory (`/var/lib/<name>` on Unix; elsewhere the site dir).
pub fn global_data_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => Ok(unix::global_data_dir(id)),
        Platform::MacOs => Ok(macos::site_data_dir(id)),
        Platform::Windows => windows::site_data_dir(id),
    }
}

/// User-specific config directory.
///
/// Typical locations:
///
///   macOS:      `~/Library/Preferences/<name>`
///   Unix:       `~/.config/<name>` (or `$XDG_CONFIG_HOME`)
///   Windows:    same as [`user_data_dir`]
pub fn user_config_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => unix::user_config_dir(id),
        Platform::MacOs => macos::user_config_dir(id),
        Platform::Windows => windows::user_data_dir(id),
    }
}

/// User-shared config directories.
///
/// Typical locations:
///
///   macOS:      `/Library/Preferences/<name>`
///   Unix:       `/etc/xdg/<name>` or each entry of `$XDG_CONFIG_DIRS`
///   Windows:    same as [`site_data_dirs`]
pub fn site_config_dirs(
    id: &AppIdentity,
    platform: Platform,
    multipath: bool,
) -> Result<Vec<PathBuf>, DirsError> {
    match platform {
        Platform::Unix => unix::site_config_dirs(id, multipath),
        Platform::MacOs => Ok(vec![macos::site_config_dir(id)]),
        Platform::Windows => Ok(vec![windows::site_data_dir(id)?]),
    }
}

/// Global config directories.
///
/// Typical locations:
///
///   macOS:      same as [`site_config_dirs`]
///   Unix:       `/etc/<name>` (with `multipath` also `/etc/<author>`)
///   Windows:    same as [`site_config_dirs`]
pub fn global_config_dirs(
    id: &AppIdentity,
    platform: Platform,
    multipath: bool,
) -> Result<Vec<PathBuf>, DirsError> {
    match platform {
        Platform::Unix => Ok(unix::global_config_dirs(id, multipath)),
        Platform::MacOs => Ok(vec![macos::site_config_dir(id)]),
        Platform::Windows => Ok(vec![windows::site_data_dir(id)?]),
    }
}

/// User-specific cache directory.
///
/// Typical locations:
///
///   macOS:      `~/Library/Caches/<name>`
///   Unix:       `~/.cache/<name>` (or `$XDG_CACHE_HOME`)
///   Windows:    `C:\Users\<user>\AppData\Local\<author>\<name>\Cache`
pub fn user_cache_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => unix::user_cache_dir(id),
        Platform::MacOs => macos::user_cache_dir(id),
        Platform::Windows => windows::user_cache_dir(id),
    }
}

/// Global cache directory (`/var/cache/<name>` on Unix).
pub fn global_cache_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => Ok(unix::global_cache_dir(id)),
        Platform::MacOs => Ok(macos::global_cache_dir(id)),
        Platform::Windows => windows::user_cache_dir(id),
    }
}

/// User-specific state directory.
///
/// Typical locations:
///
///   macOS:      same as [`user_data_dir`]
///   Unix:       `~/.local/state/<name>` (or `$XDG_STATE_HOME`)
///   Windows:    same as [`user_data_dir`]
pub fn user_state_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => unix::user_state_dir(id),
        Platform::MacOs => macos::user_data_dir(id),
        Platform::Windows => windows::user_data_dir(id),
    }
}

/// User-specific log directory.
///
/// Typical locations:
///
///   macOS:      `~/Library/Logs/<name>`
///   Unix:       `~/.cache/<name>/log`
///   Windows:    `C:\Users\<user>\AppData\Local\<author>\<name>\Logs`
pub fn user_log_dir(id: &AppIdentity, platform: Platform) -> Result<PathBuf, DirsError> {
    match platform {
        Platform::Unix => Ok(unix::user_cache_dir(id)?.join("log")),
        Platform::MacOs => macos::user_log_dir(id),
        Platform::Windows => Ok(windows::user_data_dir(id)?.join("Logs")),
    }
}

/// All candidate configuration directories, highest precedence first:
/// user config, then site config, then global config.
pub fn config_dirs(
    id: &AppIdentity,
    platform: Platform,
    multipath: bool,
) -> Result<Vec<PathBuf>, DirsError> {
    let mut dirs = vec![user_config_dir(id, platform)?];
    dirs.extend(site_config_dirs(id, platform, multipath)?);
    dirs.extend(global_config_dirs(id, platform, multipath)?);
    Ok(dirs)
}
