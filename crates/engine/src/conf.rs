//! Application configuration registry.
//!
//! Responsibilities:
//! - Own the key → option mapping and enforce key uniqueness at registration.
//! - Provide typed getters/setters over defaults and current values.
//! - Drive the overlay pipeline: files, then environment, then flags.
//!
//! Does NOT handle:
//! - Overlay mechanics themselves (see `file`, `env`, and `flags`).
//! - Platform directory lookups (see the `confstack-dirs` crate).
//!
//! Invariants:
//! - Construction-then-use is strictly sequential and single-threaded:
//!   register options first, run `update()` once at startup, then only call
//!   the getters and setters.
//! - A failed registration never mutates existing state.

use std::collections::BTreeMap;
use std::path::PathBuf;

use confstack_dirs::AppIdentity;

use crate::error::ConfigError;
use crate::file::{ConfigDirSource, FileOrder, PlatformDirs};
use crate::flags::FlagSession;
use crate::option::{ConfOption, OptionDef};
use crate::value::Value;

/// A registry of configuration options for one application.
pub struct AppConf {
    /// Application name; also seeds the `<name>.json` conventional file name.
    pub name: String,
    /// Application author, used by Windows directory conventions.
    pub author: String,
    /// Application version, appended to versioned directories.
    pub version: String,
    /// Whether Windows user directories use the roaming profile.
    pub roaming: bool,
    pub(crate) conf_files: Vec<PathBuf>,
    pub(crate) file_order: FileOrder,
    pub(crate) options: BTreeMap<String, ConfOption>,
    pub(crate) flags: FlagSession,
    pub(crate) dirs: Box<dyn ConfigDirSource>,
}

impl AppConf {
    /// Create a configuration registry for the named application.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: String::new(),
            version: String::new(),
            roaming: false,
            conf_files: Vec::new(),
            file_order: FileOrder::Discovery,
            options: BTreeMap::new(),
            flags: FlagSession::new(),
            dirs: Box::new(PlatformDirs),
        }
    }

    /// Set the application author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the application version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Use the roaming profile for Windows user directories.
    pub fn with_roaming(mut self) -> Self {
        self.roaming = true;
        self
    }

    /// Add an explicitly configured candidate configuration file.
    pub fn with_conf_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.conf_files.push(path.into());
        self
    }

    /// Add several explicitly configured candidate configuration files.
    pub fn with_conf_files(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.conf_files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Choose the order in which discovered files are processed.
    pub fn with_file_order(mut self, order: FileOrder) -> Self {
        self.file_order = order;
        self
    }

    /// Inject the argument vector the flag overlay parses (primarily for
    /// tests; the default is the process arguments).
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.flags = self.flags.with_args(args);
        self
    }

    /// Replace the directory source consulted during file discovery.
    pub fn with_dir_source(mut self, dirs: Box<dyn ConfigDirSource>) -> Self {
        self.dirs = dirs;
        self
    }

    /// The application identity handed to the directory collaborator.
    pub fn identity(&self) -> AppIdentity {
        AppIdentity {
            name: self.name.clone(),
            author: self.author.clone(),
            version: self.version.clone(),
            roaming: self.roaming,
        }
    }

    /// Register a new option under `key`.
    ///
    /// The option's initial value is an independent copy of its default.
    /// Registering an existing key fails without touching the registered
    /// option.
    pub fn new_option(&mut self, key: impl Into<String>, def: OptionDef) -> Result<(), ConfigError> {
        let key = key.into();
        if self.options.contains_key(&key) {
            return Err(ConfigError::OptionExists(key));
        }
        let option = def.into_option(&key);
        self.options.insert(key, option);
        Ok(())
    }

    /// Look up a registered option.
    pub fn option(&self, key: &str) -> Result<&ConfOption, ConfigError> {
        self.options
            .get(key)
            .ok_or_else(|| ConfigError::OptionNotFound(key.to_string()))
    }

    fn option_mut(&mut self, key: &str) -> Result<&mut ConfOption, ConfigError> {
        self.options
            .get_mut(key)
            .ok_or_else(|| ConfigError::OptionNotFound(key.to_string()))
    }

    /// Iterate over all registered options.
    pub fn options(&self) -> impl Iterator<Item = &ConfOption> {
        self.options.values()
    }

    /// Current value of `key` rendered as a string.
    pub fn get_str(&self, key: &str) -> Result<String, ConfigError> {
        Ok(self.option(key)?.value.to_string())
    }

    /// Current value of `key` coerced to an integer.
    pub fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.option(key)?.value.to_int()
    }

    /// Current value of `key` coerced to a float.
    pub fn get_float(&self, key: &str) -> Result<f64, ConfigError> {
        self.option(key)?.value.to_float()
    }

    /// Current value of `key` coerced to a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.option(key)?.value.to_bool()
    }

    /// Default value of `key` rendered as a string.
    pub fn get_default_str(&self, key: &str) -> Result<String, ConfigError> {
        Ok(self.option(key)?.default.to_string())
    }

    /// Default value of `key` coerced to an integer.
    pub fn get_default_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.option(key)?.default.to_int()
    }

    /// Default value of `key` coerced to a float.
    pub fn get_default_float(&self, key: &str) -> Result<f64, ConfigError> {
        self.option(key)?.default.to_float()
    }

    /// Default value of `key` coerced to a boolean.
    pub fn get_default_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.option(key)?.default.to_bool()
    }

    /// Replace the current value of `key` with a string.
    pub fn set_str(&mut self, key: &str, value: impl Into<String>) -> Result<(), ConfigError> {
        self.option_mut(key)?.value = Value::Str(value.into());
        Ok(())
    }

    /// Replace the current value of `key` with an integer.
    pub fn set_int(&mut self, key: &str, value: i64) -> Result<(), ConfigError> {
        self.option_mut(key)?.value = Value::Int(value);
        Ok(())
    }

    /// Replace the current value of `key` with a float.
    pub fn set_float(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        self.option_mut(key)?.value = Value::Float(value);
        Ok(())
    }

    /// Replace the current value of `key` with a boolean.
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), ConfigError> {
        self.option_mut(key)?.value = Value::Bool(value);
        Ok(())
    }

    /// Apply all overlays in precedence order: configuration files, then
    /// environment variables, then command line flags.
    ///
    /// The first failing overlay aborts the pipeline; effects of earlier
    /// overlays remain applied.
    pub fn update(&mut self) -> Result<(), ConfigError> {
        self.update_from_files()?;
        self.update_from_env()?;
        self.update_from_flags()
    }
}
