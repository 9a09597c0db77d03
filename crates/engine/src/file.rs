//! Configuration file discovery and overlay.
//!
//! Responsibilities:
//! - Discover candidate configuration files: explicitly configured paths
//!   plus conventional names resolved against every platform config
//!   directory.
//! - Apply flattened file contents to options by JSON address.
//!
//! Invariants:
//! - When two processed files define the same address, the file processed
//!   later wins. The processing order is a policy ([`FileOrder`]); the
//!   default keeps discovery order (explicit files first, then directory
//!   scan order), `Lexical` sorts by path for reproducibility.

use std::fs;
use std::path::{Path, PathBuf};

use confstack_dirs::{AppIdentity, DirsError, Platform};

use crate::conf::AppConf;
use crate::error::ConfigError;
use crate::json::parse_json_file;

/// Conventional configuration file names probed in every config directory,
/// in addition to `<lowercased-name>.json`.
const CONVENTIONAL_NAMES: [&str; 2] = ["config.json", "conf.json"];

/// Order in which discovered configuration files are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOrder {
    /// Explicit files first, then directory scan order.
    #[default]
    Discovery,
    /// Sorted by path, for a reproducible override order.
    Lexical,
}

/// Capability supplying the candidate configuration directories.
///
/// The engine only ever asks for config directories; injecting a fake source
/// keeps file discovery testable without a real platform layout.
pub trait ConfigDirSource {
    fn config_dirs(&self, id: &AppIdentity, multipath: bool) -> Result<Vec<PathBuf>, DirsError>;
}

/// Default directory source backed by the running platform's conventions.
pub struct PlatformDirs;

impl ConfigDirSource for PlatformDirs {
    fn config_dirs(&self, id: &AppIdentity, multipath: bool) -> Result<Vec<PathBuf>, DirsError> {
        confstack_dirs::config_dirs(id, Platform::current(), multipath)
    }
}

/// Whether `path` resolves (through symlinks) to a regular file.
fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}

impl AppConf {
    /// All detected configuration files for this application.
    ///
    /// Explicitly configured paths come first, followed by the conventional
    /// file names joined against every config directory; candidates that are
    /// not regular files are dropped.
    pub fn config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut result: Vec<PathBuf> = self
            .conf_files
            .iter()
            .filter(|path| is_file(path))
            .cloned()
            .collect();
        let mut names: Vec<String> = CONVENTIONAL_NAMES.iter().map(ToString::to_string).collect();
        names.push(format!("{}.json", self.name.to_lowercase()));
        for dir in self.dirs.config_dirs(&self.identity(), true)? {
            for name in &names {
                let candidate = dir.join(name);
                if is_file(&candidate) {
                    result.push(candidate);
                }
            }
        }
        if self.file_order == FileOrder::Lexical {
            result.sort();
        }
        Ok(result)
    }

    /// Overlay option values from all detected configuration files.
    ///
    /// Files are processed in [`FileOrder`]; if two files define the same
    /// address the later one wins.
    pub fn update_from_files(&mut self) -> Result<(), ConfigError> {
        for file in self.config_files()? {
            tracing::debug!(path = %file.display(), "applying configuration file");
            self.update_from_json_file(&file)?;
        }
        Ok(())
    }

    /// Overlay option values from one JSON file.
    ///
    /// Every option whose JSON address matches a flattened key receives that
    /// key's value.
    pub fn update_from_json_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let data = parse_json_file(path)?;
        for option in self.options.values_mut() {
            if option.json.is_empty() {
                continue;
            }
            if let Some(value) = data.get(&option.json) {
                tracing::debug!(key = %option.key, address = %option.json, "file override");
                option.value = value.clone();
            }
        }
        Ok(())
    }
}
