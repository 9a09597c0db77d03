//! Directory table for macOS.
//!
//! Uses the conventional `~/Library` and `/Library` subtrees; no environment
//! variables are consulted beyond `HOME`.

use std::path::PathBuf;

use crate::{AppIdentity, DirsError, app_path, home_dir};

pub(crate) fn user_data_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = home_dir()?.join("Library").join("Application Support");
    Ok(app_path(base, &[&id.name, &id.version]))
}

pub(crate) fn site_data_dir(id: &AppIdentity) -> PathBuf {
    app_path(
        PathBuf::from("/Library/Application Support"),
        &[&id.name, &id.version],
    )
}

pub(crate) fn user_config_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = home_dir()?.join("Library").join("Preferences");
    Ok(app_path(base, &[&id.name, &id.version]))
}

pub(crate) fn site_config_dir(id: &AppIdentity) -> PathBuf {
    app_path(PathBuf::from("/Library/Preferences"), &[&id.name, &id.version])
}

pub(crate) fn user_cache_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = home_dir()?.join("Library").join("Caches");
    Ok(app_path(base, &[&id.name, &id.version]))
}

pub(crate) fn global_cache_dir(id: &AppIdentity) -> PathBuf {
    app_path(PathBuf::from("/Library/Caches"), &[&id.name, &id.version])
}

pub(crate) fn user_log_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = home_dir()?.join("Library").join("Logs");
    Ok(app_path(base, &[&id.name, &id.version]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn gizmo() -> AppIdentity {
        AppIdentity {
            name: "Gizmo".to_string(),
            author: "Ken".to_string(),
            version: "1.0".to_string(),
            roaming: false,
        }
    }

    #[test]
    #[serial]
    fn test_user_dirs_under_home_library() {
        temp_env::with_var("HOME", Some("/Users/ken"), || {
            assert_eq!(
                user_data_dir(&gizmo()).unwrap(),
                PathBuf::from("/Users/ken/Library/Application Support/Gizmo/1.0")
            );
            assert_eq!(
                user_config_dir(&gizmo()).unwrap(),
                PathBuf::from("/Users/ken/Library/Preferences/Gizmo/1.0")
            );
            assert_eq!(
                user_cache_dir(&gizmo()).unwrap(),
                PathBuf::from("/Users/ken/Library/Caches/Gizmo/1.0")
            );
            assert_eq!(
                user_log_dir(&gizmo()).unwrap(),
                PathBuf::from("/Users/ken/Library/Logs/Gizmo/1.0")
            );
        });
    }

    #[test]
    fn test_site_dirs_need_no_environment() {
        assert_eq!(
            site_data_dir(&gizmo()),
            PathBuf::from("/Library/Application Support/Gizmo/1.0")
        );
        assert_eq!(
            site_config_dir(&gizmo()),
            PathBuf::from("/Library/Preferences/Gizmo/1.0")
        );
        assert_eq!(
            global_cache_dir(&gizmo()),
            PathBuf::from("/Library/Caches/Gizmo/1.0")
        );
    }
}
