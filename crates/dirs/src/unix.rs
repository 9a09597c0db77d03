//! XDG-flavored directory table for Unix-like systems.
//!
//! Follows the XDG base directory spec (`XDG_DATA_HOME`, `XDG_CONFIG_HOME`,
//! `XDG_CACHE_HOME`, `XDG_STATE_HOME` and the `_DIRS` lists), with the Debian
//! `XDG_STATE_HOME` extension for state directories.

use std::path::PathBuf;

use crate::{AppIdentity, DirsError, app_path, env_var, home_dir};

fn split_path_list(list: &str) -> Vec<PathBuf> {
    list.split(':')
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub(crate) fn user_data_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = match env_var("XDG_DATA_HOME") {
        Some(base) => PathBuf::from(base),
        None => home_dir()?.join(".local").join("share"),
    };
    Ok(app_path(base, &[&id.name, &id.version]))
}

pub(crate) fn site_data_dirs(id: &AppIdentity, multipath: bool) -> Result<Vec<PathBuf>, DirsError> {
    let xdg = env_var("XDG_DATA_DIRS");
    if !multipath {
        let base = match &xdg {
            None => PathBuf::from("/usr/local/share"),
            Some(list) if list.contains("/usr/local/share") => PathBuf::from("/usr/local/share"),
            Some(list) if list.contains("/usr/share") => PathBuf::from("/usr/share"),
            Some(list) => split_path_list(list)
                .into_iter()
                .next()
                .unwrap_or_else(|| PathBuf::from("/usr/local/share")),
        };
        return Ok(vec![app_path(base, &[&id.name, &id.version])]);
    }
    let list = xdg.unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    Ok(split_path_list(&list)
        .into_iter()
        .map(|base| app_path(base, &[&id.name, &id.version]))
        .collect())
}

pub(crate) fn global_data_dir(id: &AppIdentity) -> PathBuf {
    app_path(PathBuf::from("/var/lib"), &[&id.name])
}

pub(crate) fn user_config_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = match env_var("XDG_CONFIG_HOME") {
        Some(base) => PathBuf::from(base),
        None => home_dir()?.join(".config"),
    };
    Ok(app_path(base, &[&id.name, &id.version]))
}

pub(crate) fn site_config_dirs(
    id: &AppIdentity,
    multipath: bool,
) -> Result<Vec<PathBuf>, DirsError> {
    let xdg = env_var("XDG_CONFIG_DIRS");
    let Some(list) = xdg else {
        return Ok(vec![app_path(
            PathBuf::from("/etc/xdg"),
            &[&id.name, &id.version],
        )]);
    };
    if !multipath {
        let base = if list.contains("/etc/xdg") {
            PathBuf::from("/etc/xdg")
        } else {
            split_path_list(&list)
                .into_iter()
                .next()
                .unwrap_or_else(|| PathBuf::from("/etc/xdg"))
        };
        return Ok(vec![app_path(base, &[&id.name, &id.version])]);
    }
    Ok(split_path_list(&list)
        .into_iter()
        .map(|base| app_path(base, &[&id.name, &id.version]))
        .collect())
}

pub(crate) fn global_config_dirs(id: &AppIdentity, multipath: bool) -> Vec<PathBuf> {
    let mut dirs = vec![app_path(PathBuf::from("/etc"), &[&id.name])];
    if multipath && !id.author.is_empty() {
        dirs.push(app_path(PathBuf::from("/etc"), &[&id.author]));
    }
    dirs
}

pub(crate) fn user_cache_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = match env_var("XDG_CACHE_HOME") {
        Some(base) => PathBuf::from(base),
        None => home_dir()?.join(".cache"),
    };
    Ok(app_path(base, &[&id.name, &id.version]))
}

pub(crate) fn global_cache_dir(id: &AppIdentity) -> PathBuf {
    app_path(PathBuf::from("/var/cache"), &[&id.name])
}

pub(crate) fn user_state_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = match env_var("XDG_STATE_HOME") {
        Some(base) => PathBuf::from(base),
        None => home_dir()?.join(".local").join("state"),
    };
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
    fn test_user_data_dir_xdg_override() {
        temp_env::with_var("XDG_DATA_HOME", Some("/custom/data"), || {
            let dir = user_data_dir(&gizmo()).unwrap();
            assert_eq!(dir, PathBuf::from("/custom/data/Gizmo/1.0"));
        });
    }

    #[test]
    #[serial]
    fn test_user_data_dir_default() {
        temp_env::with_vars(
            [("XDG_DATA_HOME", None::<&str>), ("HOME", Some("/home/ken"))],
            || {
                let dir = user_data_dir(&gizmo()).unwrap();
                assert_eq!(dir, PathBuf::from("/home/ken/.local/share/Gizmo/1.0"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_user_data_dir_missing_home() {
        temp_env::with_vars([("XDG_DATA_HOME", None::<&str>), ("HOME", None)], || {
            let err = user_data_dir(&gizmo()).unwrap_err();
            assert!(matches!(err, DirsError::MissingEnvVar(ref var) if var == "HOME"));
        });
    }

    #[test]
    #[serial]
    fn test_site_data_dirs_single_default() {
        temp_env::with_var("XDG_DATA_DIRS", None::<&str>, || {
            let dirs = site_data_dirs(&gizmo(), false).unwrap();
            assert_eq!(dirs, vec![PathBuf::from("/usr/local/share/Gizmo/1.0")]);
        });
    }

    #[test]
    #[serial]
    fn test_site_data_dirs_multipath_expansion() {
        temp_env::with_var("XDG_DATA_DIRS", Some("/opt/share:/srv/share"), || {
            let dirs = site_data_dirs(&gizmo(), true).unwrap();
            assert_eq!(
                dirs,
                vec![
                    PathBuf::from("/opt/share/Gizmo/1.0"),
                    PathBuf::from("/srv/share/Gizmo/1.0"),
                ]
            );
        });
    }

    #[test]
    #[serial]
    fn test_site_config_dirs_default() {
        temp_env::with_var("XDG_CONFIG_DIRS", None::<&str>, || {
            let dirs = site_config_dirs(&gizmo(), false).unwrap();
            assert_eq!(dirs, vec![PathBuf::from("/etc/xdg/Gizmo/1.0")]);
        });
    }

    #[test]
    fn test_global_dirs_ignore_version() {
        assert_eq!(global_data_dir(&gizmo()), PathBuf::from("/var/lib/Gizmo"));
        assert_eq!(global_cache_dir(&gizmo()), PathBuf::from("/var/cache/Gizmo"));
        assert_eq!(
            global_config_dirs(&gizmo(), true),
            vec![PathBuf::from("/etc/Gizmo"), PathBuf::from("/etc/Ken")]
        );
    }

    #[test]
    #[serial]
    fn test_user_state_dir_xdg_override() {
        temp_env::with_var("XDG_STATE_HOME", Some("/custom/state"), || {
            let dir = user_state_dir(&gizmo()).unwrap();
            assert_eq!(dir, PathBuf::from("/custom/state/Gizmo/1.0"));
        });
    }
}
