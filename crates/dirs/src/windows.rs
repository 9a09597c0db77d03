//! Directory table for Windows.
//!
//! User directories hang off `%APPDATA%` (roaming) or `%LOCALAPPDATA%`;
//! shared directories require `%ALLUSERSPROFILE%`.

use std::path::PathBuf;

use crate::{AppIdentity, DirsError, app_path, env_var};

pub(crate) fn user_data_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let var = if id.roaming { "APPDATA" } else { "LOCALAPPDATA" };
    let base = env_var(var).ok_or_else(|| DirsError::MissingEnvVar(var.to_string()))?;
    Ok(app_path(
        PathBuf::from(base),
        &[&id.author, &id.name, &id.version],
    ))
}

pub(crate) fn site_data_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = env_var("ALLUSERSPROFILE").ok_or(DirsError::AllUsersProfileNotDefined)?;
    Ok(app_path(
        PathBuf::from(base),
        &[&id.author, &id.name, &id.version],
    ))
}

pub(crate) fn user_cache_dir(id: &AppIdentity) -> Result<PathBuf, DirsError> {
    let base = env_var("LOCALAPPDATA")
        .ok_or_else(|| DirsError::MissingEnvVar("LOCALAPPDATA".to_string()))?;
    Ok(app_path(
        PathBuf::from(base),
        &[&id.author, &id.name, &id.version],
    )
    .join("Cache"))
}
