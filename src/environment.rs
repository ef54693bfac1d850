//! Runner environment validation.
//!
//! Checks run in a fixed order and the first failure wins: platform,
//! workspace variable, workspace existence, workspace contents.

use crate::{
    error::{ActionError, ErrorExt, Result},
    settings::{ActionSettings, SUPPORTED_PLATFORM},
};
use std::path::PathBuf;

/// Validate the runner environment and return the workspace root.
pub async fn validate_environment(settings: &ActionSettings) -> Result<PathBuf> {
    if settings.platform != SUPPORTED_PLATFORM {
        return Err(ActionError::UnsupportedPlatform {
            platform: settings.platform.clone(),
        });
    }

    let workspace = match &settings.workspace {
        Some(path) if !path.as_os_str().is_empty() => path.clone(),
        _ => return Err(ActionError::WorkspaceUndefined),
    };

    let exists = tokio::fs::try_exists(&workspace)
        .await
        .fs_context("checking workspace", &workspace)?;
    if !exists {
        return Err(ActionError::WorkspaceMissing { path: workspace });
    }

    let mut entries = tokio::fs::read_dir(&workspace)
        .await
        .fs_context("reading workspace", &workspace)?;
    if entries
        .next_entry()
        .await
        .fs_context("reading workspace entry", &workspace)?
        .is_none()
    {
        return Err(ActionError::WorkspaceEmpty { path: workspace });
    }

    log::debug!("Workspace {} validated", workspace.display());
    Ok(workspace)
}
