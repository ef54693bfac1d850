//! Inno Setup compiler discovery.
//!
//! Well-known install directories are checked first, newest product
//! directory first; `where` resolves the executable from PATH otherwise.

use crate::{
    error::{ActionError, Result},
    settings::ProgramDirs,
    utils::process::CommandRunner,
};
use std::path::{Path, PathBuf};

/// Compiler executable name.
pub const ISCC_EXE: &str = "iscc.exe";

/// Product directory names, in search order.
pub const PRODUCT_DIRS: [&str; 3] = ["Inno Setup 6", "Inno Setup 7", "Inno Setup"];

/// Candidate compiler paths in priority order.
pub fn candidate_paths(dirs: &ProgramDirs) -> Vec<PathBuf> {
    dirs.roots()
        .flat_map(|root| {
            PRODUCT_DIRS
                .iter()
                .map(move |product| root.join(product).join(ISCC_EXE))
        })
        .collect()
}

/// Locate iscc.exe, failing with [`ActionError::CompilerNotFound`].
pub async fn locate_iscc<R: CommandRunner>(dirs: &ProgramDirs, runner: &R) -> Result<PathBuf> {
    for candidate in candidate_paths(dirs) {
        // Unreadable locations count as absent.
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            log::info!("Found {} at {}", ISCC_EXE, candidate.display());
            return Ok(candidate);
        }
        log::debug!("No {} at {}", ISCC_EXE, candidate.display());
    }

    match resolve_from_path(runner).await {
        Some(path) => {
            log::info!("Resolved {} from PATH: {}", ISCC_EXE, path.display());
            Ok(path)
        }
        None => Err(ActionError::CompilerNotFound),
    }
}

/// First line printed by `where iscc.exe`, if it succeeds.
async fn resolve_from_path<R: CommandRunner>(runner: &R) -> Option<PathBuf> {
    let output = match runner.run(Path::new("where"), &[ISCC_EXE.to_string()]).await {
        Ok(output) => output,
        Err(e) => {
            log::debug!("PATH lookup unavailable: {}", e);
            return None;
        }
    };

    if !output.success() {
        return None;
    }

    output
        .stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let dirs = ProgramDirs {
            program_files_x86: Some(PathBuf::from("pf86")),
            program_files: Some(PathBuf::from("pf")),
        };
        let expected: Vec<PathBuf> = [
            ("pf86", "Inno Setup 6"),
            ("pf86", "Inno Setup 7"),
            ("pf86", "Inno Setup"),
            ("pf", "Inno Setup 6"),
            ("pf", "Inno Setup 7"),
            ("pf", "Inno Setup"),
        ]
        .iter()
        .map(|(root, product)| Path::new(root).join(product).join(ISCC_EXE))
        .collect();

        assert_eq!(candidate_paths(&dirs), expected);
    }

    #[test]
    fn test_candidates_skip_unset_roots() {
        let dirs = ProgramDirs {
            program_files_x86: None,
            program_files: Some(PathBuf::from("pf")),
        };
        let candidates = candidate_paths(&dirs);
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.starts_with("pf")));

        assert!(candidate_paths(&ProgramDirs::default()).is_empty());
    }
}
