//! Inno Setup utility functions.

use std::path::{Component, Path, PathBuf};

/// Double every quote character in a compiler option.
///
/// Options are already passed as discrete process arguments, so this is not
/// needed for injection safety and changes values that legitimately contain
/// quotes. It is kept because existing workflows depend on the doubled form.
pub fn escape_option(option: &str) -> String {
    let mut escaped = String::with_capacity(option.len());
    for c in option.chars() {
        if c == '"' || c == '\'' {
            escaped.push(c);
        }
        escaped.push(c);
    }
    escaped
}

/// Escape every option, preserving order and duplicates.
pub fn escape_options(options: &[String]) -> Vec<String> {
    options.iter().map(|o| escape_option(o)).collect()
}

/// Script location under the workspace root.
///
/// Root and drive prefixes of `script` are dropped, so `/setup.iss` and
/// `C:\setup.iss` both resolve inside `workspace`.
pub fn script_path(workspace: &Path, script: &Path) -> PathBuf {
    script
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .fold(workspace.to_path_buf(), |path, c| path.join(c))
}
