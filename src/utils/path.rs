use std::path::{Component, Path, PathBuf};

/// Lexically normalizes a path: drops `.` components and folds `..` into the
/// preceding directory name. Leading `..` of a relative path are kept and a
/// `..` at the root is dropped. Symlinks are not followed.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Makes `path` absolute against `base` when it is relative, then normalizes it.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Absolutizes against the process working directory.
pub fn absolutize_from_cwd(path: &Path) -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(absolutize(path, &cwd))
}
