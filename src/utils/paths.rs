use std::io;
use std::path::{Component, Path, PathBuf};

/// Renders a path as a forward-slash URL path.
///
/// Manifest entries are fetched by a browser, so separators are always `/`
/// regardless of platform. Trailing separators and interior `.` components
/// are dropped; a leading `./` is kept as written.
#[must_use]
pub fn to_url_path(path: &Path) -> String {
    let mut out = String::new();

    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }

    out
}

/// Joins a directory URL path and a file name with `/`.
#[must_use]
pub fn join_url(dir: &str, file_name: &str) -> String {
    if dir.is_empty() {
        file_name.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{file_name}")
    } else {
        format!("{dir}/{file_name}")
    }
}

/// Returns the directory a file lives in, treating a bare file name as `.`.
#[must_use]
pub fn parent_or_current(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Follows a chain of symlinks to the path that would actually be written.
///
/// The final target does not have to exist. Relative link targets are
/// resolved against the directory holding the link.
///
/// # Errors
///
/// Returns an error if a link cannot be read or the chain is longer than
/// 40 links.
pub fn resolve_symlinks(path: &Path) -> io::Result<PathBuf> {
    const MAX_LINKS: usize = 40;

    let mut current = path.to_path_buf();
    for _ in 0..MAX_LINKS {
        match std::fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                let target = std::fs::read_link(&current)?;
                current = if target.is_absolute() {
                    target
                } else {
                    parent_or_current(&current).join(target)
                };
            }
            Ok(_) => return Ok(current),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(e),
        }
    }

    Err(io::Error::other(format!(
        "too many levels of symbolic links: {}",
        path.display()
    )))
}
