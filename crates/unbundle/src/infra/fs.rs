//! Filesystem helpers for reading bundles and materializing files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::domain::errors::BundleError;

/// Read the whole bundle as UTF-8 text.
pub fn read_bundle(path: &Path) -> Result<String, BundleError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(BundleError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(BundleError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve a declared bundle path against `root`.
///
/// Declared paths are otherwise opaque, but they must stay beneath the root:
/// empty, absolute, or parent-relative paths are rejected.
pub fn resolve_target(root: &Path, declared: &str) -> Result<PathBuf, BundleError> {
    let relative = Path::new(declared);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });

    if declared.is_empty() || relative.is_absolute() || escapes {
        return Err(BundleError::UnsafePath {
            path: declared.to_string(),
        });
    }
    Ok(root.join(relative))
}

/// Write `contents` to `target`, creating parent directories and overwriting
/// any existing file.
pub fn write_file(target: &Path, contents: &str) -> Result<(), BundleError> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| BundleError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(target, contents).map_err(|source| BundleError::Write {
        path: target.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn missing_bundle_reports_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("absent.txt");
        let err = read_bundle(&path).unwrap_err();
        assert!(matches!(err, BundleError::NotFound { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn resolves_nested_relative_paths() -> Result<()> {
        let root = Path::new("/project");
        let target = resolve_target(root, "src/app/page.tsx")?;
        assert_eq!(target, root.join("src").join("app").join("page.tsx"));

        let dotted = resolve_target(root, "./src/[id]/route.ts")?;
        assert!(dotted.ends_with("route.ts"));
        Ok(())
    }

    #[test]
    fn rejects_paths_outside_root() {
        let root = Path::new("/project");
        for declared in ["", "../secrets.env", "src/../../etc/passwd", "/etc/passwd"] {
            let err = resolve_target(root, declared).unwrap_err();
            assert!(
                matches!(err, BundleError::UnsafePath { .. }),
                "{declared} should be rejected"
            );
        }
    }

    #[test]
    fn write_error_keeps_cause_as_source() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a"), "file, not a directory")?;

        let err = write_file(&temp.path().join("a/b.txt"), "x\n").unwrap_err();
        assert!(matches!(err, BundleError::Write { .. }));

        let message = err.to_string();
        let cause = std::error::Error::source(&err).expect("io cause attached");
        assert!(!message.contains(&cause.to_string()));
        Ok(())
    }

    #[test]
    fn write_creates_parents_and_overwrites() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let target = temp.path().join("a/b/c.txt");

        write_file(&target, "first\n")?;
        write_file(&target, "second\n")?;

        assert_eq!(fs::read_to_string(&target)?, "second\n");
        Ok(())
    }
}
