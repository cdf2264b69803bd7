//! Confines path-taking operations to an optional root directory.

use std::path::{Component, Path, PathBuf};

use crate::error::{CaptionError, ConfigError, Result};

/// Checks that user-supplied paths stay inside the allowed root.
///
/// With no root configured every path passes unchanged.
#[derive(Debug, Clone, Default)]
pub struct PathGuard {
    root: Option<PathBuf>,
}

impl PathGuard {
    /// Create a guard. The root must exist; it is canonicalized once here.
    pub fn new(root: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let root = match root {
            Some(root) => Some(std::fs::canonicalize(root).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "server.allowed_root {} is not accessible: {e}",
                    root.display()
                ))
            })?),
            None => None,
        };
        Ok(Self { root })
    }

    /// The canonical root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Fail with `Forbidden` if `path` resolves outside the root.
    ///
    /// Paths that do not exist yet are resolved through their nearest existing
    /// ancestor, so a missing image inside the root still passes and is later
    /// reported as not found. Any `..` left after that ancestor is rejected.
    pub async fn check(&self, path: &Path) -> Result<()> {
        let Some(root) = &self.root else {
            return Ok(());
        };

        match resolve(path).await {
            Some(resolved) if resolved.starts_with(root) => Ok(()),
            _ => {
                tracing::warn!("Rejected path outside allowed root: {}", path.display());
                Err(CaptionError::Forbidden(path.to_path_buf()))
            }
        }
    }
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
async fn resolve(path: &Path) -> Option<PathBuf> {
    let mut missing = Vec::new();
    let mut current = path;

    loop {
        let existing = if current.as_os_str().is_empty() {
            Path::new(".")
        } else {
            current
        };
        if let Ok(mut resolved) = tokio::fs::canonicalize(existing).await {
            for component in missing.iter().rev() {
                match component {
                    Component::Normal(name) => resolved.push(name),
                    Component::CurDir => {}
                    _ => return None,
                }
            }
            return Some(resolved);
        }

        missing.push(current.components().next_back()?);
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_root_allows_anything() {
        let guard = PathGuard::new(None).unwrap();
        assert!(guard.check(Path::new("/etc/passwd")).await.is_ok());
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PathGuard::new(Some(&dir.path().join("gone"))).unwrap_err();
        assert!(err.to_string().contains("allowed_root"));
    }

    #[tokio::test]
    async fn test_inside_root_passes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        let guard = PathGuard::new(Some(dir.path())).unwrap();

        assert!(guard.check(&dir.path().join("a.jpg")).await.is_ok());
        assert!(guard.check(dir.path()).await.is_ok());
        // Not yet written, resolved through its parent
        assert!(guard.check(&dir.path().join("a.txt")).await.is_ok());
    }

    #[tokio::test]
    async fn test_outside_root_is_forbidden() {
        let root = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        std::fs::write(other.path().join("b.jpg"), b"x").unwrap();
        let guard = PathGuard::new(Some(root.path())).unwrap();

        let err = guard.check(&other.path().join("b.jpg")).await.unwrap_err();
        assert!(matches!(err, CaptionError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_dot_dot_escape_is_forbidden() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("root");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(parent.path().join("secret.jpg"), b"x").unwrap();
        let guard = PathGuard::new(Some(&root)).unwrap();

        let err = guard
            .check(&root.join("..").join("secret.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, CaptionError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_missing_nested_path_inside_root_passes() {
        let dir = tempfile::tempdir().unwrap();
        let guard = PathGuard::new(Some(dir.path())).unwrap();

        assert!(guard.check(&dir.path().join("sub").join("nope.jpg")).await.is_ok());
        assert!(guard
            .check(&dir.path().join("a").join("b").join("c.txt"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_dot_dot_through_missing_dir_is_forbidden() {
        let dir = tempfile::tempdir().unwrap();
        let guard = PathGuard::new(Some(dir.path())).unwrap();

        // Would land back inside the root lexically, but cannot be resolved
        let path = dir.path().join("gone").join("..").join("a.jpg");
        assert!(matches!(
            guard.check(&path).await,
            Err(CaptionError::Forbidden(_))
        ));

        let escape = dir.path().join("gone").join("..").join("..").join("x.jpg");
        assert!(matches!(
            guard.check(&escape).await,
            Err(CaptionError::Forbidden(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_out_of_root_is_forbidden() {
        let root = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        std::fs::write(other.path().join("secret.txt"), "x").unwrap();
        std::os::unix::fs::symlink(other.path().join("secret.txt"), root.path().join("a.txt"))
            .unwrap();
        let guard = PathGuard::new(Some(root.path())).unwrap();

        assert!(matches!(
            guard.check(&root.path().join("a.txt")).await,
            Err(CaptionError::Forbidden(_))
        ));
    }
}
