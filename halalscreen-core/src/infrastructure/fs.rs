// halalscreen-core/src/infrastructure/fs.rs

use crate::error::HalalScreenError;
use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Write content to a file atomically using a temporary file.
///
/// The temporary file lives in the target's directory (created if needed) so the
/// final rename never crosses filesystems. The target is either fully written or
/// left untouched.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Joins a configured path onto the project directory.
///
/// Relative paths may not climb out of the project with `..`. Absolute paths are
/// taken as an explicit operator choice and returned unchanged.
pub fn resolve_in_project(
    project_dir: &Path,
    configured: &str,
) -> Result<PathBuf, HalalScreenError> {
    let candidate = Path::new(configured);
    if candidate.is_absolute() {
        return Ok(candidate.to_path_buf());
    }
    if candidate
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(HalalScreenError::UnsafePath(configured.to_string()));
    }
    Ok(project_dir.join(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parent_and_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("nested/state/session.json");

        atomic_write(&file_path, "{}")?;

        assert_eq!(fs::read_to_string(file_path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");

        atomic_write(&file_path, "Initial")?;
        atomic_write(&file_path, "Updated")?;

        assert_eq!(fs::read_to_string(file_path)?, "Updated");
        Ok(())
    }

    #[test]
    fn test_resolve_in_project() -> Result<()> {
        let root = Path::new("/srv/screener");
        assert_eq!(
            resolve_in_project(root, "data/market.yaml")?,
            root.join("data/market.yaml")
        );
        assert_eq!(
            resolve_in_project(root, "/tmp/session.json")?,
            PathBuf::from("/tmp/session.json")
        );
        assert!(matches!(
            resolve_in_project(root, "../../etc/passwd"),
            Err(HalalScreenError::UnsafePath(_))
        ));
        Ok(())
    }
}
