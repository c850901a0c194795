use crate::error::{Result, UscGetError};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => UscGetError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => UscGetError::from(e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_exists_creates_missing_parents() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("raw").join("deep");

        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_exists_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("xml");

        ensure_dir_exists(&dir).unwrap();
        ensure_dir_exists(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_exists_leaves_existing_contents_alone() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("raw");
        ensure_dir_exists(&dir).unwrap();
        std::fs::write(dir.join("keep.txt"), "keep").unwrap();

        ensure_dir_exists(&dir).unwrap();
        assert_eq!(std::fs::read_to_string(dir.join("keep.txt")).unwrap(), "keep");
    }
}
