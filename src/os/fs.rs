//! # Filesystem helpers for transient admin resources.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AdminError, BoxError};
use crate::exec::{run, run_unit};

/// Deletes a file or a directory tree.
///
/// A path that does not exist is not an error.
pub fn remove_recursively(path: &Path) -> Result<(), AdminError> {
    run_unit(|| -> Result<(), BoxError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => std::fs::remove_dir_all(path)?,
            Ok(_) => std::fs::remove_file(path)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => return Err(error.into()),
        }
        Ok(())
    })
}

/// Creates a uniquely-named directory under the system temp dir.
///
/// The directory outlives the call; deleting it is the caller's job
/// (see [`remove_recursively`]).
pub fn create_temp_dir(prefix: &str) -> Result<PathBuf, AdminError> {
    run(|| -> Result<PathBuf, BoxError> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(dir.keep())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir_uses_prefix_and_persists() {
        let dir = create_temp_dir("clusterkit-test-").unwrap();
        assert!(dir.exists());
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("clusterkit-test-"), "got: {name}");
        remove_recursively(&dir).unwrap();
    }

    #[test]
    fn test_remove_recursively_deletes_nested_trees() {
        let root = create_temp_dir("clusterkit-tree-").unwrap();
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("segment.log"), b"x").unwrap();
        std::fs::write(root.join("leader.epoch"), b"y").unwrap();

        remove_recursively(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_remove_recursively_deletes_single_files() {
        let root = create_temp_dir("clusterkit-file-").unwrap();
        let file = root.join("checkpoint");
        std::fs::write(&file, b"z").unwrap();
        remove_recursively(&file).unwrap();
        assert!(!file.exists());
        remove_recursively(&root).unwrap();
    }

    #[test]
    fn test_remove_recursively_accepts_missing_paths() {
        remove_recursively(Path::new("/definitely/not/here/clusterkit")).unwrap();
    }
}
