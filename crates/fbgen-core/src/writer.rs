//! Scaffold persistence.
//!
//! Directory creation is idempotent and files are always overwritten: re-running the
//! generator resets a module to the canonical template output, discarding manual edits.

use std::path::{Path, PathBuf};

use crate::error::{FbgenError, Result};

/// A rendered file ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Ordered list of every path written during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    paths: Vec<PathBuf>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths with `root` stripped, for display. Paths outside `root` are kept as-is.
    pub fn relative_to(&self, root: &Path) -> Vec<PathBuf> {
        self.paths
            .iter()
            .map(|p| p.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| p.clone()))
            .collect()
    }
}

/// Write one module's scaffold.
///
/// Creates `directory` (recursively, succeeding if it exists), then writes each file in
/// order, appending its path to `manifest` as soon as it is on disk. The first failure
/// stops the remaining files and is returned as [`FbgenError::WriteFailed`]; paths
/// already written stay in the manifest.
pub fn write_scaffold(directory: &Path, files: &[RenderedFile], manifest: &mut Manifest) -> Result<()> {
    std::fs::create_dir_all(directory).map_err(|e| FbgenError::WriteFailed {
        path: directory.to_path_buf(),
        source: e,
    })?;

    for file in files {
        std::fs::write(&file.path, &file.contents).map_err(|e| FbgenError::WriteFailed {
            path: file.path.clone(),
            source: e,
        })?;
        tracing::debug!("wrote {} ({} bytes)", file.path.display(), file.contents.len());
        manifest.push(file.path.clone());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(dir: &Path, name: &str, contents: &str) -> RenderedFile {
        RenderedFile {
            path: dir.join(name),
            contents: contents.into(),
        }
    }

    #[test]
    fn test_write_creates_directory_and_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a/b/fog");
        let files = vec![file(&dir, "fog.cpp", "cpp"), file(&dir, "fog.hpp", "hpp")];
        let mut manifest = Manifest::new();

        write_scaffold(&dir, &files, &mut manifest).unwrap();

        assert_eq!(std::fs::read_to_string(dir.join("fog.cpp")).unwrap(), "cpp");
        assert_eq!(std::fs::read_to_string(dir.join("fog.hpp")).unwrap(), "hpp");
        assert_eq!(manifest.paths(), &[dir.join("fog.cpp"), dir.join("fog.hpp")]);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("fog");
        std::fs::create_dir_all(&dir).unwrap();
        let mut manifest = Manifest::new();
        write_scaffold(&dir, &[file(&dir, "fog.cpp", "x")], &mut manifest).unwrap();
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("fog");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("fog.cpp"), "hand edited").unwrap();

        let mut manifest = Manifest::new();
        write_scaffold(&dir, &[file(&dir, "fog.cpp", "canonical")], &mut manifest).unwrap();

        assert_eq!(std::fs::read_to_string(dir.join("fog.cpp")).unwrap(), "canonical");
    }

    #[test]
    fn test_directory_failure_reports_path() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("fog");
        // A regular file where the directory must go.
        std::fs::write(&dir, "not a dir").unwrap();

        let mut manifest = Manifest::new();
        let err = write_scaffold(&dir, &[file(&dir, "fog.cpp", "x")], &mut manifest).unwrap_err();

        match err {
            FbgenError::WriteFailed { path, .. } => assert_eq!(path, dir),
            other => panic!("unexpected error: {other}"),
        }
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_file_failure_keeps_earlier_paths() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("fog");
        std::fs::create_dir_all(dir.join("fog.hpp")).unwrap();

        let files = vec![
            file(&dir, "fog.cpp", "cpp"),
            file(&dir, "fog.hpp", "hpp"),
            file(&dir, "fog.hlsl", "hlsl"),
        ];
        let mut manifest = Manifest::new();
        let err = write_scaffold(&dir, &files, &mut manifest).unwrap_err();

        assert!(matches!(err, FbgenError::WriteFailed { ref path, .. } if *path == dir.join("fog.hpp")));
        assert_eq!(manifest.paths(), &[dir.join("fog.cpp")]);
        assert!(!dir.join("fog.hlsl").exists());
    }

    #[test]
    fn test_relative_to() {
        let mut manifest = Manifest::new();
        manifest.push(PathBuf::from("/out/fog/fog.cpp"));
        manifest.push(PathBuf::from("/elsewhere/x.hpp"));
        assert_eq!(
            manifest.relative_to(Path::new("/out")),
            vec![PathBuf::from("fog/fog.cpp"), PathBuf::from("/elsewhere/x.hpp")]
        );
    }
}
