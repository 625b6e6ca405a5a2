//! Binary inspector: file size and SHA-256 digest of a build output.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use fbgen_core::error::{FbgenError, Result};

/// Size and digest of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Lowercase hex SHA-256 of the file contents.
    pub sha256_hex: String,
}

impl BinaryInfo {
    /// Size in mebibytes.
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// Human-readable size, e.g. `1.50 MB (1572864 bytes)`.
    pub fn size_display(&self) -> String {
        format!("{:.2} MB ({} bytes)", self.size_mib(), self.size_bytes)
    }

    /// The two-line report printed by `fbgen binary-info`.
    pub fn report(&self) -> String {
        format!(
            "Executable size: {}\nSHA256: {}",
            self.size_display(),
            self.sha256_hex
        )
    }
}

/// Digest raw bytes.
pub fn describe(path: &Path, data: &[u8]) -> BinaryInfo {
    BinaryInfo {
        path: path.to_path_buf(),
        size_bytes: data.len() as u64,
        sha256_hex: hex::encode(Sha256::digest(data)),
    }
}

/// Read and digest the file at `path`.
pub fn inspect(path: &Path) -> Result<BinaryInfo> {
    if !path.exists() {
        return Err(FbgenError::InputNotFound(path.to_path_buf()));
    }
    let data = std::fs::read(path)?;
    tracing::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(describe(path, &data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.exe");
        std::fs::write(&path, b"").unwrap();

        let info = inspect(&path).unwrap();
        assert_eq!(info.size_bytes, 0);
        assert_eq!(info.size_display(), "0.00 MB (0 bytes)");
        assert_eq!(info.sha256_hex, EMPTY_SHA256);
        assert_eq!(
            info.report(),
            format!("Executable size: 0.00 MB (0 bytes)\nSHA256: {EMPTY_SHA256}")
        );
    }

    #[test]
    fn test_known_digest() {
        let info = describe(Path::new("abc"), b"abc");
        assert_eq!(
            info.sha256_hex,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(info.size_display(), "0.00 MB (3 bytes)");
    }

    #[test]
    fn test_mebibyte_formatting() {
        let info = describe(Path::new("big"), &vec![0u8; 1024 * 1024 * 3 / 2]);
        assert_eq!(info.size_display(), "1.50 MB (1572864 bytes)");
    }

    #[test]
    fn test_missing_file() {
        let err = inspect(Path::new("/tmp/nonexistent_fbgen_binary.exe")).unwrap_err();
        assert!(matches!(err, FbgenError::InputNotFound(_)));
    }
}
