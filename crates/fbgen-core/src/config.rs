//! Generator configuration.
//!
//! The compiled-in [`GeneratorConfig::default`] is what `fbgen scaffold` uses when no
//! config file is given. The same structure can be saved to and loaded from JSON:
//!
//! ```json
//! {
//!   "base_dir": "src/buffet/demos",
//!   "modules": [
//!     { "key": "anim", "display": "Anim" },
//!     { "key": "crate", "display": "Crate" }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FbgenError, Result};
use crate::module::ModuleDescriptor;

/// Directory, relative to the output root, that module directories are created in.
pub const DEFAULT_BASE_DIR: &str = "src/buffet/demos";

/// The demo modules scaffolded by default.
const DEFAULT_MODULES: &[(&str, &str)] = &[
    ("anim", "Anim"),
    ("crate", "Crate"),
    ("env", "Env"),
    ("fibers", "Fibers"),
    ("rain", "Rain"),
    ("tree", "Tree"),
    ("cards", "Cards"),
];

/// An unvalidated module entry as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub key: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub base_dir: PathBuf,
    pub modules: Vec<ModuleEntry>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            modules: DEFAULT_MODULES
                .iter()
                .map(|(key, display)| ModuleEntry {
                    key: (*key).into(),
                    display: (*display).into(),
                })
                .collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FbgenError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| FbgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| FbgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Validate every entry, preserving order.
    pub fn descriptors(&self) -> Result<Vec<ModuleDescriptor>> {
        self.modules
            .iter()
            .map(|m| ModuleDescriptor::new(m.key.as_str(), m.display.as_str()))
            .collect()
    }

    /// Directory that module directories are created in.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modules() {
        let config = GeneratorConfig::default();
        let keys: Vec<_> = config.modules.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["anim", "crate", "env", "fibers", "rain", "tree", "cards"]);
        assert_eq!(config.base_dir, PathBuf::from("src/buffet/demos"));
        assert_eq!(config.descriptors().unwrap().len(), 7);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fbgen.config.json");
        let config = GeneratorConfig {
            base_dir: PathBuf::from("demos"),
            modules: vec![ModuleEntry {
                key: "fog".into(),
                display: "Fog".into(),
            }],
        };
        config.save(&path).unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing() {
        let err = GeneratorConfig::load(Path::new("/tmp/nonexistent_fbgen_config.json")).unwrap_err();
        assert!(matches!(err, FbgenError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ \"base_dir\": ").unwrap();
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(FbgenError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_descriptors_reject_bad_key() {
        let config = GeneratorConfig {
            base_dir: PathBuf::new(),
            modules: vec![ModuleEntry {
                key: "Fog Volume".into(),
                display: "Fog Volume".into(),
            }],
        };
        assert!(matches!(
            config.descriptors(),
            Err(FbgenError::InvalidModule { .. })
        ));
    }

    #[test]
    fn test_output_dir() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.output_dir(Path::new("/repo")),
            PathBuf::from("/repo/src/buffet/demos")
        );
    }
}
