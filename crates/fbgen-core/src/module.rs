//! Module descriptors: the validated `(key, display)` pairs a run scaffolds.

use std::fmt;

use crate::error::{FbgenError, Result};

/// One demo module to scaffold.
///
/// `key` names the directory, the file base names and the C++/HLSL namespace,
/// so it is restricted to lowercase ASCII letters, digits and underscores.
/// `display` is the human-readable name baked into the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    key: String,
    display: String,
}

impl ModuleDescriptor {
    /// Validate and build a descriptor.
    pub fn new(key: impl Into<String>, display: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let display = display.into();

        validate_key(&key)?;
        if display.trim().is_empty() {
            return Err(FbgenError::InvalidModule {
                key,
                reason: "display name is empty".into(),
            });
        }

        Ok(Self { key, display })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.display)
    }
}

fn validate_key(key: &str) -> Result<()> {
    let invalid = |reason: &str| FbgenError::InvalidModule {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let first = key.chars().next().ok_or_else(|| invalid("key is empty"))?;
    if first.is_ascii_digit() {
        return Err(invalid("key must not start with a digit"));
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(invalid(&format!(
            "character '{c}' not allowed (use a-z, 0-9 and '_')"
        )));
    }
    Ok(())
}
