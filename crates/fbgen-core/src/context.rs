//! Per-module placeholder bindings.
//!
//! One [`PlaceholderContext`] is built per module and reused for every template
//! kind, which is what keeps the four generated files consistent with each
//! other.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::module::ModuleDescriptor;

/// Placeholder bound to the module key (`fog`).
pub const LOWER_NAME: &str = "lower_name";
/// Placeholder bound to the module display name (`Fog`).
pub const UPPER_NAME: &str = "upper_name";

/// Marker name → substitution text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlaceholderContext {
    bindings: BTreeMap<String, String>,
}

impl PlaceholderContext {
    /// Build the standard context for a module.
    pub fn for_module(module: &ModuleDescriptor) -> Self {
        let mut ctx = Self::default();
        ctx.insert(LOWER_NAME, module.key());
        ctx.insert(UPPER_NAME, module.display());
        ctx
    }

    /// Bind (or rebind) a marker.
    pub fn insert(&mut self, marker: impl Into<String>, value: impl Into<String>) {
        self.bindings.insert(marker.into(), value.into());
    }

    pub fn get(&self, marker: &str) -> Option<&str> {
        self.bindings.get(marker).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
