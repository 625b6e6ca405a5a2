//! Scaffold planning: where a module's files go and which template fills each.
//!
//! ## Layout
//!
//! For a module `fog` under an output root with the builtin template set:
//! ```text
//! <root>/
//! └── fog/
//!     ├── fog.cpp
//!     ├── fog.hpp
//!     ├── fog.hlsl
//!     └── fog.hlsli
//! ```

use std::path::{Path, PathBuf};

use crate::module::ModuleDescriptor;
use crate::templates::{Template, TemplateSet};

/// One file of a scaffold.
#[derive(Debug, Clone)]
pub struct PlanEntry<'a> {
    /// File name relative to the plan directory, e.g. `fog.hlsli`.
    pub file_name: String,
    pub template: &'a Template,
}

/// The directory and files to produce for one module.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan<'a> {
    pub directory: PathBuf,
    pub entries: Vec<PlanEntry<'a>>,
}

impl ScaffoldPlan<'_> {
    /// Absolute (root-joined) path of an entry.
    pub fn path_of(&self, entry: &PlanEntry<'_>) -> PathBuf {
        self.directory.join(&entry.file_name)
    }
}

/// Compute the scaffold plan for `module` under `root`.
///
/// The directory and every file base name equal the module key; one entry is
/// produced per template, in template-set order. No I/O.
pub fn plan<'a>(root: &Path, module: &ModuleDescriptor, templates: &'a TemplateSet) -> ScaffoldPlan<'a> {
    let entries = templates
        .iter()
        .map(|template| PlanEntry {
            file_name: format!("{}.{}", module.key(), template.suffix()),
            template,
        })
        .collect();

    ScaffoldPlan {
        directory: root.join(module.key()),
        entries,
    }
}
