//! Generator driver: scaffold every configured module and collect the results.
//!
//! For each module, in order: build its [`PlaceholderContext`], compute the
//! [`plan`](crate::plan::plan), render every entry, then write them.
//!
//! ## Failure policy
//!
//! - Template errors ([`FbgenError::UnboundPlaceholder`], [`FbgenError::TemplateRender`])
//!   stop the run. Rendering happens before a module writes anything, so the offending
//!   module leaves no partial scaffold.
//! - Write errors are isolated per module: the failure is recorded, earlier modules are
//!   left as written, and the driver continues with the next module.

use std::collections::HashSet;
use std::path::Path;

use crate::context::PlaceholderContext;
use crate::error::{FbgenError, Result};
use crate::module::ModuleDescriptor;
use crate::plan;
use crate::templates::renderer::TemplateRenderer;
use crate::templates::TemplateSet;
use crate::writer::{self, Manifest, RenderedFile};

/// A module whose scaffold could not be fully written.
#[derive(Debug)]
pub struct ModuleFailure {
    pub key: String,
    pub error: FbgenError,
}

/// Final state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    CompletedWithFailures,
}

/// Everything a run produced: the manifest of written paths and per-module failures.
#[derive(Debug, Default)]
pub struct RunReport {
    pub manifest: Manifest,
    pub failures: Vec<ModuleFailure>,
}

impl RunReport {
    pub fn status(&self) -> RunStatus {
        if self.failures.is_empty() {
            RunStatus::Completed
        } else {
            RunStatus::CompletedWithFailures
        }
    }
}

/// Scaffold `modules` under `root` with `templates`.
///
/// Returns `Err` only for configuration defects (duplicate module keys, template
/// errors). Filesystem failures are reported in [`RunReport::failures`].
pub fn run(root: &Path, modules: &[ModuleDescriptor], templates: &TemplateSet) -> Result<RunReport> {
    let mut seen = HashSet::new();
    for module in modules {
        if !seen.insert(module.key()) {
            return Err(FbgenError::DuplicateModule(module.key().to_string()));
        }
    }

    let renderer = TemplateRenderer::new();
    let mut report = RunReport::default();

    for module in modules {
        let context = PlaceholderContext::for_module(module);
        let plan = plan::plan(root, module, templates);

        let files = plan
            .entries
            .iter()
            .map(|entry| -> Result<RenderedFile> {
                Ok(RenderedFile {
                    path: plan.path_of(entry),
                    contents: renderer.render(entry.template, &context)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        match writer::write_scaffold(&plan.directory, &files, &mut report.manifest) {
            Ok(()) => {
                tracing::info!("scaffolded {module} in {}", plan.directory.display());
            }
            Err(error) => {
                tracing::warn!("module {} failed: {error}", module.key());
                report.failures.push(ModuleFailure {
                    key: module.key().to_string(),
                    error,
                });
            }
        }
    }

    Ok(report)
}
