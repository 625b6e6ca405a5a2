use std::path::Path;

use anyhow::Result;

use fbgen_core::config::GeneratorConfig;
use fbgen_core::driver::{self, RunStatus};
use fbgen_core::templates::TemplateSet;

use crate::output;

/// Scaffold every configured demo module.
///
/// Loads the module list (compiled-in unless `config_path` is given), renders the
/// builtin template set for each module and writes the files under
/// `<root>/<base_dir>/<key>/`. Prints every written path; exits non-zero if any
/// module could not be fully written.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<()> {
    output::print_header("fbgen scaffold");

    let config = match config_path {
        Some(path) => {
            tracing::info!("loading module list from {}", path.display());
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig::default(),
    };
    let modules = config.descriptors()?;
    let out_dir = config.output_dir(root);

    output::print_key_value("Output", &out_dir.display().to_string());
    output::print_key_value("Modules", &modules.len().to_string());

    output::print_step(1, 1, "Rendering and writing templates...");
    let report = driver::run(&out_dir, &modules, &TemplateSet::builtin())?;

    for path in report.manifest.relative_to(root) {
        println!("{}", path.display());
    }

    match report.status() {
        RunStatus::Completed => {
            output::print_success(&format!(
                "Scaffolded {} modules ({} files)",
                modules.len(),
                report.manifest.len()
            ));
            Ok(())
        }
        RunStatus::CompletedWithFailures => {
            for failure in &report.failures {
                output::print_error(&format!(
                    "{}: {}",
                    failure.key,
                    output::error_chain(&failure.error)
                ));
            }
            anyhow::bail!(
                "{} of {} modules failed to scaffold",
                report.failures.len(),
                modules.len()
            )
        }
    }
}
