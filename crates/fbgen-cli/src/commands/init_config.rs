use std::path::Path;

use anyhow::Result;

use fbgen_core::config::GeneratorConfig;

use crate::output;

/// Write the compiled-in generator configuration to `output_path`.
pub fn run(output_path: &Path, force: bool) -> Result<()> {
    output::print_header("fbgen init-config");

    if output_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            output_path.display()
        );
    }
    if output_path.exists() {
        output::print_warning(&format!("Overwriting {}", output_path.display()));
    }

    let config = GeneratorConfig::default();
    config.save(output_path)?;

    output::print_success(&format!(
        "Wrote {} modules to {}",
        config.modules.len(),
        output_path.display()
    ));
    println!();
    println!("  Next steps:");
    println!("    edit {}", output_path.display());
    println!("    fbgen scaffold --config {}", output_path.display());
    println!();

    Ok(())
}
