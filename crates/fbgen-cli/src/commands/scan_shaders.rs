use std::path::Path;

use anyhow::Result;

use fbgen_tools::scanner;

use crate::output;

/// Print every HLSL file under `root` followed by its suspicious assignments.
///
/// Purely informational: findings never change the exit code.
pub fn run(root: &Path) -> Result<()> {
    let hits = scanner::scan_tree(root)?;
    if hits.is_empty() {
        output::print_warning(&format!("no .hlsl files under {}", root.display()));
        return Ok(());
    }
    print!("{}", scanner::format_report(&hits));
    Ok(())
}
