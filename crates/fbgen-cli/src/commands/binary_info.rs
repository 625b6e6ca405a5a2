use std::path::Path;

use anyhow::Result;

use fbgen_tools::binary;

/// Print the size and SHA-256 digest of a built binary.
pub fn run(path: &Path) -> Result<()> {
    let info = binary::inspect(path)?;
    println!("{}", info.report());
    Ok(())
}
