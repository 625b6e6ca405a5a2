use anyhow::Result;

use fbgen_tools::star::{self, StarParams};

/// Print the star mesh tables, ready to paste into a shared header.
pub fn run(params: StarParams) -> Result<()> {
    let mesh = star::generate(&params)?;
    print!("{}", mesh.to_source());
    Ok(())
}
