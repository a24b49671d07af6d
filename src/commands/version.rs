use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("wmipnp version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
