//! `ngstate source <uri>` – describe a layer source.

use anyhow::Result;
use ngstate_core::source::DataSource;

pub fn run_source(uri: &str) -> Result<()> {
    let source = DataSource::parse(uri)?;
    tracing::debug!(protocol = %source.protocol(), "parsed source {uri}");
    println!("{source}");
    Ok(())
}
