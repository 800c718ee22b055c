//! `ngstate decode <url>` – print the state carried by a link.

use anyhow::{Context, Result};
use ngstate_core::share_url::from_url;

pub fn run_decode(url: &str, compact: bool) -> Result<()> {
    let state = from_url(url).context("decode viewer link")?;
    let json = if compact {
        serde_json::to_string(&state)?
    } else {
        serde_json::to_string_pretty(&state)?
    };
    println!("{json}");
    Ok(())
}
