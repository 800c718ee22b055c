//! `ngstate demo` – the bloss18 example link.

use anyhow::Result;
use ngstate_core::config::NgConfig;
use ngstate_core::share_url::to_url;
use ngstate_core::state::{ImageLayer, Layout, ViewerState};

const BLOSS18_IMAGE: &str = "boss://https://api.boss.neurodata.io/bloss/bloss18/image";

pub fn demo_state() -> ViewerState {
    let mut state = ViewerState::new();
    state
        .layers_mut()
        .insert("image", ImageLayer::new(BLOSS18_IMAGE));
    state.set_layout(Layout::Xy);
    state.set_voxel_coordinates([42000.0, 53780.0, 200.0]);
    state
}

pub fn run_demo(cfg: &NgConfig, prefix: Option<&str>) -> Result<()> {
    let prefix = prefix.unwrap_or(&cfg.viewer_prefix);
    let url = to_url(&demo_state(), prefix)?;
    println!("{url}");
    Ok(())
}
