//! `ngstate url ...` – build a state from flags and print its link.

use anyhow::{Context, Result};
use ngstate_core::config::NgConfig;
use ngstate_core::share_url::to_url;
use ngstate_core::state::{ImageLayer, SegmentationLayer, ViewerState};

use crate::cli::UrlArgs;

/// Flags win over config; config fills whatever a flag left unset.
pub fn build_state(cfg: &NgConfig, args: &UrlArgs) -> Result<ViewerState> {
    let mut state = ViewerState::new();

    let opacity = args.opacity.or(cfg.image.opacity);
    let blend = args.blend.or(cfg.image.blend);
    for ns in &args.images {
        let mut layer = ImageLayer::new(ns.source.as_str());
        layer.opacity = opacity;
        layer.blend = blend;
        if state.layers_mut().insert(ns.name.as_str(), layer).is_some() {
            tracing::warn!("layer {:?} given more than once; last one wins", ns.name);
        }
    }
    for ns in &args.segmentations {
        let layer = SegmentationLayer::new(ns.source.as_str());
        if state.layers_mut().insert(ns.name.as_str(), layer).is_some() {
            tracing::warn!("layer {:?} given more than once; last one wins", ns.name);
        }
    }

    if let Some(layout) = args.layout.or(cfg.default_layout) {
        state.set_layout(layout);
    }
    if let Some(xyz) = args.position {
        state.set_voxel_coordinates(xyz);
    }
    if let Some(size) = args.voxel_size {
        state.set_voxel_size(size);
    }
    if let Some(zoom) = args.zoom {
        state.set_zoom_factor(zoom);
    }

    Ok(state)
}

pub fn run_url(cfg: &NgConfig, args: &UrlArgs) -> Result<()> {
    let state = build_state(cfg, args)?;
    let prefix = args.prefix.as_deref().unwrap_or(&cfg.viewer_prefix);
    let url = to_url(&state, prefix).context("build viewer link")?;
    println!("{url}");
    Ok(())
}
