//! Viewer state model.
//!
//! Covers the part of the viewer's JSON state that links are built from:
//! named layers, layout, and navigation. Top-level keys outside that subset
//! are kept verbatim so a decoded link re-encodes without loss.

mod layer;
mod layers;
mod layout;
mod navigation;

pub use layer::{BlendMode, ImageLayer, Layer, SegmentationLayer};
pub use layers::LayerSet;
pub use layout::Layout;
pub use navigation::{Coord, Navigation, Pose, Position};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use navigation::{check_finite, coords, plain};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    #[serde(default)]
    pub layers: LayerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective_orientation: Option<[Coord; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective_zoom: Option<Coord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_slices: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerSet {
        &mut self.layers
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    fn navigation_mut(&mut self) -> &mut Navigation {
        self.navigation.get_or_insert_with(Navigation::default)
    }

    pub fn voxel_coordinates(&self) -> Option<[f64; 3]> {
        self.navigation
            .as_ref()?
            .pose
            .position
            .voxel_coordinates
            .as_ref()
            .map(plain)
    }

    pub fn set_voxel_coordinates(&mut self, xyz: [f64; 3]) {
        self.navigation_mut().pose.position.voxel_coordinates = Some(coords(xyz));
    }

    pub fn voxel_size(&self) -> Option<[f64; 3]> {
        self.navigation
            .as_ref()?
            .pose
            .position
            .voxel_size
            .as_ref()
            .map(plain)
    }

    pub fn set_voxel_size(&mut self, size: [f64; 3]) {
        self.navigation_mut().pose.position.voxel_size = Some(coords(size));
    }

    pub fn set_orientation(&mut self, quaternion: [f64; 4]) {
        self.navigation_mut().pose.orientation = Some(coords(quaternion));
    }

    pub fn set_zoom_factor(&mut self, zoom: f64) {
        self.navigation_mut().zoom_factor = Some(Coord(zoom));
    }

    /// Checks every layer source and alpha, then every coordinate.
    pub fn validate(&self) -> Result<()> {
        for (name, layer) in self.layers.iter() {
            layer.validate(name)?;
        }
        if let Some(nav) = &self.navigation {
            nav.validate()?;
        }
        check_finite("perspectiveZoom", self.perspective_zoom.iter())?;
        check_finite(
            "perspectiveOrientation",
            self.perspective_orientation.iter().flatten(),
        )?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
