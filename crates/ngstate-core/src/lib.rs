//! Build, validate, and share Neuroglancer viewer states as links.
//!
//! ```no_run
//! use ngstate_core::share_url::{to_url, DEFAULT_VIEWER_PREFIX};
//! use ngstate_core::state::{ImageLayer, Layout, ViewerState};
//!
//! let mut state = ViewerState::new();
//! state.layers_mut().insert(
//!     "image",
//!     ImageLayer::new("boss://https://api.boss.neurodata.io/bloss/bloss18/image"),
//! );
//! state.set_layout(Layout::Xy);
//! state.set_voxel_coordinates([42000.0, 53780.0, 200.0]);
//! println!("{}", to_url(&state, DEFAULT_VIEWER_PREFIX)?);
//! # Ok::<(), ngstate_core::error::StateError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub mod share_url;
pub mod source;
pub mod state;
