//! Viewer panel layout.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::StateError;

/// Panel arrangement shown by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Xy,
    Xz,
    Yz,
    Xy3d,
    Xz3d,
    Yz3d,
    FourPanel,
    ThreeD,
}

impl Layout {
    pub const ALL: [Layout; 8] = [
        Layout::Xy,
        Layout::Xz,
        Layout::Yz,
        Layout::Xy3d,
        Layout::Xz3d,
        Layout::Yz3d,
        Layout::FourPanel,
        Layout::ThreeD,
    ];

    /// Wire name used in the state JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Xy => "xy",
            Layout::Xz => "xz",
            Layout::Yz => "yz",
            Layout::Xy3d => "xy-3d",
            Layout::Xz3d => "xz-3d",
            Layout::Yz3d => "yz-3d",
            Layout::FourPanel => "4panel",
            Layout::ThreeD => "3d",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| StateError::InvalidLayout(s.to_string()))
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
