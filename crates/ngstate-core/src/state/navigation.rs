//! Camera position: pose (position + orientation) and zoom.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, StateError};

/// Largest magnitude at which every whole f64 is still an exact integer (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A coordinate component. Whole values serialize as JSON integers
/// (`42000`, not `42000.0`) so links stay short and match the viewer's output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord(pub f64);

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT_INT {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Coord)
    }
}

pub(crate) fn coords<const N: usize>(values: [f64; N]) -> [Coord; N] {
    values.map(Coord)
}

pub(crate) fn plain<const N: usize>(values: &[Coord; N]) -> [f64; N] {
    (*values).map(|c| c.0)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voxel_size: Option<[Coord; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voxel_coordinates: Option<[Coord; 3]>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    #[serde(default)]
    pub position: Position,
    /// Orientation quaternion `[x, y, z, w]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<[Coord; 4]>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    #[serde(default)]
    pub pose: Pose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<Coord>,
}

impl Navigation {
    pub(crate) fn validate(&self) -> Result<()> {
        let position = &self.pose.position;
        check_finite("voxelSize", position.voxel_size.iter().flatten())?;
        check_finite("voxelCoordinates", position.voxel_coordinates.iter().flatten())?;
        check_finite("orientation", self.pose.orientation.iter().flatten())?;
        check_finite("zoomFactor", self.zoom_factor.iter())?;
        Ok(())
    }
}

pub(crate) fn check_finite<'a>(field: &'static str, values: impl Iterator<Item = &'a Coord>) -> Result<()> {
    for c in values {
        if !c.0.is_finite() {
            return Err(StateError::NonFiniteCoordinate {
                field,
                value: c.0,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_coordinates_serialize_as_integers() {
        let json = serde_json::to_string(&coords([42000.0, 53780.0, 200.0])).unwrap();
        assert_eq!(json, "[42000,53780,200]");
    }

    #[test]
    fn fractional_coordinates_keep_their_fraction() {
        let json = serde_json::to_string(&coords([3.89, 3.89, 50.0])).unwrap();
        assert_eq!(json, "[3.89,3.89,50]");
    }

    #[test]
    fn camel_case_keys_and_omitted_fields() {
        let nav = Navigation {
            pose: Pose {
                position: Position {
                    voxel_size: None,
                    voxel_coordinates: Some(coords([1.0, 2.0, 3.0])),
                },
                orientation: None,
            },
            zoom_factor: Some(Coord(3.5)),
        };
        let json = serde_json::to_string(&nav).unwrap();
        assert_eq!(
            json,
            r#"{"pose":{"position":{"voxelCoordinates":[1,2,3]}},"zoomFactor":3.5}"#
        );
    }

    #[test]
    fn parses_viewer_navigation_block() {
        let json = r#"{"pose":{"position":{"voxelSize":[3.890000104904175,3.890000104904175,50],"voxelCoordinates":[42203.01171875,53001,160]}},"zoomFactor":3.890000104904175}"#;
        let nav: Navigation = serde_json::from_str(json).unwrap();
        let coords = plain(nav.pose.position.voxel_coordinates.as_ref().unwrap());
        assert_eq!(coords, [42203.01171875, 53001.0, 160.0]);
        assert!(nav.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan() {
        let mut nav = Navigation::default();
        nav.pose.position.voxel_coordinates = Some(coords([0.0, f64::NAN, 0.0]));
        let err = nav.validate().unwrap_err();
        assert!(matches!(
            err,
            StateError::NonFiniteCoordinate {
                field: "voxelCoordinates",
                ..
            }
        ));
    }
}
