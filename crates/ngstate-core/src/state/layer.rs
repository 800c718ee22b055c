//! Layer records: a named data source plus rendering metadata.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StateError};
use crate::source::DataSource;

/// How an image layer is composited over the layers beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Default,
    Additive,
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlendMode::Default => "default",
            BlendMode::Additive => "additive",
        })
    }
}

impl FromStr for BlendMode {
    type Err = StateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "default" => Ok(BlendMode::Default),
            "additive" => Ok(BlendMode::Additive),
            other => Err(StateError::InvalidBlend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend: Option<BlendMode>,
    /// GLSL fragment main.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shader: Option<String>,
    /// Keys this model does not interpret, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageLayer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            opacity: None,
            blend: None,
            shader: None,
            extra: Map::new(),
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = Some(blend);
        self
    }

    pub fn with_shader(mut self, shader: impl Into<String>) -> Self {
        self.shader = Some(shader.into());
        self
    }
}

/// 64-bit segment ids travel as decimal strings; JSON numbers lose precision past 2^53.
mod segment_ids {
    use super::*;

    pub fn serialize<S: Serializer>(ids: &[u64], serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(ids.iter().map(|id| id.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<u64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Id {
            Num(u64),
            Str(String),
        }

        Vec::<Id>::deserialize(deserializer)?
            .into_iter()
            .map(|id| match id {
                Id::Num(n) => Ok(n),
                Id::Str(s) => s.parse().map_err(|_| {
                    serde::de::Error::custom(format!("invalid segment id {s:?}"))
                }),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationLayer {
    pub source: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "segment_ids")]
    pub segments: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_alpha: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SegmentationLayer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            segments: Vec::new(),
            selected_alpha: None,
            extra: Map::new(),
        }
    }

    pub fn with_segments(mut self, segments: impl IntoIterator<Item = u64>) -> Self {
        self.segments = segments.into_iter().collect();
        self
    }
}

/// A viewer layer, discriminated by the JSON `"type"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Image(ImageLayer),
    Segmentation(SegmentationLayer),
}

impl Layer {
    pub fn source(&self) -> &str {
        match self {
            Layer::Image(l) => &l.source,
            Layer::Segmentation(l) => &l.source,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Layer::Image(_) => "image",
            Layer::Segmentation(_) => "segmentation",
        }
    }

    /// Checks the source URI and any alpha values. `name` is only used in errors.
    pub fn validate(&self, name: &str) -> Result<()> {
        DataSource::parse(self.source())?;
        let alpha = match self {
            Layer::Image(l) => l.opacity,
            Layer::Segmentation(l) => l.selected_alpha,
        };
        if let Some(value) = alpha {
            if !(0.0..=1.0).contains(&value) {
                return Err(StateError::InvalidOpacity {
                    layer: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl From<ImageLayer> for Layer {
    fn from(layer: ImageLayer) -> Self {
        Layer::Image(layer)
    }
}

impl From<SegmentationLayer> for Layer {
    fn from(layer: SegmentationLayer) -> Self {
        Layer::Segmentation(layer)
    }
}
