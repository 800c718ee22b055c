//! Ordered, name-keyed layer collection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::layer::Layer;

/// Layers keyed by name, in assignment order. The viewer draws them in this
/// order, so re-assigning an existing name keeps its slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerSet(IndexMap<String, Layer>);

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `layer` under `name`, returning the layer it replaced.
    pub fn insert(&mut self, name: impl Into<String>, layer: impl Into<Layer>) -> Option<Layer> {
        self.0.insert(name.into(), layer.into())
    }

    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.0.get_mut(name)
    }

    /// Removes `name`, shifting later layers up one slot.
    pub fn remove(&mut self, name: &str) -> Option<Layer> {
        self.0.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Layer)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::layer::{ImageLayer, SegmentationLayer};

    #[test]
    fn keeps_assignment_order() {
        let mut layers = LayerSet::new();
        layers.insert("image", ImageLayer::new("precomputed://gs://b/image"));
        layers.insert("ground_truth", SegmentationLayer::new("precomputed://gs://b/gt"));
        layers.insert("overlay", ImageLayer::new("python://volume/abc"));
        assert_eq!(
            layers.names().collect::<Vec<_>>(),
            ["image", "ground_truth", "overlay"]
        );
    }

    #[test]
    fn reassigning_replaces_in_place() {
        let mut layers = LayerSet::new();
        layers.insert("a", ImageLayer::new("precomputed://gs://b/a"));
        layers.insert("b", ImageLayer::new("precomputed://gs://b/b"));
        let old = layers.insert("a", ImageLayer::new("precomputed://gs://b/a2"));

        assert_eq!(old.unwrap().source(), "precomputed://gs://b/a");
        assert_eq!(layers.len(), 2);
        assert_eq!(layers.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(layers.get("a").unwrap().source(), "precomputed://gs://b/a2");
    }

    #[test]
    fn remove_shifts_later_layers() {
        let mut layers = LayerSet::new();
        for name in ["x", "y", "z"] {
            layers.insert(name, ImageLayer::new(format!("precomputed://gs://b/{name}")));
        }
        assert!(layers.remove("x").is_some());
        assert!(layers.remove("x").is_none());
        assert_eq!(layers.names().collect::<Vec<_>>(), ["y", "z"]);
    }

    #[test]
    fn get_mut_edits_layer_in_place() {
        let mut layers = LayerSet::new();
        layers.insert("image", ImageLayer::new("precomputed://gs://b/image"));
        layers.insert("seg", SegmentationLayer::new("precomputed://gs://b/seg"));

        match layers.get_mut("image") {
            Some(Layer::Image(l)) => l.opacity = Some(0.25),
            other => panic!("expected image layer, got {other:?}"),
        }
        assert!(layers.get_mut("missing").is_none());

        match layers.get("image") {
            Some(Layer::Image(l)) => assert_eq!(l.opacity, Some(0.25)),
            other => panic!("expected image layer, got {other:?}"),
        }
        assert_eq!(layers.names().collect::<Vec<_>>(), ["image", "seg"]);
    }

    #[test]
    fn serializes_as_json_object_in_order() {
        let mut layers = LayerSet::new();
        layers.insert("zeta", ImageLayer::new("precomputed://gs://b/z"));
        layers.insert("alpha", ImageLayer::new("precomputed://gs://b/a"));
        let json = serde_json::to_string(&layers).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);

        let back: LayerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layers);
    }
}
