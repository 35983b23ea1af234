use serde::{Deserialize, Serialize};

use crate::{Layer, TileDataError};

/// Decoded content of a vector tile: root of the tile data tree.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileData {
    /// Layers in the order they were decoded.
    pub layers: Vec<Layer>,
}

impl TileData {
    /// Creates a tile without layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer to the end of the tile.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Returns the first layer with the given name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    /// Total number of features in all layers.
    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Whether the tile has no features.
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Layer::is_empty)
    }

    /// Validates all layers of the tile, stopping at the first invalid feature. See [`crate::Feature::validate`].
    pub fn validate(&self) -> Result<(), TileDataError> {
        self.layers.iter().try_for_each(Layer::validate)
    }
}
