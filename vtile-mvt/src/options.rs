use serde::{Deserialize, Serialize};

/// Default extent of a vector tile layer, used when a layer does not specify one.
pub const DEFAULT_EXTENT: u32 = 4096;

/// Settings of [`decode_tile`](crate::decode_tile).
///
/// All fields have defaults, so the options can be deserialized from a partial configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// If set, invalid layers, features and values are skipped with a warning instead of failing the whole tile.
    pub skip_recoverable_errors: bool,
    /// Extent for layers that do not specify it.
    pub default_extent: u32,
    /// Value of `z` for all decoded points.
    pub z: f32,
    /// If set, only layers with these names are decoded.
    pub layers: Option<Vec<String>>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            skip_recoverable_errors: true,
            default_extent: DEFAULT_EXTENT,
            z: 0.0,
            layers: None,
        }
    }
}

impl DecodeOptions {
    /// Options that fail on any invalid content of the tile.
    pub fn strict() -> Self {
        Self {
            skip_recoverable_errors: false,
            ..Default::default()
        }
    }

    /// Limits decoding to the layers with the given names.
    pub fn with_layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers = Some(layers.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn accepts_layer(&self, name: &str) -> bool {
        match &self.layers {
            Some(layers) => layers.iter().any(|l| l == name),
            None => true,
        }
    }
}
