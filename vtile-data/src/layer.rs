use serde::{Deserialize, Serialize};

use crate::{Feature, TileDataError};

/// Named group of features of a tile, e.g. "roads" or "water".
///
/// The order of features is the order they were decoded in, and consumers may rely on it for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    name: String,
    /// Features of the layer.
    pub features: Vec<Feature>,
}

impl Layer {
    /// Creates a layer without features.
    ///
    /// A layer must have a non-empty name. This is not checked here, [`Layer::validate`] reports an empty name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: vec![],
        }
    }

    /// Name of the layer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a feature to the end of the layer.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Number of features in the layer.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the layer has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Checks that the layer has a name and validates all of its features. See [`Feature::validate`].
    pub fn validate(&self) -> Result<(), TileDataError> {
        if self.name.is_empty() {
            return Err(TileDataError::EmptyLayerName);
        }

        for (index, feature) in self.features.iter().enumerate() {
            feature
                .validate()
                .map_err(|err| TileDataError::InvalidFeature {
                    layer: self.name.clone(),
                    feature: index,
                    source: Box::new(err),
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{GeometryType, Point};

    #[test]
    fn new_layer() {
        let layer = Layer::new("water");
        assert_eq!(layer.name(), "water");
        assert!(layer.features.is_empty());
        assert!(layer.is_empty());
    }

    #[test]
    fn features_keep_append_order() {
        let mut layer = Layer::new("water");
        for i in 0..3 {
            layer.push(Feature::new(GeometryType::Polygons).with_property("index", i as f32));
        }

        assert_eq!(layer.features.len(), 3);
        assert_eq!(layer.len(), 3);
        let order: Vec<f32> = layer
            .features
            .iter()
            .map(|f| f.properties.numeric("index"))
            .collect();
        assert_eq!(order, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn validate_reports_feature() {
        let mut layer = Layer::new("poi");
        layer.push(Feature::with_points(vec![Point::new(0.0, 0.0, 0.0)]));
        layer.push(Feature::with_points(vec![Point::new(f32::NAN, 0.0, 0.0)]));

        let err = layer.validate().unwrap_err();
        assert_matches!(
            &err,
            TileDataError::InvalidFeature { layer, feature: 1, source }
                if layer == "poi" && **source == TileDataError::NonFiniteCoordinate
        );
        assert_eq!(
            err.to_string(),
            "feature 1 of layer 'poi': coordinate is not finite"
        );
    }

    #[test]
    fn validate_empty_name() {
        let mut layer = Layer::new("");
        assert_eq!(layer.name(), "");
        assert_eq!(layer.validate(), Err(TileDataError::EmptyLayerName));

        layer.push(Feature::with_points(vec![Point::new(0.0, 0.0, 0.0)]));
        assert_eq!(layer.validate(), Err(TileDataError::EmptyLayerName));
        assert_eq!(Layer::new("poi").validate(), Ok(()));
    }
}
