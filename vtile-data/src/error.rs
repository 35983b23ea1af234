//! Error type used by the crate.

use thiserror::Error;

use crate::GeometryType;

/// Violation of the tile data conventions, reported by the `validate` methods.
///
/// Containers never validate themselves; these errors only come from explicit validation calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileDataError {
    /// More than one geometry collection of a feature contains data.
    #[error("feature contains mixed geometry: {populated:?}")]
    MixedGeometry {
        /// Geometry types of all non-empty collections.
        populated: Vec<GeometryType>,
    },

    /// The populated geometry collection does not match the feature geometry type.
    #[error("feature geometry type is {expected:?}, but contains {found:?}")]
    GeometryTypeMismatch {
        /// Geometry type declared by the feature.
        expected: GeometryType,
        /// Geometry type of the populated collection.
        found: GeometryType,
    },

    /// A coordinate is NaN or infinite.
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,

    /// A line has less than 2 points.
    #[error("line {line} has {points} points")]
    DegenerateLine {
        /// Index of the line in the feature.
        line: usize,
        /// Number of points in the line.
        points: usize,
    },

    /// A polygon has no contours, or one of its contours has less than 3 points.
    #[error("contour {contour} of polygon {polygon} has {points} points")]
    DegenerateContour {
        /// Index of the polygon in the feature.
        polygon: usize,
        /// Index of the contour in the polygon.
        contour: usize,
        /// Number of points in the contour.
        points: usize,
    },

    /// A layer has an empty name.
    #[error("layer name is empty")]
    EmptyLayerName,

    /// A feature of a layer is invalid.
    #[error("feature {feature} of layer '{layer}': {source}")]
    InvalidFeature {
        /// Name of the layer.
        layer: String,
        /// Index of the feature in the layer.
        feature: usize,
        /// Feature error.
        source: Box<TileDataError>,
    },
}
