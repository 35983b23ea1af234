use serde::{Deserialize, Serialize};

use crate::{FeatureGeometry, GeometryType, Line, Point, Polygon, Properties, TileDataError, Value};

/// Single geometric entity of a layer with its attributes.
///
/// Only the collection that corresponds to `geometry_type` should contain data. This is a contract for the code that
/// fills the feature and is not checked, use [`Feature::validate`] to verify it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Kind of geometry in the feature.
    pub geometry_type: GeometryType,
    /// Point geometries.
    pub points: Vec<Point>,
    /// Line geometries.
    pub lines: Vec<Line>,
    /// Polygon geometries.
    pub polygons: Vec<Polygon>,
    /// Attributes of the feature.
    pub properties: Properties,
}

impl Feature {
    /// Creates an empty feature of the given type.
    pub fn new(geometry_type: GeometryType) -> Self {
        Self {
            geometry_type,
            ..Default::default()
        }
    }

    /// Creates a point feature.
    pub fn with_points(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::new(GeometryType::Points)
        }
    }

    /// Creates a line feature.
    pub fn with_lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Self::new(GeometryType::Lines)
        }
    }

    /// Creates a polygon feature.
    pub fn with_polygons(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            ..Self::new(GeometryType::Polygons)
        }
    }

    /// Adds a property and returns the feature.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.add(key, value);
        self
    }

    /// Returns the geometry collection selected by `geometry_type`. Other collections are ignored.
    pub fn geometry(&self) -> FeatureGeometry<'_> {
        match self.geometry_type {
            GeometryType::Unknown => FeatureGeometry::Unknown,
            GeometryType::Points => FeatureGeometry::Points(&self.points),
            GeometryType::Lines => FeatureGeometry::Lines(&self.lines),
            GeometryType::Polygons => FeatureGeometry::Polygons(&self.polygons),
        }
    }

    /// Whether all geometry collections are empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }

    /// Checks that the feature follows the tile data conventions:
    ///
    /// * at most one geometry collection is populated, and it matches `geometry_type`;
    /// * all coordinates are finite;
    /// * lines have at least 2 points, polygons have at least one contour and contours have at least 3 points.
    ///
    /// Coordinates outside of the tile bounds are valid.
    pub fn validate(&self) -> Result<(), TileDataError> {
        let populated = self.populated_types();
        if populated.len() > 1 {
            return Err(TileDataError::MixedGeometry { populated });
        }

        if let Some(&found) = populated.first() {
            if found != self.geometry_type {
                return Err(TileDataError::GeometryTypeMismatch {
                    expected: self.geometry_type,
                    found,
                });
            }
        }

        if self
            .geometry()
            .iter_points()
            .any(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(TileDataError::NonFiniteCoordinate);
        }

        for (index, line) in self.lines.iter().enumerate() {
            if line.len() < 2 {
                return Err(TileDataError::DegenerateLine {
                    line: index,
                    points: line.len(),
                });
            }
        }

        for (polygon_index, polygon) in self.polygons.iter().enumerate() {
            if polygon.is_empty() {
                return Err(TileDataError::DegenerateContour {
                    polygon: polygon_index,
                    contour: 0,
                    points: 0,
                });
            }

            for (contour_index, contour) in polygon.iter().enumerate() {
                if contour.len() < 3 {
                    return Err(TileDataError::DegenerateContour {
                        polygon: polygon_index,
                        contour: contour_index,
                        points: contour.len(),
                    });
                }
            }
        }

        Ok(())
    }

    fn populated_types(&self) -> Vec<GeometryType> {
        [
            (GeometryType::Points, self.points.is_empty()),
            (GeometryType::Lines, self.lines.is_empty()),
            (GeometryType::Polygons, self.polygons.is_empty()),
        ]
        .into_iter()
        .filter(|(_, is_empty)| !is_empty)
        .map(|(geometry_type, _)| geometry_type)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn triangle() -> Line {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn default_feature() {
        let feature = Feature::default();
        assert_eq!(feature.geometry_type, GeometryType::Polygons);
        assert!(feature.is_empty());
        assert!(feature.properties.is_empty());
        assert_eq!(feature.validate(), Ok(()));
    }

    #[test]
    fn unknown_feature_is_valid() {
        let feature = Feature::new(GeometryType::Unknown);
        assert!(feature.points.is_empty());
        assert!(feature.lines.is_empty());
        assert!(feature.polygons.is_empty());
        assert_eq!(feature.geometry(), FeatureGeometry::Unknown);
        assert_eq!(feature.geometry().iter_points().count(), 0);
        assert_eq!(feature.validate(), Ok(()));
    }

    #[test]
    fn geometry_selects_matching_collection() {
        let feature = Feature::with_lines(vec![triangle()]);
        assert_matches!(feature.geometry(), FeatureGeometry::Lines(lines) if lines.len() == 1);
        assert_eq!(feature.geometry().geometry_type(), GeometryType::Lines);

        let feature = Feature::with_points(triangle());
        assert_matches!(feature.geometry(), FeatureGeometry::Points(points) if points.len() == 3);

        let feature = Feature::with_polygons(vec![vec![triangle()]]);
        assert_matches!(feature.geometry(), FeatureGeometry::Polygons(polygons) if polygons.len() == 1);
    }

    #[test]
    fn builder_properties() {
        let feature = Feature::with_points(vec![Point::new(0.0, 0.0, 0.0)])
            .with_property("name", "Station")
            .with_property("elevation", 12.5_f32);

        assert_eq!(feature.properties.get_string("name"), Some("Station"));
        assert_eq!(feature.properties.get_numeric("elevation"), Some(12.5));
    }

    #[test]
    fn validate_mixed_geometry() {
        let mut feature = Feature::with_lines(vec![triangle()]);
        feature.points.push(Point::new(0.0, 0.0, 0.0));

        assert_matches!(
            feature.validate(),
            Err(TileDataError::MixedGeometry { populated })
                if populated == vec![GeometryType::Points, GeometryType::Lines]
        );
    }

    #[test]
    fn validate_type_mismatch() {
        let mut feature = Feature::new(GeometryType::Points);
        feature.polygons.push(vec![triangle()]);

        assert_eq!(
            feature.validate(),
            Err(TileDataError::GeometryTypeMismatch {
                expected: GeometryType::Points,
                found: GeometryType::Polygons,
            })
        );

        let mut feature = Feature::new(GeometryType::Unknown);
        feature.lines.push(triangle());
        assert_matches!(
            feature.validate(),
            Err(TileDataError::GeometryTypeMismatch {
                expected: GeometryType::Unknown,
                ..
            })
        );
    }

    #[test]
    fn validate_non_finite() {
        let feature = Feature::with_points(vec![Point::new(0.0, f32::INFINITY, 0.0)]);
        assert_eq!(feature.validate(), Err(TileDataError::NonFiniteCoordinate));

        let feature = Feature::with_points(vec![Point::new(0.0, 0.0, f32::NAN)]);
        assert_eq!(feature.validate(), Err(TileDataError::NonFiniteCoordinate));
    }

    #[test]
    fn validate_out_of_tile_is_valid() {
        let feature = Feature::with_lines(vec![vec![
            Point::new(-3.0, 0.0, 0.0),
            Point::new(3.0, 2.0, 0.0),
        ]]);
        assert_eq!(feature.validate(), Ok(()));
    }

    #[test]
    fn validate_degenerate() {
        let feature = Feature::with_lines(vec![triangle(), vec![Point::new(0.0, 0.0, 0.0)]]);
        assert_eq!(
            feature.validate(),
            Err(TileDataError::DegenerateLine { line: 1, points: 1 })
        );

        let feature = Feature::with_polygons(vec![vec![triangle(), triangle()[..2].to_vec()]]);
        assert_eq!(
            feature.validate(),
            Err(TileDataError::DegenerateContour {
                polygon: 0,
                contour: 1,
                points: 2
            })
        );

        let feature = Feature::with_polygons(vec![vec![]]);
        assert_matches!(
            feature.validate(),
            Err(TileDataError::DegenerateContour { polygon: 0, .. })
        );
    }
}
