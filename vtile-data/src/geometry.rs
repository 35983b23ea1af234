use serde::{Deserialize, Serialize};

/// Point in normalized tile coordinates. See crate documentation for the coordinate system.
pub type Point = nalgebra::Point3<f32>;

/// Ordered sequence of points. The order defines the direction of the line.
pub type Line = Vec<Point>;

/// Sequence of closed contours.
///
/// The last point of a contour is connected to the first one, it is not repeated at the end. Outer contours and holes
/// are distinguished by their [winding](crate::winding).
pub type Polygon = Vec<Line>;

/// Lower bound of `x` and `y` of points inside the tile.
pub const TILE_EXTENT_MIN: f32 = -1.0;
/// Upper bound of `x` and `y` of points inside the tile.
pub const TILE_EXTENT_MAX: f32 = 1.0;

/// Checks if the point lies inside the tile bounds (boundary included). `z` is not checked.
///
/// Points outside the tile are valid tile data, this is only a helper for consumers that want to clip.
pub fn is_within_tile(point: &Point) -> bool {
    let range = TILE_EXTENT_MIN..=TILE_EXTENT_MAX;
    range.contains(&point.x) && range.contains(&point.y)
}

/// Kind of geometry a feature contains.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// Geometry kind is not known. Feature has no geometry.
    Unknown,
    /// Feature geometry is in [`Feature::points`](crate::Feature::points).
    Points,
    /// Feature geometry is in [`Feature::lines`](crate::Feature::lines).
    Lines,
    /// Feature geometry is in [`Feature::polygons`](crate::Feature::polygons).
    #[default]
    Polygons,
}

/// Borrowed geometry of a feature, selected by its [`GeometryType`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FeatureGeometry<'a> {
    /// Unknown geometry.
    Unknown,
    /// Points.
    Points(&'a [Point]),
    /// Lines.
    Lines(&'a [Line]),
    /// Polygons.
    Polygons(&'a [Polygon]),
}

impl<'a> FeatureGeometry<'a> {
    /// Geometry type of the view.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            FeatureGeometry::Unknown => GeometryType::Unknown,
            FeatureGeometry::Points(_) => GeometryType::Points,
            FeatureGeometry::Lines(_) => GeometryType::Lines,
            FeatureGeometry::Polygons(_) => GeometryType::Polygons,
        }
    }

    /// Iterates over all points of the geometry: every point of every line or every polygon contour.
    pub fn iter_points(&self) -> Box<dyn Iterator<Item = &'a Point> + 'a> {
        match *self {
            FeatureGeometry::Unknown => Box::new(std::iter::empty()),
            FeatureGeometry::Points(points) => Box::new(points.iter()),
            FeatureGeometry::Lines(lines) => Box::new(lines.iter().flatten()),
            FeatureGeometry::Polygons(polygons) => Box::new(polygons.iter().flatten().flatten()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_type_is_polygons() {
        assert_eq!(GeometryType::default(), GeometryType::Polygons);
    }

    #[test]
    fn within_tile() {
        assert!(is_within_tile(&Point::new(0.0, 0.0, 0.0)));
        assert!(is_within_tile(&Point::new(-1.0, 1.0, 0.0)));
        assert!(is_within_tile(&Point::new(1.0, -1.0, 5.0)));
        assert!(!is_within_tile(&Point::new(1.01, 0.0, 0.0)));
        assert!(!is_within_tile(&Point::new(0.0, -1.5, 0.0)));
        assert!(!is_within_tile(&Point::new(f32::NAN, 0.0, 0.0)));
    }

    #[test]
    fn iter_points() {
        let polygons: Vec<Polygon> = vec![
            vec![
                vec![Point::new(0.0, 0.0, 0.0); 4],
                vec![Point::new(0.1, 0.1, 0.0); 3],
            ],
            vec![vec![Point::new(0.5, 0.5, 0.0); 3]],
        ];
        assert_eq!(FeatureGeometry::Polygons(&polygons).iter_points().count(), 10);

        let lines: Vec<Line> = vec![vec![Point::new(0.0, 0.0, 0.0); 2]; 2];
        assert_eq!(FeatureGeometry::Lines(&lines).iter_points().count(), 4);

        assert_eq!(FeatureGeometry::Unknown.iter_points().count(), 0);
    }
}
