//! In-memory representation of decoded vector tile content.
//!
//! A [`TileData`] is a tree of plain owned values modeled after GeoJSON. A tile-format decoder builds it
//! once, hands it over by value, and a tessellator reads it to produce GPU meshes.
//!
//! ```text
//! TileData
//!  └─ Layer (name)
//!      └─ Feature (geometry type)
//!          ├─ points:   Vec<Point>
//!          ├─ lines:    Vec<Line>
//!          ├─ polygons: Vec<Polygon>
//!          └─ properties: Properties (key -> Value)
//! ```
//!
//! # Tile coordinates
//!
//! A [`Point`] holds 32-bit `x`, `y` and `z` components: normalized displacement from the center of the tile.
//!
//! ```text
//!  (-1.0, 1.0) -------------------- (1.0, 1.0)
//!             |                    |
//!             |      +y ^          |
//!             |         | (0, 0)   |
//!             |       ----- > +x   |
//!             |         |          |
//!             |                    |
//!  (-1.0,-1.0) -------------------- (1.0,-1.0)
//! ```
//!
//! Coordinates outside of `[-1.0, 1.0]` are allowed, since tile servers do not always clip geometries to the tile
//! boundary. `z` uses the same scale as `x` and `y`. This crate never transforms coordinates.
//!
//! # Polygons and winding
//!
//! A [`Polygon`] is a list of closed contours. Outer boundaries and holes are told apart by the sign of their area
//! (see [`winding`]), following the OpenGL red book conventions. Contours are stored exactly as decoded and are never
//! reoriented.
//!
//! # Geometry type
//!
//! Only the collection matching [`Feature::geometry_type`] is expected to contain data. The containers do not enforce
//! this; [`Feature::geometry`] reads the matching collection and [`Feature::validate`] reports producers that break
//! the convention.

mod error;
mod feature;
mod geometry;
mod layer;
mod properties;
mod tile;
mod value;
pub mod winding;

pub use error::TileDataError;
pub use feature::Feature;
pub use geometry::{
    is_within_tile, FeatureGeometry, GeometryType, Line, Point, Polygon, TILE_EXTENT_MAX,
    TILE_EXTENT_MIN,
};
pub use layer::Layer;
pub use properties::Properties;
pub use tile::TileData;
pub use value::Value;
pub use winding::Winding;
