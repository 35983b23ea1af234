//! Reader of [Mapbox Vector Tiles](https://github.com/mapbox/vector-tile-spec) producing [`TileData`].
//!
//! Decoded points are converted from the tile pixel space (origin in the top-left corner, `y` pointing down, `extent`
//! pixels per side) to the normalized tile coordinates of [`vtile_data`]: `x = 2 * px / extent - 1`,
//! `y = 1 - 2 * py / extent`. The point order of lines and polygon rings is kept as is. Because of the `y` flip,
//! exterior rings of a valid vector tile are clockwise in the resulting coordinates and holes are counterclockwise.
//!
//! ```no_run
//! use vtile_mvt::{decode_tile, DecodeOptions};
//!
//! let bytes: Vec<u8> = std::fs::read("tile.mvt").unwrap();
//! let tile = decode_tile(bytes.as_slice(), &DecodeOptions::default()).unwrap();
//! for layer in &tile.layers {
//!     println!("{}: {} features", layer.name(), layer.features.len());
//! }
//! ```

use bytes::Buf;
use geozero::mvt::tile::GeomType;
use geozero::mvt::{Message as GeozeroMessage, Tile};
use vtile_data::{winding, Feature, GeometryType, Layer, Line, Point, Polygon, Properties, TileData, Value};

use crate::command::{Command, CommandIterator};
use crate::error::MvtError;

mod command;
pub mod error;
mod options;

pub use options::{DecodeOptions, DEFAULT_EXTENT};

/// Decodes a vector tile.
///
/// Layers and features keep the order of the tile. If [`DecodeOptions::skip_recoverable_errors`] is set, invalid
/// layers and features are left out and invalid property values are stored as [`Value::None`]. Only a buffer that is
/// not a valid protobuf message fails the call in this mode.
pub fn decode_tile<B>(buffer: B, options: &DecodeOptions) -> Result<TileData, MvtError>
where
    B: Buf,
{
    let pb = Tile::decode(buffer).map_err(|e| MvtError::Proto(e.to_string()))?;

    let mut tile = TileData::new();
    for pb_layer in pb.layers {
        if !options.accepts_layer(&pb_layer.name) {
            log::debug!("Layer '{}' is skipped by the layer filter", pb_layer.name);
            continue;
        }

        match decode_layer(pb_layer, options) {
            Ok(layer) => tile.push(layer),
            Err(e) => {
                if options.skip_recoverable_errors {
                    log::warn!("{e}");
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(tile)
}

fn decode_layer(
    pb_layer: geozero::mvt::tile::Layer,
    options: &DecodeOptions,
) -> Result<Layer, MvtError> {
    let geozero::mvt::tile::Layer {
        name,
        keys,
        values,
        features,
        version,
        extent,
    } = pb_layer;
    if !(1..=2).contains(&version) {
        return Err(MvtError::Generic(format!(
            "Layer '{name}' has unsupported version: {version}"
        )));
    }

    let extent = extent.unwrap_or(options.default_extent);
    if extent == 0 {
        return Err(MvtError::Generic(format!("Layer '{name}' has zero extent")));
    }

    let mut layer_values = Vec::with_capacity(values.len());
    for value in values {
        match decode_value(value) {
            Ok(v) => layer_values.push(v),
            Err(e) => {
                if options.skip_recoverable_errors {
                    log::warn!("Layer '{name}': {e}");
                    layer_values.push(Value::None);
                } else {
                    return Err(e);
                }
            }
        }
    }

    let transform = TileTransform {
        extent: extent as f64,
        z: options.z,
    };

    let mut layer = Layer::new(name);
    for (index, pb_feature) in features.into_iter().enumerate() {
        match decode_feature(pb_feature, &transform, &keys, &layer_values) {
            Ok(feature) => layer.push(feature),
            Err(e) => {
                if options.skip_recoverable_errors {
                    log::warn!("Layer '{}', feature {index}: {e}", layer.name());
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(layer)
}

fn decode_value(pb_value: geozero::mvt::tile::Value) -> Result<Value, MvtError> {
    let geozero::mvt::tile::Value {
        string_value,
        float_value,
        double_value,
        int_value,
        uint_value,
        sint_value,
        bool_value,
    } = pb_value;

    let candidates = [
        string_value.map(Value::String),
        float_value.map(Value::Number),
        double_value.map(|v| Value::Number(v as f32)),
        int_value.map(|v| Value::Number(v as f32)),
        uint_value.map(|v| Value::Number(v as f32)),
        sint_value.map(|v| Value::Number(v as f32)),
        bool_value.map(|v| Value::Number(if v { 1.0 } else { 0.0 })),
    ];

    let mut present = candidates.into_iter().flatten();
    match (present.next(), present.next()) {
        (Some(value), None) => Ok(value),
        (None, _) => Ok(Value::None),
        (Some(_), Some(_)) => Err(MvtError::Generic(
            "More than one value present".into(),
        )),
    }
}

fn geometry_type(number: Option<i32>) -> GeometryType {
    match number {
        Some(n) if n == GeomType::Point as i32 => GeometryType::Points,
        Some(n) if n == GeomType::Linestring as i32 => GeometryType::Lines,
        Some(n) if n == GeomType::Polygon as i32 => GeometryType::Polygons,
        _ => GeometryType::Unknown,
    }
}

fn decode_feature(
    pb_feature: geozero::mvt::tile::Feature,
    transform: &TileTransform,
    keys: &[String],
    values: &[Value],
) -> Result<Feature, MvtError> {
    let geozero::mvt::tile::Feature {
        tags,
        r#type,
        geometry,
        ..
    } = pb_feature;

    let mut feature = Feature::new(geometry_type(r#type));
    feature.properties = decode_properties(&tags, keys, values)?;

    match feature.geometry_type {
        GeometryType::Unknown => {
            log::debug!(
                "Feature of unknown geometry type {:?} is left without geometry",
                r#type
            );
        }
        GeometryType::Points => feature.points = decode_points(&geometry, transform)?,
        GeometryType::Lines => feature.lines = decode_lines(&geometry, transform)?,
        GeometryType::Polygons => feature.polygons = decode_polygons(&geometry, transform)?,
    }

    Ok(feature)
}

fn decode_properties(
    tags: &[u32],
    keys: &[String],
    values: &[Value],
) -> Result<Properties, MvtError> {
    if tags.len() % 2 != 0 {
        return Err(MvtError::Generic(
            "Invalid number of tags in feature".into(),
        ));
    }

    let mut properties = Properties::new();
    for tag_pair in tags.chunks(2) {
        let key = keys
            .get(tag_pair[0] as usize)
            .ok_or_else(|| MvtError::Generic(format!("Invalid tag key {}", tag_pair[0])))?;
        let value = values
            .get(tag_pair[1] as usize)
            .ok_or_else(|| MvtError::Generic(format!("Invalid tag value {}", tag_pair[1])))?;

        properties.add(key.as_str(), value.clone());
    }

    Ok(properties)
}

fn decode_points(commands: &[u32], transform: &TileTransform) -> Result<Vec<Point>, MvtError> {
    let mut points = Vec::with_capacity(commands.len() / 2);
    for command in CommandIterator::new(commands) {
        match command? {
            Command::MoveTo(x, y) => points.push(transform.point(x, y)),
            command => {
                return Err(MvtError::Generic(format!(
                    "Point geometry cannot have {command:?} command"
                )))
            }
        }
    }

    Ok(points)
}

fn decode_lines(commands: &[u32], transform: &TileTransform) -> Result<Vec<Line>, MvtError> {
    let mut lines: Vec<Line> = vec![];
    for command in CommandIterator::new(commands) {
        match command? {
            Command::MoveTo(x, y) => lines.push(vec![transform.point(x, y)]),
            Command::LineTo(x, y) => match lines.last_mut() {
                Some(line) => line.push(transform.point(x, y)),
                None => {
                    return Err(MvtError::Generic(
                        "LineTo command before the first MoveTo".into(),
                    ))
                }
            },
            Command::ClosePath => {
                return Err(MvtError::Generic(
                    "Line geometry cannot have ClosePath command".into(),
                ))
            }
        }
    }

    Ok(lines)
}

/// Splits rings into polygons. The first non-degenerate ring sets the winding of exterior rings, every next ring with
/// the same winding starts a new polygon, rings with the opposite winding are holes of the last polygon.
fn decode_polygons(
    commands: &[u32],
    transform: &TileTransform,
) -> Result<Vec<Polygon>, MvtError> {
    let mut polygons: Vec<Polygon> = vec![];
    let mut exterior_winding = None;
    let mut ring: Option<Line> = None;

    for command in CommandIterator::new(commands) {
        match command? {
            Command::MoveTo(x, y) => {
                if ring.is_some() {
                    return Err(MvtError::Generic(
                        "Polygon ring is not closed before the next MoveTo".into(),
                    ));
                }
                ring = Some(vec![transform.point(x, y)]);
            }
            Command::LineTo(x, y) => match ring.as_mut() {
                Some(ring) => ring.push(transform.point(x, y)),
                None => {
                    return Err(MvtError::Generic(
                        "LineTo command outside of a polygon ring".into(),
                    ))
                }
            },
            Command::ClosePath => {
                let Some(ring) = ring.take() else {
                    return Err(MvtError::Generic(
                        "ClosePath command outside of a polygon ring".into(),
                    ));
                };

                if winding::area_signed(&ring) == 0.0 {
                    log::debug!("Dropping polygon ring with zero area");
                    continue;
                }

                let ring_winding = winding::winding(&ring);
                let exterior = *exterior_winding.get_or_insert(ring_winding);
                if ring_winding == exterior {
                    polygons.push(vec![ring]);
                } else if let Some(polygon) = polygons.last_mut() {
                    polygon.push(ring);
                }
            }
        }
    }

    if ring.is_some() {
        return Err(MvtError::Generic("Polygon ring is not closed".into()));
    }

    Ok(polygons)
}

struct TileTransform {
    extent: f64,
    z: f32,
}

impl TileTransform {
    fn point(&self, x: i64, y: i64) -> Point {
        Point::new(
            (2.0 * x as f64 / self.extent - 1.0) as f32,
            (1.0 - 2.0 * y as f64 / self.extent) as f32,
            self.z,
        )
    }
}
