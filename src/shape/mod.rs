//! Footprint polygons and the polygon ring type.

pub use self::footprint::{clockwise_rotation, footprint_polygon, Footprint, FootprintParams};
pub use self::polygon::Polygon;

mod footprint;
mod polygon;
