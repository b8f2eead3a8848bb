//! Non-persistent geometric queries.

pub use self::planar_distance::planar_distance;

mod planar_distance;
