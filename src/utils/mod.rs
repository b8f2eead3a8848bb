//! Planar helpers: roll-pitch-yaw extraction, point projection and centroids.

pub use self::center::{center, try_center, CenterError};
pub use self::project_to_plane::project_to_plane;
pub use self::rpy::{rotation_matrix, rpy_from_matrix, rpy_from_quat, Rpy};

mod center;
mod project_to_plane;
mod rpy;
