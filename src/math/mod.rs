//! Linear algebra type aliases and the 3D pose type.

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The planar point type.
pub type Point = na::Point2<Real>;

/// The 3D point type.
pub type Point3 = na::Point3<Real>;

/// The planar vector type.
pub type Vector = na::Vector2<Real>;

/// The 3D vector type.
pub type Vector3 = na::Vector3<Real>;

/// The 3×3 matrix type.
pub type Matrix3 = na::Matrix3<Real>;

/// A quaternion, not necessarily normalized.
pub type Quaternion = na::Quaternion<Real>;

/// The unit quaternion type.
pub type UnitQuaternion = na::UnitQuaternion<Real>;

/// The planar rotation type.
pub type Rotation = na::UnitComplex<Real>;

/// The planar translation type.
pub type Translation = na::Translation2<Real>;

/// The planar transformation type.
pub type Isometry = na::Isometry2<Real>;

/// The physical extent of an object: length along `x`, width along `y` and
/// height along `z`, expressed in the object's local frame.
pub type Size = na::Vector3<Real>;

/// A position and orientation in 3D space.
///
/// The orientation is stored as a raw quaternion `(x, y, z, w)`. It is expected
/// to have unit length, but this is never checked: the routines of this crate
/// normalize it implicitly when they convert it to a rotation matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Pose {
    /// The position of the pose origin.
    pub position: Point3,
    /// The orientation of the pose.
    pub orientation: Quaternion,
}

impl Pose {
    /// Creates a pose from its position and orientation.
    #[inline]
    pub fn new(position: Point3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// The pose located at the origin with no rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Point3::origin(), Quaternion::identity())
    }

    /// A pose with no rotation located at `(x, y, z)`.
    #[inline]
    pub fn translation(x: Real, y: Real, z: Real) -> Self {
        Self::new(Point3::new(x, y, z), Quaternion::identity())
    }

    /// Creates a pose from a position and roll, pitch, yaw angles (radians).
    ///
    /// The angles follow the convention of [`crate::utils::Rpy`].
    pub fn from_parts_rpy(position: Point3, roll: Real, pitch: Real, yaw: Real) -> Self {
        let rot = crate::utils::Rpy::new(roll, pitch, yaw).to_quat();
        Self::new(position, rot.into_inner())
    }

    /// The roll, pitch and yaw angles of this pose's orientation.
    #[inline]
    pub fn rpy(&self) -> crate::utils::Rpy {
        crate::utils::rpy_from_quat(&self.orientation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
