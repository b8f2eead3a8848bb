use crate::math::{Matrix3, Quaternion, Real, UnitQuaternion};
use approx::{AbsDiffEq, RelativeEq};
use core::f64::consts::FRAC_PI_2;

/// Roll, pitch and yaw angles, in radians.
///
/// The angles describe the rotation `Rz(yaw) * Ry(pitch) * Rx(roll)`: a rotation
/// of `roll` around the `x` axis, followed by a rotation of `pitch` around the
/// `y` axis, followed by a rotation of `yaw` around the `z` axis, all axes being
/// fixed (extrinsic). This is the usual aerospace (ZYX) convention.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Rpy {
    /// Rotation around the `x` axis.
    pub roll: Real,
    /// Rotation around the `y` axis.
    pub pitch: Real,
    /// Rotation around the `z` axis.
    pub yaw: Real,
}

impl Rpy {
    /// Creates a new set of roll, pitch, yaw angles.
    #[inline]
    pub fn new(roll: Real, pitch: Real, yaw: Real) -> Self {
        Self { roll, pitch, yaw }
    }

    /// The unit quaternion representing the rotation `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    #[inline]
    pub fn to_quat(&self) -> UnitQuaternion {
        UnitQuaternion::from_euler_angles(self.roll, self.pitch, self.yaw)
    }
}

impl AbsDiffEq for Rpy {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.roll.abs_diff_eq(&other.roll, epsilon)
            && self.pitch.abs_diff_eq(&other.pitch, epsilon)
            && self.yaw.abs_diff_eq(&other.yaw, epsilon)
    }
}

impl RelativeEq for Rpy {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.roll.relative_eq(&other.roll, epsilon, max_relative)
            && self.pitch.relative_eq(&other.pitch, epsilon, max_relative)
            && self.yaw.relative_eq(&other.yaw, epsilon, max_relative)
    }
}

/// The rotation matrix of a quaternion.
///
/// The quaternion is scaled by `2 / |q|²` so a quaternion that is not exactly
/// normalized still yields a rotation matrix. The zero quaternion yields
/// non-finite entries.
pub fn rotation_matrix(q: &Quaternion) -> Matrix3 {
    let s = 2.0 / q.norm_squared();
    let (xs, ys, zs) = (q.i * s, q.j * s, q.k * s);
    let (wx, wy, wz) = (q.w * xs, q.w * ys, q.w * zs);
    let (xx, xy, xz) = (q.i * xs, q.i * ys, q.i * zs);
    let (yy, yz, zz) = (q.j * ys, q.j * zs, q.k * zs);

    Matrix3::new(
        1.0 - (yy + zz),
        xy - wz,
        xz + wy,
        xy + wz,
        1.0 - (xx + zz),
        yz - wx,
        xz - wy,
        yz + wx,
        1.0 - (xx + yy),
    )
}

/// Extracts roll, pitch and yaw angles from a rotation matrix.
///
/// The returned angles recompose into `mat` as `Rz(yaw) * Ry(pitch) * Rx(roll)`,
/// with `pitch` in `[-π/2, π/2]`.
///
/// At gimbal lock (`|mat[(2, 0)]| >= 1`, i.e. `pitch = ±π/2`) roll and yaw are
/// not independent. The yaw is then set to zero and the whole rotation around
/// the vertical axis is carried by the roll.
///
/// A `NaN` entry is not treated as gimbal lock: it propagates to all three angles.
pub fn rpy_from_matrix(mat: &Matrix3) -> Rpy {
    let m20 = mat[(2, 0)];

    if m20.abs() >= 1.0 {
        log::debug!("Gimbal lock while extracting roll-pitch-yaw angles, forcing yaw = 0.");

        if m20 < 0.0 {
            let roll = mat[(0, 1)].atan2(mat[(0, 2)]);
            Rpy::new(roll, FRAC_PI_2, 0.0)
        } else {
            let roll = (-mat[(0, 1)]).atan2(-mat[(0, 2)]);
            Rpy::new(roll, -FRAC_PI_2, 0.0)
        }
    } else {
        let pitch = -m20.asin();
        let cp = pitch.cos();
        let roll = (mat[(2, 1)] / cp).atan2(mat[(2, 2)] / cp);
        let yaw = (mat[(1, 0)] / cp).atan2(mat[(0, 0)] / cp);
        Rpy::new(roll, pitch, yaw)
    }
}

/// Extracts roll, pitch and yaw angles from a quaternion.
///
/// See [`rpy_from_matrix`] for the convention used, including at gimbal lock.
///
/// # Example
///
/// ```
/// use footprint2d::math::Quaternion;
/// use footprint2d::utils::rpy_from_quat;
///
/// // A rotation of 90 degrees around the vertical axis.
/// let half = core::f64::consts::FRAC_PI_4;
/// let q = Quaternion::new(half.cos(), 0.0, 0.0, half.sin());
/// let rpy = rpy_from_quat(&q);
///
/// assert!((rpy.yaw - core::f64::consts::FRAC_PI_2).abs() < 1.0e-12);
/// assert!(rpy.roll.abs() < 1.0e-12);
/// assert!(rpy.pitch.abs() < 1.0e-12);
/// ```
#[inline]
pub fn rpy_from_quat(q: &Quaternion) -> Rpy {
    rpy_from_matrix(&rotation_matrix(q))
}
