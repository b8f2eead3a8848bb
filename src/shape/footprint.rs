use crate::math::{Isometry, Point, Pose, Real, Rotation, Size, Translation, Vector};
use crate::shape::Polygon;
use crate::utils::Rpy;

/// Inflation and reference-point settings of a [`Footprint`].
///
/// The default value has no margin and no center offset.
///
/// ```
/// use footprint2d::shape::FootprintParams;
///
/// let params = FootprintParams::default()
///     .with_center_offset(1.2)
///     .with_margins(0.5, 0.3);
/// assert_eq!(params.center_offset, 1.2);
/// assert_eq!(params.length_margin, 0.5);
/// assert_eq!(params.width_margin, 0.3);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FootprintParams {
    /// Shift of the footprint center along the object's local `x` axis.
    ///
    /// This models a reference point that is not the geometric center of the
    /// object, e.g., the rear axle of a vehicle.
    pub center_offset: Real,
    /// Added to the footprint length, half of it on each end.
    pub length_margin: Real,
    /// Added to the footprint width, half of it on each side.
    pub width_margin: Real,
}

impl FootprintParams {
    /// Sets the center offset.
    #[must_use]
    pub fn with_center_offset(mut self, center_offset: Real) -> Self {
        self.center_offset = center_offset;
        self
    }

    /// Sets the length and width margins.
    #[must_use]
    pub fn with_margins(mut self, length_margin: Real, width_margin: Real) -> Self {
        self.length_margin = length_margin;
        self.width_margin = width_margin;
        self
    }
}

/// The oriented rectangular footprint of an object on the `xy` plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Footprint {
    /// The object extent. Only the length (`x`) and width (`y`) are used.
    pub size: Size,
    /// Margins and center offset.
    pub params: FootprintParams,
}

impl Footprint {
    /// Creates the footprint of an object of the given size.
    #[inline]
    pub fn new(size: Size, params: FootprintParams) -> Self {
        Self { size, params }
    }

    /// The half-length and half-width of the footprint for the given orientation.
    ///
    /// The length is scaled by `cos(pitch)` and the width by `cos(roll)`, which
    /// approximates the extent of a slightly tilted object on the horizontal
    /// plane. The margins are added before halving.
    pub fn half_extents(&self, rpy: &Rpy) -> Vector {
        Vector::new(
            (self.size.x * rpy.pitch.cos() + self.params.length_margin) / 2.0,
            (self.size.y * rpy.roll.cos() + self.params.width_margin) / 2.0,
        )
    }

    /// The footprint ring in the object's local frame, before any rotation
    /// around the vertical axis or translation.
    ///
    /// Only the roll and pitch of `rpy` are used. The vertices are, in order,
    /// front-left, rear-left, rear-right, front-right, and front-left again:
    /// `(L + o, W), (-L + o, W), (-L + o, -W), (L + o, -W), (L + o, W)` where
    /// `L` and `W` are the [half extents](Self::half_extents) and `o` is the
    /// center offset.
    pub fn local_polygon(&self, rpy: &Rpy) -> Polygon {
        let he = self.half_extents(rpy);
        let (l, w) = (he.x, he.y);
        let co = self.params.center_offset;

        Polygon::new(vec![
            Point::new(l + co, w),
            Point::new(-l + co, w),
            Point::new(-l + co, -w),
            Point::new(l + co, -w),
            Point::new(l + co, w),
        ])
    }

    /// The footprint ring of the object placed at `pose`.
    ///
    /// The [local ring](Self::local_polygon) is rotated about the origin by the
    /// clockwise angle `-yaw` (see [`clockwise_rotation`]) and then translated
    /// by the `x` and `y` coordinates of the pose position. The vertex order of
    /// the local ring is preserved.
    pub fn polygon(&self, pose: &Pose) -> Polygon {
        let rpy = pose.rpy();
        let pos = Isometry::from_parts(
            Translation::new(pose.position.x, pose.position.y),
            clockwise_rotation(-rpy.yaw),
        );

        self.local_polygon(&rpy).transformed(&pos)
    }
}

/// The planar rotation turning points clockwise by `angle` radians.
///
/// A clockwise rotation by a negative angle turns points counter-clockwise:
/// `clockwise_rotation(-yaw)` maps `(x, y)` to
/// `(x cos(yaw) - y sin(yaw), x sin(yaw) + y cos(yaw))`.
#[inline]
pub fn clockwise_rotation(angle: Real) -> Rotation {
    Rotation::new(-angle)
}

/// Computes the oriented rectangular footprint of an object.
///
/// This builds the footprint of an object of the given `size` placed at `pose`,
/// inflated by the margins of `params` and shifted along its local `x` axis by
/// `params.center_offset`. The result is a closed ring of five vertices (the
/// four corners then the first corner again) whose order is fixed, see
/// [`Footprint::local_polygon`] and [`Footprint::polygon`].
///
/// The height of the object (`size.z`) and the `z` coordinate of the pose are
/// ignored. Non-finite inputs propagate to the output vertices.
///
/// # Example
///
/// ```
/// use footprint2d::math::{Point, Point3, Pose, Size};
/// use footprint2d::shape::{footprint_polygon, FootprintParams};
///
/// // An object facing the `y` axis.
/// let yaw = core::f64::consts::FRAC_PI_2;
/// let pose = Pose::from_parts_rpy(Point3::new(1.0, 1.0, 0.0), 0.0, 0.0, yaw);
/// let size = Size::new(4.0, 2.0, 1.0);
/// let poly = footprint_polygon(&pose, &size, &FootprintParams::default());
///
/// // The front-left corner ends up on the `-x` side.
/// let front_left = poly.vertices()[0];
/// assert!((front_left - Point::new(0.0, 3.0)).norm() < 1.0e-12);
/// ```
pub fn footprint_polygon(pose: &Pose, size: &Size, params: &FootprintParams) -> Polygon {
    Footprint::new(*size, *params).polygon(pose)
}
