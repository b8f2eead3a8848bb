use crate::math::{Point, Point3};

/// Projects a 3D point onto the horizontal `xy` plane by dropping its `z` coordinate.
///
/// # Example
///
/// ```
/// use footprint2d::math::{Point, Point3};
/// use footprint2d::utils::project_to_plane;
///
/// let pt = Point3::new(1.0, -2.0, 30.0);
/// assert_eq!(project_to_plane(&pt), Point::new(1.0, -2.0));
/// ```
#[inline]
pub fn project_to_plane(pt: &Point3) -> Point {
    pt.xy()
}
