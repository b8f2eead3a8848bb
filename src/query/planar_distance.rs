use crate::math::{Point3, Real};

/// Computes the distance separating the projections of two points on the `xy` plane.
///
/// The `z` coordinates are ignored. The result is computed with [`f64::hypot`] so
/// it neither overflows nor underflows for very large or very small coordinate
/// differences.
///
/// # Example
///
/// ```
/// use footprint2d::math::Point3;
/// use footprint2d::query::planar_distance;
///
/// let a = Point3::new(0.0, 0.0, 10.0);
/// let b = Point3::new(3.0, 4.0, -2.0);
/// assert_eq!(planar_distance(&a, &b), 5.0);
/// ```
#[inline]
pub fn planar_distance(pt1: &Point3, pt2: &Point3) -> Real {
    let dx = pt1.x - pt2.x;
    let dy = pt1.y - pt2.y;
    dx.hypot(dy)
}
