use crate::math::{Point, Real, Vector};

/// Error returned by [`try_center`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CenterError {
    /// The point set is empty, so it has no center.
    #[error("cannot compute the center of an empty point set")]
    EmptyInput,
}

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Offsets to the first point are summed in
/// input order and divided once by the number of points, so the center of a
/// single point, or of several copies of the same point, is that point
/// exactly.
///
/// # Errors
///
/// Returns [`CenterError::EmptyInput`] if `pts` is empty.
///
/// # Example
///
/// ```
/// use footprint2d::math::Point;
/// use footprint2d::utils::{try_center, CenterError};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
/// assert_eq!(try_center(&square), Ok(Point::new(1.0, 1.0)));
/// assert_eq!(try_center(&[]), Err(CenterError::EmptyInput));
/// ```
pub fn try_center(pts: &[Point]) -> Result<Point, CenterError> {
    let (first, rest) = pts.split_first().ok_or(CenterError::EmptyInput)?;

    let mut offset = Vector::zeros();
    for pt in rest {
        offset += pt - first;
    }

    Ok(first + offset / pts.len() as Real)
}

/// Computes the geometric center (centroid) of a set of points.
///
/// This is the infallible version of [`try_center`].
///
/// # Panics
///
/// Panics if the input slice is empty.
#[inline]
pub fn center(pts: &[Point]) -> Point {
    match try_center(pts) {
        Ok(c) => c,
        Err(_) => panic!("Cannot compute the center of less than 1 point."),
    }
}
