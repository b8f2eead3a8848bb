use crate::math::{Isometry, Point, Real};
use approx::{AbsDiffEq, RelativeEq};

/// A planar polygon described by a closed ring of vertices.
///
/// Two consecutive vertices determine an edge of the polygon, and the last
/// vertex of a closed ring is equal to the first one. The vertex order is kept
/// exactly as given: no winding order is enforced.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon from a ring of vertices, stored as given.
    ///
    /// The caller is responsible for closing the ring, see [`Polygon::is_closed`].
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Builds a closed polygon from its corners.
    ///
    /// The first corner is appended at the end of the ring unless the ring is
    /// already closed.
    ///
    /// ```
    /// use footprint2d::math::Point;
    /// use footprint2d::shape::Polygon;
    ///
    /// let triangle = Polygon::from_corners(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(0.0, 1.0),
    /// ]);
    /// assert!(triangle.is_closed());
    /// assert_eq!(triangle.len(), 4);
    /// assert_eq!(triangle.corners().len(), 3);
    /// ```
    pub fn from_corners(mut corners: Vec<Point>) -> Self {
        if let (Some(first), Some(last)) = (corners.first(), corners.last()) {
            if corners.len() == 1 || first != last {
                let first = *first;
                corners.push(first);
            }
        }

        Self::new(corners)
    }

    /// The vertices of this polygon, including the closing vertex.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertices of this polygon, without the closing vertex if the ring is closed.
    pub fn corners(&self) -> &[Point] {
        if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }

    /// Consumes this polygon and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// The number of vertices of this polygon, including the closing vertex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this polygon have no vertex?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Is the last vertex of the ring equal to its first vertex?
    ///
    /// A ring needs at least two vertices to be closed.
    pub fn is_closed(&self) -> bool {
        self.vertices.len() > 1 && self.vertices.first() == self.vertices.last()
    }

    /// The signed area of this polygon.
    ///
    /// The area is positive if the corners are ordered counter-clockwise and
    /// negative otherwise.
    pub fn signed_area(&self) -> Real {
        let corners = self.corners();
        let mut area = 0.0;

        for (i, a) in corners.iter().enumerate() {
            let b = corners[(i + 1) % corners.len()];
            area += a.x * b.y - b.x * a.y;
        }

        area / 2.0
    }

    /// The average of the corners of this polygon.
    ///
    /// Returns `None` if the polygon has no vertex.
    pub fn centroid(&self) -> Option<Point> {
        crate::utils::try_center(self.corners()).ok()
    }

    /// Applies a transformation to every vertex of this polygon.
    pub fn transformed(&self, pos: &Isometry) -> Self {
        Self::new(self.vertices.iter().map(|pt| pos * pt).collect())
    }
}

impl AbsDiffEq for Polygon {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.len() == other.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Polygon {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.len() == other.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
