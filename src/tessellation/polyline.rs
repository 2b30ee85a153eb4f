use crate::math::{point_to_segment_dist, Point2};

/// A polyline approximation of a curve, owned by the caller.
///
/// Flatteners append to it, so one buffer can collect the segments of a
/// whole multi-curve path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates an empty polyline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty polyline with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a vertex.
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first vertex, or `None` if the polyline is empty.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last vertex, or `None` if the polyline is empty.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Iterates over the vertices in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Returns the interleaved coordinates `x0, y0, x1, y1, ...`.
    #[must_use]
    pub fn to_coords(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Returns the distance from `point` to the nearest segment.
    ///
    /// A single-vertex polyline measures to that vertex; an empty one
    /// returns `f64::INFINITY`.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        match self.points.as_slice() {
            [] => f64::INFINITY,
            [only] => (point - only).norm(),
            points => points
                .windows(2)
                .map(|w| point_to_segment_dist(point, &w[0], &w[1]))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

impl From<Polyline> for Vec<Point2> {
    fn from(polyline: Polyline) -> Self {
        polyline.points
    }
}

impl AsRef<[Point2]> for Polyline {
    fn as_ref(&self) -> &[Point2] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Polyline {
        Polyline {
            points: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 0.0),
            ],
        }
    }

    #[test]
    fn coords_are_interleaved() {
        assert_eq!(zigzag().to_coords(), vec![0.0, 0.0, 1.0, 1.0, 2.0, 0.0]);
    }

    #[test]
    fn empty_polyline() {
        let pl = Polyline::new();
        assert!(pl.is_empty());
        assert!(pl.to_coords().is_empty());
        assert!(pl.first().is_none());
        assert!(pl.distance_to(&Point2::origin()).is_infinite());
    }

    #[test]
    fn push_appends_in_order() {
        let mut pl = Polyline::with_capacity(2);
        pl.push(Point2::new(3.0, 4.0));
        pl.push(Point2::new(5.0, 6.0));
        assert_eq!(pl.len(), 2);
        assert_eq!(pl.first(), Some(&Point2::new(3.0, 4.0)));
        assert_eq!(pl.last(), Some(&Point2::new(5.0, 6.0)));
        let v: Vec<Point2> = pl.into();
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn distance_to_nearest_segment() {
        let pl = zigzag();
        // Apex of the zigzag lies on the polyline.
        assert!(pl.distance_to(&Point2::new(1.0, 1.0)).abs() < 1e-12);
        // Below the apex: nearest points are on the two slanted segments.
        let d = pl.distance_to(&Point2::new(1.0, 0.0));
        assert!((d - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12, "d={d}");
    }

    #[test]
    fn distance_to_single_vertex() {
        let pl = Polyline {
            points: vec![Point2::new(0.0, 0.0)],
        };
        assert!((pl.distance_to(&Point2::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
    }
}
