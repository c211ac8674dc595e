//! Polygon helpers for plan rendering.
//!
//! Polygons are open rings of `Point2D`; the closing edge is implicit.

use nalgebra::Vector2;

use crate::model::Point2D;

/// Consecutive vertex pairs of a ring, ending with `last → first`.
///
/// Yields nothing for an empty ring and a single degenerate edge for one point.
pub fn closed_edges(ring: &[Point2D]) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

/// Signed shoelace area; positive for counterclockwise rings in a y-up frame.
pub fn signed_area(ring: &[Point2D]) -> f64 {
    closed_edges(ring)
        .map(|(p, q)| cross(p.to_vec2(), q.to_vec2()))
        .sum::<f64>()
        * 0.5
}

/// Area-weighted centroid of the polygon.
///
/// Falls back to the vertex mean for zero-area rings; `None` for an empty ring.
pub fn centroid(ring: &[Point2D]) -> Option<Point2D> {
    if ring.is_empty() {
        return None;
    }
    let a = signed_area(ring);
    if a.abs() < 1e-12 {
        let sum: Vector2<f64> = ring.iter().map(|p| p.to_vec2()).sum();
        return Some(Point2D::from_vec2(sum / ring.len() as f64));
    }
    let mut acc = Vector2::zeros();
    for (p, q) in closed_edges(ring) {
        let (p, q) = (p.to_vec2(), q.to_vec2());
        acc += (p + q) * cross(p, q);
    }
    Some(Point2D::from_vec2(acc / (6.0 * a)))
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(side, 0.0),
            Point2D::new(side, side),
            Point2D::new(0.0, side),
        ]
    }

    #[test]
    fn closed_edges_wrap_around() {
        let ring = square(5.0);
        let edges: Vec<_> = closed_edges(&ring).collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2D::new(0.0, 5.0), Point2D::new(0.0, 0.0)));
        assert_eq!(closed_edges(&[]).count(), 0);
    }

    #[test]
    fn area_and_centroid_of_square() {
        let ring = square(5.0);
        assert!((signed_area(&ring) - 25.0).abs() < 1e-12);
        let c = centroid(&ring).unwrap();
        assert!((c.x - 2.5).abs() < 1e-12 && (c.y - 2.5).abs() < 1e-12);

        let mut cw = ring.clone();
        cw.reverse();
        assert!((signed_area(&cw) + 25.0).abs() < 1e-12);
        let c = centroid(&cw).unwrap();
        assert!((c.x - 2.5).abs() < 1e-12 && (c.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn centroid_is_area_weighted_for_l_shape() {
        // 2x2 square plus a 2x1 block on its right: areas 4 and 2.
        let ring = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 1.0),
            Point2D::new(2.0, 1.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ];
        let c = centroid(&ring).unwrap();
        // x: (4*1 + 2*3)/6, y: (4*1 + 2*0.5)/6
        assert!((c.x - 10.0 / 6.0).abs() < 1e-12);
        assert!((c.y - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_rings() {
        let line = vec![Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0), Point2D::new(4.0, 0.0)];
        let c = centroid(&line).unwrap();
        assert!((c.x - 2.0).abs() < 1e-12 && c.y.abs() < 1e-12);
        assert!(centroid(&[]).is_none());
    }
}
