// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;

use crate::geometry::util::INCIRCLE_BAND;
use crate::geometry::{Circumcircle, Point2};
use crate::kernel::orientation::{exact_coords, orient2d_exact};

/// Exact sign of the in-circle determinant of `d` against `a`, `b`, `c`.
///
/// Positive when `d` is inside the circle and `a`, `b`, `c` are
/// counter-clockwise; the sign flips for clockwise input.
pub fn incircle_exact(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Option<Ordering> {
    let [ax, ay, bx, by, cx, cy, dx, dy] =
        exact_coords([a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y])?;

    let adx = &ax - &dx;
    let ady = &ay - &dy;
    let bdx = &bx - &dx;
    let bdy = &by - &dy;
    let cdx = &cx - &dx;
    let cdy = &cy - &dy;

    let alift = &(&adx * &adx) + &(&ady * &ady);
    let blift = &(&bdx * &bdx) + &(&bdy * &bdy);
    let clift = &(&cdx * &cdx) + &(&cdy * &cdy);

    let m0 = &(&bdy * &clift) - &(&cdy * &blift);
    let m1 = &(&bdx * &clift) - &(&cdx * &blift);
    let m2 = &(&bdx * &cdy) - &(&cdx * &bdy);

    let det = &(&(&adx * &m0) - &(&ady * &m1)) + &(&alift * &m2);
    Some(det.sign())
}

/// Is `p` inside or on the circumcircle of the triangle `tri`?
///
/// The floating-point distance test decides whenever it is clear of the
/// boundary. Inside the tolerance band a non-degenerate triangle is decided
/// by the exact determinant instead.
pub fn in_circumcircle(p: &Point2, tri: [&Point2; 3], circle: &Circumcircle) -> bool {
    let d2 = circle.center.distance_squared_to(p);
    let diff = d2 - circle.radius_squared;
    let band = INCIRCLE_BAND * circle.radius_squared.max(d2);

    if circle.degenerate || diff.abs() > band {
        return circle.contains(p);
    }

    let [a, b, c] = tri;
    match (orient2d_exact(a, b, c), incircle_exact(a, b, c, p)) {
        (Some(Ordering::Greater), Some(s)) => s != Ordering::Less,
        (Some(Ordering::Less), Some(s)) => s != Ordering::Greater,
        _ => circle.contains(p),
    }
}

/// Law-of-cosines test: the squared longest side exceeds the sum of the
/// squares of the other two.
pub fn is_obtuse(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let mut sides = [
        a.distance_squared_to(b),
        b.distance_squared_to(c),
        c.distance_squared_to(a),
    ];
    sides.sort_unstable_by(f64::total_cmp);
    sides[2] > sides[0] + sides[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn incircle_sign_follows_orientation() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        let inside = p(2.0, 2.0);
        assert_eq!(incircle_exact(&a, &b, &c, &inside), Some(Ordering::Greater));
        assert_eq!(incircle_exact(&a, &c, &b, &inside), Some(Ordering::Less));
    }

    #[test]
    fn cocircular_point_counts_as_inside() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0));
        let d = p(0.0, 10.0);
        assert_eq!(incircle_exact(&a, &b, &c, &d), Some(Ordering::Equal));

        let circle = Circumcircle::from_triangle(&a, &b, &c);
        assert!(in_circumcircle(&d, [&a, &b, &c], &circle));
        assert!(in_circumcircle(&d, [&a, &c, &b], &circle));
    }

    #[test]
    fn far_point_is_outside() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        let circle = Circumcircle::from_triangle(&a, &b, &c);
        assert!(!in_circumcircle(&p(20.0, 20.0), [&a, &b, &c], &circle));
        assert!(in_circumcircle(&p(1.0, 1.0), [&a, &b, &c], &circle));
    }

    #[test]
    fn obtuse_independent_of_vertex_order() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(1.0, 1.0));
        assert!(is_obtuse(&a, &b, &c));
        assert!(is_obtuse(&c, &a, &b));
        assert!(is_obtuse(&b, &c, &a));
    }

    #[test]
    fn right_and_acute_are_not_obtuse() {
        assert!(!is_obtuse(&p(0.0, 0.0), &p(10.0, 0.0), &p(0.0, 10.0)));
        assert!(!is_obtuse(&p(0.0, 0.0), &p(10.0, 0.0), &p(5.0, 8.0)));
    }
}
