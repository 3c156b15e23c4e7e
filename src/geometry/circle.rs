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

use crate::geometry::util::EPS;
use crate::geometry::{Aabb, Point2};

/// Circle through the three vertices of a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circumcircle {
    pub center: Point2,
    pub radius_squared: f64,
    /// Set when the vertices are collinear within `EPS` and the center is the
    /// midpoint of their bounding box rather than a true circumcenter.
    pub degenerate: bool,
}

impl Circumcircle {
    /// Circumcircle of `a`, `b`, `c`.
    ///
    /// Near-collinear input (determinant below `EPS`) falls back to the
    /// midpoint of the axis-aligned bounding box, with the radius reaching
    /// the box's minimum corner.
    pub fn from_triangle(a: &Point2, b: &Point2, c: &Point2) -> Self {
        let ab_x = b.x - a.x;
        let ab_y = b.y - a.y;
        let ac_x = c.x - a.x;
        let ac_y = c.y - a.y;

        let e = ab_x * (a.x + b.x) + ab_y * (a.y + b.y);
        let f = ac_x * (a.x + c.x) + ac_y * (a.y + c.y);
        let g = 2.0 * (ab_x * (c.y - b.y) - ab_y * (c.x - b.x));

        if g.abs() < EPS {
            let bb = Aabb::new(*a, *a).expanded(b).expanded(c);
            let center = bb.center();
            return Circumcircle {
                center,
                radius_squared: center.distance_squared_to(&bb.min),
                degenerate: true,
            };
        }

        let center = Point2::new((ac_y * e - ab_y * f) / g, (ab_x * f - ac_x * e) / g);
        Circumcircle {
            center,
            radius_squared: center.distance_squared_to(a),
            degenerate: false,
        }
    }

    /// Inside or on the circle, by plain floating-point comparison.
    #[inline]
    pub fn contains(&self, p: &Point2) -> bool {
        self.center.distance_squared_to(p) <= self.radius_squared
    }
}
