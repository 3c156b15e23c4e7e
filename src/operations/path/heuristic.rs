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

//! Greedy ordering used by the escape search.

use std::cmp::Ordering;

use crate::geometry::Point2;
use crate::parameters::Canvas;

/// Distance from `p` to the nearest canvas side, measured along the axes.
/// Negative once `p` is outside the canvas.
pub fn boundary_distance(p: &Point2, canvas: &Canvas) -> f64 {
    let vertical = (canvas.height - p.y).min(p.y);
    let horizontal = (canvas.width - p.x).min(p.x);
    horizontal.min(vertical)
}

/// Which end of the boundary-distance ordering to try first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    /// Farthest from the boundary first.
    OpenSpace,
    /// Closest to the boundary first.
    Boundary,
}

/// Stable sort of `items` by the boundary distance of `waypoint(item)`.
pub fn sort_by_boundary_distance<T, F>(
    items: &mut [T],
    canvas: &Canvas,
    preference: Preference,
    waypoint: F,
) where
    F: Fn(&T) -> Point2,
{
    items.sort_by(|a, b| {
        let da = boundary_distance(&waypoint(a), canvas);
        let db = boundary_distance(&waypoint(b), canvas);
        compare(da, db, preference)
    });
}

#[inline]
fn compare(da: f64, db: f64, preference: Preference) -> Ordering {
    match preference {
        Preference::OpenSpace => db.total_cmp(&da),
        Preference::Boundary => da.total_cmp(&db),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_nearest_side() {
        let canvas = Canvas::new(100.0, 50.0);
        assert_eq!(boundary_distance(&Point2::new(10.0, 25.0), &canvas), 10.0);
        assert_eq!(boundary_distance(&Point2::new(50.0, 45.0), &canvas), 5.0);
        assert_eq!(boundary_distance(&Point2::new(97.0, 25.0), &canvas), 3.0);
        assert_eq!(boundary_distance(&Point2::new(-2.0, 25.0), &canvas), -2.0);
    }

    #[test]
    fn preferences_are_opposite() {
        let canvas = Canvas::new(100.0, 100.0);
        let pts = [
            Point2::new(50.0, 50.0),
            Point2::new(5.0, 50.0),
            Point2::new(20.0, 50.0),
        ];

        let mut toward_edge = pts;
        sort_by_boundary_distance(&mut toward_edge, &canvas, Preference::Boundary, |p| *p);
        assert_eq!(toward_edge[0], pts[1]);
        assert_eq!(toward_edge[2], pts[0]);

        let mut toward_center = pts;
        sort_by_boundary_distance(&mut toward_center, &canvas, Preference::OpenSpace, |p| *p);
        assert_eq!(toward_center[0], pts[0]);
        assert_eq!(toward_center[2], pts[1]);
    }

    #[test]
    fn ties_keep_their_order() {
        let canvas = Canvas::new(10.0, 10.0);
        let mut items = [(1, Point2::new(2.0, 5.0)), (2, Point2::new(5.0, 2.0))];
        sort_by_boundary_distance(&mut items, &canvas, Preference::Boundary, |i| i.1);
        assert_eq!(items[0].0, 1);
        assert_eq!(items[1].0, 2);
    }
}
