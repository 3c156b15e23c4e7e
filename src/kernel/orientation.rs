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

use crate::geometry::Point2;
use crate::numeric::ExactRational;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
#[inline]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Exact sign of [`orient2d`]. `None` if a coordinate is not finite.
pub fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Option<Ordering> {
    let [ax, ay, bx, by, cx, cy] = exact_coords([a.x, a.y, b.x, b.y, c.x, c.y])?;
    let lhs = &(&bx - &ax) * &(&cy - &ay);
    let rhs = &(&by - &ay) * &(&cx - &ax);
    Some((&lhs - &rhs).sign())
}

pub(crate) fn exact_coords<const K: usize>(vals: [f64; K]) -> Option<[ExactRational; K]> {
    let mut out = Vec::with_capacity(K);
    for v in vals {
        out.push(ExactRational::from_f64(v)?);
    }
    out.try_into().ok()
}
