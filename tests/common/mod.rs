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

#![allow(dead_code)]

use std::f64::consts::PI;

use puckmesh::geometry::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

pub fn square() -> Vec<Point2> {
    vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
}

/// `n` points uniformly drawn from `[lo, hi)²` with a fixed seed.
pub fn random_points(seed: u64, n: usize, lo: f64, hi: f64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| p(rng.random_range(lo..hi), rng.random_range(lo..hi)))
        .collect()
}

/// `n` points on a circle of `radius` around `center`, starting at `phase`
/// degrees.
pub fn ring(center: Point2, radius: f64, n: usize, phase: f64) -> Vec<Point2> {
    (0..n)
        .map(|k| {
            let a = (phase + 360.0 * k as f64 / n as f64) * PI / 180.0;
            p(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// A puck at (100,100) inside a hexagon of radius `inner`, with an outer
/// hexagon of radius `outer` rotated by 30 degrees. The center is index 0.
pub fn nested_hexagons(inner: f64, outer: f64) -> Vec<Point2> {
    hexagon_rings(p(100.0, 100.0), inner, outer)
}

/// [`nested_hexagons`] around an arbitrary `center`. Indices 1..=6 are the
/// inner ring at 0, 60, .., 300 degrees and 7..=12 the outer ring at
/// 30, 90, .., 330 degrees.
pub fn hexagon_rings(center: Point2, inner: f64, outer: f64) -> Vec<Point2> {
    let mut pts = vec![center];
    pts.extend(ring(center, inner, 6, 0.0));
    pts.extend(ring(center, outer, 6, 30.0));
    pts
}

/// Corners of the 100x100 square plus `n` seeded points in `[5, 95)²`.
pub fn square_with_interior(seed: u64, n: usize) -> Vec<Point2> {
    let mut pts = vec![p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 100.0)];
    pts.extend(random_points(seed, n, 5.0, 95.0));
    pts
}
