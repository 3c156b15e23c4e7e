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

//! Incremental Bowyer–Watson construction.
//!
//! Every insertion scans all live triangles, so the whole build is O(n²).

use ahash::AHashMap;
use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::util::SUPER_TRIANGLE_MARGIN;
use crate::geometry::{Aabb, Point2};
use crate::kernel::{in_circumcircle, orient2d};
use crate::mesh::{CanonicalEdge, IdCounter, Triangle, Vertex};
use crate::operations::triangulation::{Triangulate2D, Triangulation};

/// Bowyer–Watson triangulator.
pub struct Delaunay;

impl Triangulate2D for Delaunay {
    fn triangulate(points: &[Point2]) -> Result<Triangulation> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }

        let mut ids = IdCounter::new();
        let mut vertices: Vec<Vertex> = points
            .iter()
            .map(|p| Vertex::new(ids.next_point(), *p))
            .collect();

        let Some(bb) = Aabb::from_points(points) else {
            debug!("triangulation of an empty point set");
            return Ok(Triangulation {
                vertices,
                triangles: Vec::new(),
                ids,
            });
        };
        if bb.is_flat() {
            warn!(
                "input spans {}x{}, the bounding triangle is degenerate",
                bb.width(),
                bb.height()
            );
        }

        // Create super-triangle that contains all points
        let s0 = vertices.len();
        for p in super_triangle(&bb) {
            vertices.push(Vertex::new(ids.next_point(), p));
        }
        let mut triangles = vec![make_triangle(&mut ids, [s0, s0 + 1, s0 + 2], &vertices)];

        for pid in 0..s0 {
            insert_point(pid, &vertices, &mut triangles, &mut ids);
        }

        // Remove triangles touching the super-triangle
        triangles.retain(|t| t.vertices.iter().all(|&v| v < s0));
        vertices.truncate(s0);

        debug!(
            "triangulated {} points into {} triangles",
            vertices.len(),
            triangles.len()
        );
        Ok(Triangulation {
            vertices,
            triangles,
            ids,
        })
    }
}

/// Bounding triangle with a margin of ten times the input extent.
///
/// Too large and the circumcircle arithmetic loses precision; too small and
/// the hull can come out non-convex. Extreme coordinate ranges can still hit
/// the latter.
fn super_triangle(bb: &Aabb) -> [Point2; 3] {
    let dx = bb.width() * SUPER_TRIANGLE_MARGIN;
    let dy = bb.height() * SUPER_TRIANGLE_MARGIN;
    [
        Point2::new(bb.min.x - dx, bb.min.y - dy * 3.0),
        Point2::new(bb.min.x - dx, bb.max.y + dy),
        Point2::new(bb.max.x + dx * 3.0, bb.max.y + dy),
    ]
}

/// New counter-clockwise triangle over the given vertex indices.
fn make_triangle(ids: &mut IdCounter, [a, b, c]: [usize; 3], vertices: &[Vertex]) -> Triangle {
    let (pa, pb, pc) = (
        vertices[a].position,
        vertices[b].position,
        vertices[c].position,
    );
    if orient2d(&pa, &pb, &pc) < 0.0 {
        Triangle::new(ids.next_triangle(), [a, c, b], [pa, pc, pb])
    } else {
        Triangle::new(ids.next_triangle(), [a, b, c], [pa, pb, pc])
    }
}

/// Insert a single point using Bowyer-Watson algorithm
fn insert_point(pid: usize, vertices: &[Vertex], triangles: &mut Vec<Triangle>, ids: &mut IdCounter) {
    let p = vertices[pid].position;

    // Find triangles whose circumcircle contains p
    let (bad, kept): (Vec<Triangle>, Vec<Triangle>) =
        std::mem::take(triangles).into_iter().partition(|t| {
            let [a, b, c] = &t.positions;
            in_circumcircle(&p, [a, b, c], &t.circle)
        });
    *triangles = kept;

    if bad.is_empty() {
        warn!("point {} lies outside every circumcircle", vertices[pid]);
        return;
    }

    let cavity: Vec<(usize, usize)> = bad
        .iter()
        .flat_map(|t| {
            let [a, b, c] = t.vertices;
            [(a, b), (b, c), (c, a)]
        })
        .collect();

    // Edges shared by two removed triangles are interior to the cavity
    let key = |(a, b): (usize, usize)| CanonicalEdge::new(vertices[a].id, vertices[b].id);
    let mut edge_count: AHashMap<CanonicalEdge, u32> = AHashMap::with_capacity(cavity.len());
    for &e in &cavity {
        *edge_count.entry(key(e)).or_insert(0) += 1;
    }

    let mut added = 0usize;
    for &(a, b) in &cavity {
        if edge_count[&key((a, b))] == 1 {
            triangles.push(make_triangle(ids, [a, b, pid], vertices));
            added += 1;
        }
    }

    trace!(
        "inserted {}: removed {} triangles, added {}",
        vertices[pid],
        bad.len(),
        added
    );
}
