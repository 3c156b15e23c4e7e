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

use crate::geometry::{Circumcircle, Point2};
use crate::kernel::{is_obtuse, orient2d};
use crate::mesh::ids::TriangleId;

/// A triangulation face: three vertex indices with their cached positions and
/// circumcircle.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub id: TriangleId,
    pub vertices: [usize; 3],
    pub positions: [Point2; 3],
    pub circle: Circumcircle,
}

impl Triangle {
    pub fn new(id: TriangleId, vertices: [usize; 3], positions: [Point2; 3]) -> Self {
        let [a, b, c] = &positions;
        Self {
            id,
            vertices,
            positions,
            circle: Circumcircle::from_triangle(a, b, c),
        }
    }

    #[inline]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    #[inline]
    pub fn circumcenter(&self) -> Point2 {
        self.circle.center
    }

    /// Half the distance from the first vertex to the circumcenter.
    pub fn minimum_clearance(&self) -> f64 {
        self.positions[0].distance_to(&self.circle.center) / 2.0
    }

    pub fn is_obtuse(&self) -> bool {
        let [a, b, c] = &self.positions;
        is_obtuse(a, b, c)
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.positions;
        orient2d(a, b, c).abs() / 2.0
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A triangle of the navigation mesh, linked to its three edges.
#[derive(Debug, Clone)]
pub struct NavTriangle {
    pub triangle: Triangle,
    /// Edge indices in the order (v0,v1), (v0,v2), (v1,v2).
    pub edges: [usize; 3],
    pub passable: bool,
}

impl NavTriangle {
    #[inline]
    pub fn id(&self) -> TriangleId {
        self.triangle.id
    }
}
