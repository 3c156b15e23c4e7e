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

use std::fmt;

use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::mesh::canonical_edge::CanonicalEdge;
use crate::mesh::ids::EdgeId;
use crate::mesh::vertex::Vertex;

/// An undirected mesh edge shared by the triangles on either side of it.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub key: CanonicalEdge,
    /// Endpoint indices into the owning mesh's vertex list.
    pub vertices: [usize; 2],
    pub endpoints: [Point2; 2],
    pub distance: f64,
    pub passable: bool,
    /// Triangle indices; more than two means the triangulation is degenerate.
    pub neighbors: SmallVec<[usize; 2]>,
    pub outside: bool,
}

impl Edge {
    pub fn new(id: EdgeId, (i0, v0): (usize, &Vertex), (i1, v1): (usize, &Vertex)) -> Self {
        Self {
            id,
            key: CanonicalEdge::new(v0.id, v1.id),
            vertices: [i0, i1],
            endpoints: [v0.position, v1.position],
            distance: v0.position.distance_to(&v1.position),
            passable: false,
            neighbors: SmallVec::new(),
            outside: false,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Point2 {
        self.endpoints[0].midpoint(&self.endpoints[1])
    }

    /// Given one endpoint, the other one.
    pub fn opposite(&self, vertex: usize) -> Option<usize> {
        match self.vertices {
            [a, b] if a == vertex => Some(b),
            [a, b] if b == vertex => Some(a),
            _ => None,
        }
    }

    /// Triangle on the far side of this edge from `triangle`.
    pub fn other_neighbor(&self, triangle: usize) -> Option<usize> {
        match self.neighbors.as_slice() {
            [a, b] if *a == triangle => Some(*b),
            [a, b] if *b == triangle => Some(*a),
            _ => None,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
