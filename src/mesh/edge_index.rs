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

use ahash::AHashMap;

use crate::mesh::canonical_edge::CanonicalEdge;
use crate::mesh::edge::Edge;
use crate::mesh::ids::PointId;

/// Edges keyed by their unordered endpoint ids, so `(a, b)` and `(b, a)`
/// resolve to the same shared edge. Edges also keep a stable slot index.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    slots: AHashMap<CanonicalEdge, usize>,
    edges: Vec<Edge>,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: AHashMap::with_capacity(n),
            edges: Vec::with_capacity(n),
        }
    }

    /// Inserts `edge` unless an edge with the same endpoints is present.
    /// Returns whether it was inserted.
    pub fn add(&mut self, edge: Edge) -> bool {
        if self.slots.contains_key(&edge.key) {
            return false;
        }
        self.slots.insert(edge.key, self.edges.len());
        self.edges.push(edge);
        true
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.slots.contains_key(&edge.key)
    }

    pub fn get(&self, a: PointId, b: PointId) -> Option<&Edge> {
        self.slot(a, b).map(|i| &self.edges[i])
    }

    /// Slot index of the edge between `a` and `b`.
    pub fn slot(&self, a: PointId, b: PointId) -> Option<usize> {
        self.slots.get(&CanonicalEdge::new(a, b)).copied()
    }

    #[inline]
    pub fn at(&self, slot: usize) -> &Edge {
        &self.edges[slot]
    }

    #[inline]
    pub fn at_mut(&mut self, slot: usize) -> &mut Edge {
        &mut self.edges[slot]
    }

    /// All stored edges. Callers must not rely on the order.
    pub fn values(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
