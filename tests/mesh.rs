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

use puckmesh::geometry::Point2;
use puckmesh::mesh::{
    CanonicalEdge, Edge, EdgeId, EdgeIndex, IdCounter, PointId, Triangle, TriangleId, Vertex,
};

fn v(id: u64, x: f64, y: f64) -> Vertex {
    Vertex::new(PointId(id), Point2::new(x, y))
}

#[test]
fn test_ids_share_one_sequence() {
    let mut ids = IdCounter::new();
    assert_eq!(ids.next_point(), PointId(0));
    assert_eq!(ids.next_edge(), EdgeId(1));
    assert_eq!(ids.next_triangle(), TriangleId(2));
    assert_eq!(ids.issued(), 3);

    let mut other = IdCounter::new();
    assert_eq!(other.next_point(), PointId(0));
}

#[test]
fn test_canonical_edge_order() {
    let k1 = CanonicalEdge::new(PointId(7), PointId(3));
    let k2 = CanonicalEdge::new(PointId(3), PointId(7));
    assert_eq!(k1, k2);
    assert_eq!(k1.a, PointId(3));
    assert_eq!(k1.b, PointId(7));

    // "1,23" and "12,3" must stay distinct keys
    assert_ne!(
        CanonicalEdge::new(PointId(1), PointId(23)),
        CanonicalEdge::new(PointId(12), PointId(3))
    );
}

#[test]
fn test_vertex_identity_and_radius() {
    let a = v(1, 0.0, 0.0);
    assert_eq!(a, v(1, 5.0, 5.0));
    assert_ne!(a, v(2, 0.0, 0.0));
    assert_eq!(v(4, 1.5, -2.0).to_string(), "4 (1.5,-2)");

    let mut b = v(0, 0.0, 0.0);
    assert_eq!(b.radius_or(3.0), 3.0);
    b.radius = Some(1.0);
    assert_eq!(b.radius_or(3.0), 1.0);
}

#[test]
fn test_reversed_edges_are_equal() {
    let (a, b) = (v(0, 0.0, 0.0), v(1, 3.0, 4.0));
    let e1 = Edge::new(EdgeId(10), (0, &a), (1, &b));
    let e2 = Edge::new(EdgeId(11), (1, &b), (0, &a));
    assert_eq!(e1, e2);
    assert_eq!(e1.distance, 5.0);
    assert_eq!(e1.midpoint(), Point2::new(1.5, 2.0));
    assert_eq!(e1.to_string(), "[0,1]");
}

#[test]
fn test_edge_opposite_and_neighbor() {
    let (a, b) = (v(0, 0.0, 0.0), v(1, 1.0, 0.0));
    let mut e = Edge::new(EdgeId(2), (4, &a), (9, &b));
    assert_eq!(e.opposite(4), Some(9));
    assert_eq!(e.opposite(9), Some(4));
    assert_eq!(e.opposite(5), None);

    e.neighbors.push(3);
    assert_eq!(e.other_neighbor(3), None);
    e.neighbors.push(8);
    assert_eq!(e.other_neighbor(3), Some(8));
    assert_eq!(e.other_neighbor(8), Some(3));
    assert_eq!(e.other_neighbor(1), None);
}

#[test]
fn test_edge_index_is_symmetric() {
    let (a, b, c) = (v(1, 1.0, 0.0), v(2, 2.0, 0.0), v(3, 3.0, 0.0));
    let mut index = EdgeIndex::new();
    assert!(index.add(Edge::new(EdgeId(10), (0, &a), (1, &b))));
    assert!(!index.add(Edge::new(EdgeId(11), (1, &b), (0, &a))));
    assert_eq!(index.len(), 1);

    assert_eq!(index.get(PointId(2), PointId(1)).map(|e| e.id), Some(EdgeId(10)));
    assert_eq!(index.slot(PointId(1), PointId(2)), Some(0));
    assert!(index.get(PointId(1), PointId(3)).is_none());
    assert!(!index.contains(&Edge::new(EdgeId(12), (0, &a), (2, &c))));
}

#[test]
fn test_triangle_clearance() {
    let t = Triangle::new(
        TriangleId(0),
        [0, 1, 2],
        [
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(0.0, 8.0),
        ],
    );
    // circumradius 5
    assert!((t.minimum_clearance() - 2.5).abs() < 1e-12);
    assert!((t.area() - 24.0).abs() < 1e-12);
    assert!(!t.is_obtuse());
    assert!(t.has_vertex(2));
    assert!(!t.has_vertex(3));

    let flat = Triangle::new(
        TriangleId(1),
        [0, 1, 2],
        [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 1.0),
        ],
    );
    assert!(flat.is_obtuse());
}
