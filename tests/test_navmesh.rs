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

mod common;

use common::{init_logger, p, random_points, square};
use puckmesh::operations::annotate::NavMesh;
use puckmesh::operations::triangulation::Triangulation;
use puckmesh::parameters::{Canvas, MeshParams};

fn flags(mesh: &NavMesh) -> (Vec<(bool, bool)>, Vec<bool>) {
    (
        mesh.edges().values().map(|e| (e.passable, e.outside)).collect(),
        mesh.triangles().iter().map(|t| t.passable).collect(),
    )
}

#[test]
fn test_edge_neighbor_counts() {
    init_logger();
    let t = Triangulation::build(&random_points(21, 60, 0.0, 200.0)).unwrap();
    let mesh = NavMesh::build(&t, &MeshParams::new(1.0, Canvas::new(200.0, 200.0))).unwrap();

    assert!(!mesh.is_empty());
    for edge in mesh.edges().values() {
        let n = edge.neighbors.len();
        assert!(n == 1 || n == 2, "edge {} has {} neighbors", edge, n);
        assert_eq!(edge.outside, n == 1);
    }

    // every triangle edge links back to it
    for (i, tri) in mesh.triangles().iter().enumerate() {
        for &e in &tri.edges {
            assert!(mesh.edge(e).neighbors.contains(&i));
        }
    }
}

#[test]
fn test_square_boundary() {
    let t = Triangulation::build(&square()).unwrap();
    let mesh = NavMesh::build(&t, &MeshParams::new(1.0, Canvas::new(10.0, 10.0))).unwrap();

    assert_eq!(mesh.edges().len(), 5);
    assert_eq!(mesh.edges().values().filter(|e| e.outside).count(), 4);
    let inner: Vec<_> = mesh.edges().values().filter(|e| !e.outside).collect();
    assert_eq!(inner.len(), 1);
    assert!((inner[0].distance - 200f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_single_triangle_all_outside() {
    let t = Triangulation::build(&[p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)]).unwrap();
    let mesh = NavMesh::build(&t, &MeshParams::default()).unwrap();
    assert_eq!(mesh.edges().len(), 3);
    assert!(mesh.edges().values().all(|e| e.outside));
}

#[test]
fn test_reannotation_is_idempotent() {
    let t = Triangulation::build(&random_points(5, 40, 0.0, 100.0)).unwrap();
    let params = MeshParams::new(1.5, Canvas::new(100.0, 100.0));
    let mut mesh = NavMesh::build(&t, &params).unwrap();

    let before = flags(&mesh);
    mesh.annotate(&params).unwrap();
    assert_eq!(flags(&mesh), before);
}

#[test]
fn test_adopted_radius_persists() {
    let t = Triangulation::build(&square()).unwrap();
    let mut mesh = NavMesh::build(&t, &MeshParams::new(1.0, Canvas::new(10.0, 10.0))).unwrap();
    assert!(mesh.edges().values().all(|e| e.passable));

    // radius 2.5 would need 2*2.5 + 2*2.5 = 10 on fresh vertices, but the
    // vertices keep 1.0, so 2*2.5 + 2 = 7 < 10
    mesh.annotate(&MeshParams::new(2.5, Canvas::new(10.0, 10.0))).unwrap();
    assert!(mesh.vertices().iter().all(|v| v.radius == Some(1.0)));
    assert!(mesh.edges().values().all(|e| e.passable));
    assert_eq!(mesh.puck_radius(), 2.5);
}

#[test]
fn test_triangle_passability() {
    // right triangle legs 10: circumcenter (5,5), clearance |(0,0)-(5,5)|/2
    let t = Triangulation::build(&[p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)]).unwrap();
    let clearance = 50f64.sqrt() / 2.0;

    let mesh = NavMesh::build(&t, &MeshParams::new(clearance - 0.01, Canvas::default())).unwrap();
    assert!(mesh.triangles()[0].passable);

    let mesh = NavMesh::build(&t, &MeshParams::new(clearance + 0.01, Canvas::default())).unwrap();
    assert!(!mesh.triangles()[0].passable);
}
