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

//! Turns a raw triangulation into a navigation mesh for a puck of a given
//! radius.

use log::{debug, warn};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::mesh::{Edge, EdgeIndex, IdCounter, NavTriangle, PointId, Triangle, Vertex};
use crate::operations::triangulation::Triangulation;
use crate::parameters::{Canvas, MeshParams};

/// A triangulation linked into edges and triangles, annotated with which of
/// them a puck can pass.
#[derive(Clone, Debug)]
pub struct NavMesh {
    vertices: Vec<Vertex>,
    /// Incident edge slots per vertex, without duplicates.
    vertex_edges: Vec<SmallVec<[usize; 8]>>,
    edges: EdgeIndex,
    triangles: Vec<NavTriangle>,
    puck_radius: f64,
    canvas: Canvas,
    ids: IdCounter,
}

impl NavMesh {
    /// Links the triangles of `triangulation` through shared edges and
    /// annotates the result with `params`.
    ///
    /// An empty triangulation gives an empty mesh.
    pub fn build(triangulation: &Triangulation, params: &MeshParams) -> Result<Self> {
        params.validate()?;

        let n = triangulation.vertices.len();
        let mut mesh = NavMesh {
            vertices: triangulation.vertices.clone(),
            vertex_edges: vec![SmallVec::new(); n],
            edges: EdgeIndex::with_capacity(triangulation.triangles.len() * 2),
            triangles: Vec::with_capacity(triangulation.triangles.len()),
            puck_radius: params.puck_radius,
            canvas: params.canvas,
            ids: triangulation.ids.clone(),
        };

        if triangulation.is_empty() {
            debug!("nothing to annotate, triangulation is empty");
            return Ok(mesh);
        }

        for t in &triangulation.triangles {
            mesh.link(t);
        }
        mesh.annotate(params)?;
        Ok(mesh)
    }

    fn link(&mut self, t: &Triangle) {
        let ti = self.triangles.len();
        let [a, b, c] = t.vertices;

        let e0 = self.shared_edge(a, b, ti);
        let e1 = self.shared_edge(a, c, ti);
        let e2 = self.shared_edge(b, c, ti);

        for (v, incident) in [(a, [e0, e1]), (b, [e0, e2]), (c, [e1, e2])] {
            for e in incident {
                if !self.vertex_edges[v].contains(&e) {
                    self.vertex_edges[v].push(e);
                }
            }
        }

        self.triangles.push(NavTriangle {
            triangle: t.clone(),
            edges: [e0, e1, e2],
            passable: false,
        });
    }

    /// Slot of the edge `a`-`b`, created on first use, with `triangle`
    /// recorded as one of its neighbors.
    fn shared_edge(&mut self, a: usize, b: usize, triangle: usize) -> usize {
        let slot = match self.edges.slot(self.vertices[a].id, self.vertices[b].id) {
            Some(slot) => slot,
            None => {
                let edge = Edge::new(
                    self.ids.next_edge(),
                    (a, &self.vertices[a]),
                    (b, &self.vertices[b]),
                );
                self.edges.add(edge);
                self.edges.len() - 1
            }
        };
        self.edges.at_mut(slot).neighbors.push(triangle);
        slot
    }

    /// Recomputes passability, boundary edges and the start marker.
    ///
    /// Vertices without a radius adopt the puck radius the first time they
    /// are annotated and keep it afterwards.
    pub fn annotate(&mut self, params: &MeshParams) -> Result<()> {
        params.validate()?;
        if let Some(start) = params.start {
            if self.vertex_index(start).is_none() {
                return Err(Error::UnknownVertex(start));
            }
        }

        self.puck_radius = params.puck_radius;
        self.canvas = params.canvas;
        if self.triangles.is_empty() {
            return Ok(());
        }

        let r = params.puck_radius;
        for t in &self.triangles {
            for &v in &t.triangle.vertices {
                self.vertices[v].radius.get_or_insert(r);
            }
        }

        let vertices = &self.vertices;
        for edge in self.edges.values_mut() {
            let [a, b] = edge.vertices;
            let clearance = 2.0 * r + vertices[a].radius_or(r) + vertices[b].radius_or(r);
            edge.passable = edge.distance > clearance;
            edge.outside = edge.neighbors.len() < 2;
            if edge.neighbors.len() > 2 {
                warn!(
                    "edge {} borders {} triangles, the triangulation is degenerate",
                    edge,
                    edge.neighbors.len()
                );
            }
        }

        for t in &mut self.triangles {
            t.passable = t.triangle.minimum_clearance() > r;
        }

        if let Some(start) = params.start {
            for v in &mut self.vertices {
                v.is_start = v.id == start;
            }
        }

        debug!(
            "annotated {} triangles ({} passable) and {} edges ({} passable, {} outside) for radius {}",
            self.triangles.len(),
            self.triangles.iter().filter(|t| t.passable).count(),
            self.edges.len(),
            self.edges.values().filter(|e| e.passable).count(),
            self.edges.values().filter(|e| e.outside).count(),
            r
        );
        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &EdgeIndex {
        &self.edges
    }

    pub fn triangles(&self) -> &[NavTriangle] {
        &self.triangles
    }

    #[inline]
    pub fn edge(&self, slot: usize) -> &Edge {
        self.edges.at(slot)
    }

    #[inline]
    pub fn triangle(&self, index: usize) -> &NavTriangle {
        &self.triangles[index]
    }

    /// Edge slots incident to vertex `index`.
    pub fn vertex_edges(&self, index: usize) -> &[usize] {
        &self.vertex_edges[index]
    }

    pub fn vertex_index(&self, id: PointId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    pub fn start_vertex(&self) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.is_start)
    }

    pub fn puck_radius(&self) -> f64 {
        self.puck_radius
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;

    fn square() -> Triangulation {
        Triangulation::build(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_triangulation_is_a_no_op() {
        let t = Triangulation::build(&[]).unwrap();
        let mesh = NavMesh::build(&t, &MeshParams::default()).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.edges().is_empty());
    }

    #[test]
    fn incident_edges_are_unique() {
        let mesh = NavMesh::build(&square(), &MeshParams::default()).unwrap();
        let total: usize = (0..4).map(|v| mesh.vertex_edges(v).len()).sum();
        // every edge is counted once from each endpoint
        assert_eq!(total, 2 * mesh.edges().len());
        for v in 0..4 {
            let mut e = mesh.vertex_edges(v).to_vec();
            e.dedup();
            assert_eq!(e.len(), mesh.vertex_edges(v).len());
        }
    }

    #[test]
    fn unset_radii_adopt_puck_radius() {
        let mut t = square();
        let custom = t.vertices()[0].id;
        t.set_vertex_radius(custom, 0.25).unwrap();

        let mesh = NavMesh::build(&t, &MeshParams::new(1.5, Canvas::new(10.0, 10.0))).unwrap();
        assert_eq!(mesh.vertices()[0].radius, Some(0.25));
        assert!(mesh.vertices()[1..].iter().all(|v| v.radius == Some(1.5)));
    }

    #[test]
    fn edge_passability_threshold() {
        // sides are 10; with radius 2 the requirement is 2*2 + 2 + 2 = 8
        let mesh = NavMesh::build(&square(), &MeshParams::new(2.0, Canvas::default())).unwrap();
        assert!(mesh.edges().values().all(|e| e.passable));

        // with radius 2.5 the requirement is exactly 10, which is not exceeded
        let mesh = NavMesh::build(&square(), &MeshParams::new(2.5, Canvas::default())).unwrap();
        assert!(mesh.edges().values().filter(|e| e.outside).all(|e| !e.passable));
    }

    #[test]
    fn start_marker_is_exclusive() {
        let t = square();
        let start = t.vertices()[2].id;
        let mesh = NavMesh::build(&t, &MeshParams::default().with_start(start)).unwrap();
        assert_eq!(mesh.start_vertex().map(|v| v.id), Some(start));
        assert_eq!(mesh.vertices().iter().filter(|v| v.is_start).count(), 1);
    }

    #[test]
    fn unknown_start_is_rejected() {
        let err = NavMesh::build(&square(), &MeshParams::default().with_start(PointId(4242)))
            .unwrap_err();
        assert_eq!(err, Error::UnknownVertex(PointId(4242)));
    }
}
