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

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::geometry::Point2;
use crate::kernel::{incircle_exact, orient2d_exact};
use crate::mesh::{IdCounter, PointId, Triangle, Vertex};

pub mod delaunay;

pub use delaunay::Delaunay;

pub trait Triangulate2D {
    fn triangulate(points: &[Point2]) -> Result<Triangulation>;
}

/// The outcome of one triangulation session: the input vertices, the final
/// triangles, and the identity counter that numbered them.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) ids: IdCounter,
}

impl Triangulation {
    /// Delaunay triangulation of `points`, vertices numbered in input order.
    pub fn build(points: &[Point2]) -> Result<Self> {
        Delaunay::triangulate(points)
    }

    /// Like [`Triangulation::build`], for any primitive numeric coordinates.
    pub fn from_coords<T: ToPrimitive>(coords: &[(T, T)]) -> Result<Self> {
        let points = coords
            .iter()
            .enumerate()
            .map(|(index, (x, y))| {
                x.to_f64()
                    .zip(y.to_f64())
                    .and_then(|(x, y)| Point2::from_coords(x, y))
                    .ok_or(Error::NonFiniteCoordinate { index })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::build(&points)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn ids(&self) -> &IdCounter {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Index and vertex for `id`.
    pub fn vertex_by_id(&self, id: PointId) -> Option<(usize, &Vertex)> {
        self.vertices.iter().enumerate().find(|(_, v)| v.id == id)
    }

    /// Gives the puck sitting on vertex `id` its own radius.
    pub fn set_vertex_radius(&mut self, id: PointId, radius: f64) -> Result<()> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidPuckRadius(radius));
        }
        let vertex = self
            .vertices
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(Error::UnknownVertex(id))?;
        vertex.radius = Some(radius);
        Ok(())
    }

    /// Total area covered by the triangles.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Exact check that no vertex lies strictly inside the circumcircle of a
    /// triangle it does not belong to. Collinear triangles are skipped.
    pub fn is_delaunay(&self) -> bool {
        self.triangles.iter().all(|t| {
            let [a, b, c] = &t.positions;
            let orientation = match orient2d_exact(a, b, c) {
                Some(Ordering::Equal) | None => return true,
                Some(o) => o,
            };
            self.vertices
                .iter()
                .enumerate()
                .filter(|(i, _)| !t.has_vertex(*i))
                .all(|(_, v)| match incircle_exact(a, b, c, &v.position) {
                    Some(s) => s != orientation,
                    None => true,
                })
        })
    }
}
