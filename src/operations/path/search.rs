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

use ahash::AHashSet;
use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::Point2;
use crate::mesh::{PointId, TriangleId};
use crate::operations::annotate::NavMesh;
use crate::operations::path::heuristic::{
    Preference, boundary_distance, sort_by_boundary_distance,
};
use crate::parameters::{Canvas, SearchOptions};

/// One escape search over a [`NavMesh`].
///
/// The visited set lives here, not on the mesh, so any number of searches
/// can read the same mesh.
pub struct PathSearch<'m> {
    mesh: &'m NavMesh,
    canvas: Canvas,
    max_depth: usize,
    visited: AHashSet<TriangleId>,
}

/// A triangle on the traversal stack with the neighbors still to try.
struct Frame {
    /// Path length when the triangle was entered.
    base: usize,
    /// (edge slot, neighbor triangle) in priority order.
    candidates: Vec<(usize, usize)>,
    cursor: usize,
}

enum Step {
    Escaped,
    Descend(Frame),
}

impl<'m> PathSearch<'m> {
    pub fn new(mesh: &'m NavMesh, options: &SearchOptions) -> Self {
        Self {
            mesh,
            canvas: *mesh.canvas(),
            max_depth: options.max_depth,
            visited: AHashSet::new(),
        }
    }

    /// Waypoints from the puck at `start` to the midpoint of a passable
    /// boundary edge.
    pub fn run(mut self, start: PointId) -> Result<Vec<Point2>> {
        let mesh = self.mesh;
        let start_idx = mesh.vertex_index(start).ok_or(Error::UnknownVertex(start))?;
        let origin = mesh.vertices()[start_idx].position;

        let mut incident = mesh.vertex_edges(start_idx).to_vec();
        if incident.is_empty() {
            return Err(Error::IsolatedStart(start));
        }

        sort_by_boundary_distance(&mut incident, &self.canvas, Preference::OpenSpace, |&e| {
            mesh.edge(e).midpoint()
        });

        if let Some(&e) = incident
            .iter()
            .find(|&&e| mesh.edge(e).outside && mesh.edge(e).passable)
        {
            debug!("puck {} escapes directly across {}", start, mesh.edge(e));
            return Ok(vec![origin, mesh.edge(e).midpoint()]);
        }

        let r = mesh.puck_radius();
        for &e in &incident {
            let edge = mesh.edge(e);
            let [a, b] = edge.vertices;
            let reach = mesh.vertices()[a].radius_or(r) + mesh.vertices()[b].radius_or(r);
            if edge.distance < reach {
                let neighbor = edge
                    .opposite(start_idx)
                    .map_or(start, |v| mesh.vertices()[v].id);
                return Err(Error::IllegalStart { start, neighbor });
            }
        }

        let mut seen = AHashSet::new();
        let initial: Vec<usize> = incident
            .iter()
            .flat_map(|&e| mesh.edge(e).neighbors.iter().copied())
            .filter(|&t| seen.insert(t))
            .collect();

        for t in initial {
            let triangle = mesh.triangle(t);
            if self.visited.contains(&triangle.id()) {
                continue;
            }

            let mut path = vec![origin];
            if !triangle.triangle.is_obtuse() {
                path.push(triangle.triangle.circumcenter());
            }

            if let Some(mut found) = self.walk(t, path)? {
                if self.canvas.has_area() {
                    clip_to_canvas(&mut found, &self.canvas);
                }
                debug!("puck {} escapes in {} waypoints", start, found.len());
                return Ok(found);
            }
        }

        debug!("puck {} is enclosed", start);
        Err(Error::NoPathFound)
    }

    /// Depth-first walk from `root`, extending `path`. `None` when every
    /// branch dead-ends.
    fn walk(&mut self, root: usize, mut path: Vec<Point2>) -> Result<Option<Vec<Point2>>> {
        let mesh = self.mesh;
        let mut stack = match self.enter(root, &mut path) {
            Step::Escaped => return Ok(Some(path)),
            Step::Descend(frame) => vec![frame],
        };

        loop {
            let Some(frame) = stack.last_mut() else {
                return Ok(None);
            };
            let Some(&(edge, next)) = frame.candidates.get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            let base = frame.base;

            let neighbor = mesh.triangle(next);
            // reached through a sibling branch since this frame was built
            if self.visited.contains(&neighbor.id()) {
                continue;
            }

            if stack.len() >= self.max_depth {
                warn!("escape search gave up at depth {}", stack.len());
                return Err(Error::DepthLimitExceeded(self.max_depth));
            }

            path.truncate(base);
            path.push(mesh.edge(edge).midpoint());
            // an obtuse triangle's circumcenter lies outside it
            if !neighbor.triangle.is_obtuse() {
                path.push(neighbor.triangle.circumcenter());
            }

            match self.enter(next, &mut path) {
                Step::Escaped => return Ok(Some(path)),
                Step::Descend(frame) => stack.push(frame),
            }
        }
    }

    fn enter(&mut self, t: usize, path: &mut Vec<Point2>) -> Step {
        let mesh = self.mesh;
        let triangle = mesh.triangle(t);
        self.visited.insert(triangle.id());
        trace!("exploring triangle {}", triangle.id());

        let mut candidates = Vec::new();
        for &e in &triangle.edges {
            let edge = mesh.edge(e);
            if !edge.passable {
                continue;
            }
            if edge.outside {
                path.push(edge.midpoint());
                return Step::Escaped;
            }
            if let Some(n) = edge.other_neighbor(t) {
                let neighbor = mesh.triangle(n);
                if neighbor.passable && !self.visited.contains(&neighbor.id()) {
                    candidates.push((e, n));
                }
            }
        }

        sort_by_boundary_distance(&mut candidates, &self.canvas, Preference::Boundary, |&(e, _)| {
            mesh.edge(e).midpoint()
        });

        Step::Descend(Frame {
            base: path.len(),
            candidates,
            cursor: 0,
        })
    }
}

/// Cuts `path` right after its first waypoint outside `canvas`.
pub fn clip_to_canvas(path: &mut Vec<Point2>, canvas: &Canvas) {
    if let Some(i) = path.iter().position(|p| boundary_distance(p, canvas) < 0.0) {
        path.truncate(i + 1);
    }
}
