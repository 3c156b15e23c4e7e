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

//! Escape-path search for a puck over an annotated [`NavMesh`].
//!
//! The search is depth-first. From the start vertex it first tries a direct
//! escape across an incident boundary edge; otherwise it walks the triangles
//! around the start, always trying the neighbor whose shared edge is closest
//! to the canvas boundary first, and backtracks out of dead ends.

use log::debug;

use crate::error::Result;
use crate::geometry::Point2;
use crate::mesh::PointId;
use crate::operations::annotate::NavMesh;
use crate::parameters::SearchOptions;

pub mod heuristic;
pub mod search;

pub use search::{PathSearch, clip_to_canvas};

/// Waypoints from `start` to the mesh boundary: the start position, then edge
/// midpoints and triangle circumcenters.
pub fn find_escape_path(
    mesh: &NavMesh,
    start: PointId,
    options: &SearchOptions,
) -> Result<Vec<Point2>> {
    PathSearch::new(mesh, options).run(start)
}

/// [`find_escape_path`], with every failure reported as an empty path.
pub fn escape_path(mesh: &NavMesh, start: PointId, options: &SearchOptions) -> Vec<Point2> {
    find_escape_path(mesh, start, options).unwrap_or_else(|e| {
        debug!("no escape path from {}: {}", start, e);
        Vec::new()
    })
}
