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

use crate::error::{Error, Result};
use crate::geometry::Point2;
use crate::mesh::ids::PointId;
use crate::operations::path::heuristic::boundary_distance;

/// The drawing area the point set lives in, anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    /// See [`boundary_distance`].
    pub fn boundary_distance(&self, p: &Point2) -> f64 {
        boundary_distance(p, self)
    }
}

/// Inputs of the mesh annotation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshParams {
    pub puck_radius: f64,
    pub canvas: Canvas,
    /// Vertex to mark as the start of the escape.
    pub start: Option<PointId>,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            puck_radius: 1.0,
            canvas: Canvas::default(),
            start: None,
        }
    }
}

impl MeshParams {
    pub fn new(puck_radius: f64, canvas: Canvas) -> Self {
        Self {
            puck_radius,
            canvas,
            start: None,
        }
    }

    pub fn with_start(mut self, start: PointId) -> Self {
        self.start = Some(start);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.puck_radius.is_finite() && self.puck_radius > 0.0) {
            return Err(Error::InvalidPuckRadius(self.puck_radius));
        }
        self.canvas.validate()
    }
}

/// Limits for a single path search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOptions {
    /// Deepest chain of triangles the traversal may hold at once.
    pub max_depth: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_depth: 1 << 16 }
    }
}
