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

//! Planar Delaunay triangulation of a point set, and an escape-path search for
//! a disk ("puck") of given radius over the triangulation.
//!
//! ```
//! use puckmesh::geometry::Point2;
//! use puckmesh::operations::annotate::NavMesh;
//! use puckmesh::operations::path::escape_path;
//! use puckmesh::operations::triangulation::Triangulation;
//! use puckmesh::parameters::{Canvas, MeshParams, SearchOptions};
//!
//! let points = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(100.0, 0.0),
//!     Point2::new(50.0, 80.0),
//! ];
//! let triangulation = Triangulation::build(&points).unwrap();
//! assert_eq!(triangulation.triangles().len(), 1);
//!
//! let start = triangulation.vertices()[0].id;
//! let params = MeshParams::new(2.0, Canvas::new(100.0, 100.0)).with_start(start);
//! let mesh = NavMesh::build(&triangulation, &params).unwrap();
//!
//! let path = escape_path(&mesh, start, &SearchOptions::default());
//! assert_eq!(path.len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;
pub mod parameters;

pub use error::{Error, Result};
