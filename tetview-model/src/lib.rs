//! Zone containers and the tetrahedral mesh model.
//!
//! This crate organizes the elements of a loaded tetrahedral mesh into
//! named zones and aggregates them into the model a viewer works
//! against:
//!
//! - [`Zone`] - An ordered collection of elements of one kind under one
//!   identifier, with display state and cached edge-length statistics
//! - [`Boundary`] / [`Domain`] - Zone instantiations for surface
//!   triangles and volumetric tetrahedra
//! - [`GroupRegistry`] - User-assigned boundary group labels with their
//!   display properties
//! - [`TetMesh`] - The loaded model: point set, id-keyed boundary and
//!   domain maps, group registry, and source-coordinate bounds
//!
//! The crate performs no rendering and no parsing. A loader (see the
//! `tetview-io` crate) builds a [`TetMesh`]; a viewer reads it through
//! accessors and flips display state through mutators.
//!
//! # Ownership
//!
//! One model instance is fully rebuilt per successful load. Consumers
//! that share a model (panels, the render widget) should hold one
//! shared instance and funnel mutations through the model's own
//! methods; the crate assumes a single writer at a time and provides no
//! internal locking.
//!
//! # Example
//!
//! ```
//! use tetview_model::{TetMesh, Triangle};
//!
//! let mut mesh = TetMesh::new();
//! mesh.add_triangle(7, Triangle::new(0, 1, 2));
//! mesh.add_triangle(7, Triangle::new(1, 2, 3));
//!
//! assert_eq!(mesh.boundary_ids(), vec![7]);
//! mesh.display_all_boundaries(false);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod group;
mod mesh;
mod zone;

pub use group::{GroupProperties, GroupRegistry};
pub use mesh::TetMesh;
pub use zone::{Boundary, Domain, EdgeLengths, Zone};

// Re-export the leaf types so consumers need only one import
pub use tetview_types::{Aabb, Color, Element, Point, Tetrahedron, Triangle};
