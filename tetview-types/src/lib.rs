//! Core geometric types for tetview.
//!
//! This crate provides the foundational types for the tetrahedral mesh
//! model:
//!
//! - [`Point`] - A point of the mesh point set
//! - [`Triangle`] / [`Tetrahedron`] - Canonicalized elements referencing
//!   points by index
//! - [`Element`] - The capability contract shared by element types
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Color`] - RGB display color with float channels
//!
//! # Rendering-free
//!
//! This crate has **zero rendering dependencies**. A viewer consumes these
//! types through the model crate's accessors; nothing here knows how to
//! draw.
//!
//! # Index Convention
//!
//! Elements reference points by **0-based** index into the owning model's
//! point set. File formats with 1-based indices are converted at load
//! time, before an element is ever constructed.
//!
//! # Example
//!
//! ```
//! use tetview_types::{Element, Point, Triangle};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(1.0, 0.0, 0.0),
//!     Point::new(0.0, 1.0, 0.0),
//! ];
//!
//! // Vertex order in the input does not matter
//! let tri = Triangle::new(2, 0, 1);
//! assert_eq!(tri.points(), &[0, 1, 2][..]);
//! assert!((points[0].distance_from(&points[1]) - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod color;
mod element;
mod point;

pub use bounds::Aabb;
pub use color::Color;
pub use element::{Element, Tetrahedron, Triangle};
pub use point::Point;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
