//! Mesh file loading for tetview.
//!
//! This crate turns a Netgen neutral mesh file into the in-memory model
//! of the `tetview-model` crate:
//!
//! - [`load_neutral`] - The single synchronous load entry point
//! - [`IoError`] / [`IoResult`] - The failure taxonomy
//!
//! Loading either produces a fully populated [`TetMesh`] or fails
//! without side effects; there is no partially loaded state for a caller
//! to observe. Malformed content is rejected with an error naming the
//! section and item where parsing stopped.
//!
//! # Example
//!
//! ```no_run
//! use tetview_io::{load_neutral, IoError};
//!
//! match load_neutral("model.mesh") {
//!     Ok(mesh) => println!("{} points", mesh.point_count()),
//!     Err(IoError::FileNotFound { path }) => eprintln!("no such file: {}", path.display()),
//!     Err(e) => eprintln!("load failed: {e}"),
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod neutral;

pub use error::{IoError, IoResult};
pub use neutral::load_neutral;

// Re-export the model so callers need not depend on it directly
pub use tetview_model::TetMesh;
