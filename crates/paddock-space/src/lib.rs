//! Spatial data structures for paddock simulations.
//!
//! Two layers, deliberately separate:
//!
//! - [`Torus`]: pure topology — wrap arithmetic and neighborhood
//!   enumeration on a `width × height` periodic grid. Stateless with
//!   respect to agents.
//! - [`MultiGrid`]: the positional index — which agent ids sit on which
//!   cell. Multiple agents of any breed may share a cell. The grid does
//!   not own agents; the engine's registry does, and keeps the two in
//!   lockstep on every create/move/destroy.
//!
//! Neighborhood enumeration order is fixed and deterministic; callers
//! that want an unbiased random neighbor shuffle or sample themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod multigrid;
pub mod torus;

pub use error::GridError;
pub use multigrid::MultiGrid;
pub use torus::Torus;
