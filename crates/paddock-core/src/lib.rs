//! Core types for the paddock predator-prey simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the spatial and engine crates:
//! agent and tick identifiers, the breed tag, and grid positions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod breed;
pub mod id;
pub mod pos;

pub use breed::Breed;
pub use id::{AgentId, IdAllocator, TickId};
pub use pos::Pos;
