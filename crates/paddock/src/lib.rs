//! Paddock: a wolf-sheep-grass predator-prey simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the paddock sub-crates. For most users, adding `paddock` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use paddock::prelude::*;
//!
//! let config = WorldConfig {
//!     width: 20,
//!     height: 20,
//!     initial_sheep: 100,
//!     initial_wolves: 50,
//!     seed: 42,
//!     ..WorldConfig::default()
//! };
//! let mut world = World::new(config).unwrap();
//! for _ in 0..200 {
//!     let report = world.step();
//!     if report.sheep == 0 && report.wolves == 0 {
//!         break;
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `paddock-core` | Ids, breeds, positions |
//! | [`space`] | `paddock-space` | Torus topology and the positional index |
//! | [`engine`] | `paddock-engine` | Configuration, agents, registry, the world |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, breeds, and positions (`paddock-core`).
pub use paddock_core as types;

/// Torus topology and the agent positional index (`paddock-space`).
///
/// Provides [`space::Torus`] (wrap arithmetic, Moore / von Neumann
/// neighborhoods) and [`space::MultiGrid`] (which agents occupy which
/// cell).
pub use paddock_space as space;

/// The simulation engine (`paddock-engine`).
///
/// [`engine::World`] drives ticks; [`engine::WorldConfig`] holds the
/// model parameters; [`engine::StepReport`] is the per-tick
/// observability contract.
pub use paddock_engine as engine;

/// Common imports for typical paddock usage.
///
/// ```rust
/// use paddock::prelude::*;
/// ```
pub mod prelude {
    pub use paddock_core::{AgentId, Breed, Pos, TickId};
    pub use paddock_engine::{
        Agent, AgentState, ConfigError, GrassPatch, Sheep, StepReport, Wolf, World, WorldConfig,
    };
    pub use paddock_space::{GridError, MultiGrid, Torus};
}
