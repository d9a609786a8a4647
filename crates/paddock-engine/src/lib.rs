//! Simulation engine for the paddock predator-prey model.
//!
//! A discrete-time, spatial, stochastic wolf-sheep-grass ecosystem on a
//! toroidal grid. The engine is deliberately small: a [`World`] owns a
//! grid, a registry of live agents, and a seeded RNG; [`World::step`]
//! runs one breed-shuffled, agent-shuffled activation pass and returns
//! a [`StepReport`] of post-tick counts.
//!
//! # Execution model
//!
//! Single-threaded and turn-based. Within a tick each agent acts to
//! completion before the next starts; the schedule iterates copied
//! snapshots, so births and deaths mid-tick never invalidate the
//! in-progress order. Agents eaten mid-tick are skipped, newborns first
//! act next tick.
//!
//! # Quick start
//!
//! ```
//! use paddock_engine::{World, WorldConfig};
//!
//! let config = WorldConfig {
//!     width: 10,
//!     height: 10,
//!     initial_sheep: 20,
//!     initial_wolves: 5,
//!     seed: 7,
//!     ..WorldConfig::default()
//! };
//! let mut world = World::new(config).unwrap();
//! for _ in 0..100 {
//!     let report = world.step();
//!     // Feed `report` to whatever collects time series.
//!     let _ = (report.sheep, report.wolves, report.grown_grass);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
mod behavior;
pub mod config;
pub mod registry;
pub mod report;
pub mod world;

pub use agent::{Agent, AgentState, GrassPatch, Sheep, Wolf};
pub use paddock_core::{AgentId, Breed, Pos, TickId};
pub use config::{ConfigError, WorldConfig};
pub use registry::AgentRegistry;
pub use report::StepReport;
pub use world::World;
