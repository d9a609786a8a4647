//! Per-tick observability: post-tick counts and event tallies.

use paddock_core::TickId;

/// Result of one [`World::step()`](crate::World::step) call.
///
/// Counts reflect the fully-applied tick (strong step-level
/// consistency: no partial-tick state is ever observable). This is the
/// whole contract the engine offers external data collection — a
/// plotting or export layer consumes these reports and never reaches
/// into the engine mid-tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The tick this report describes.
    pub tick: TickId,
    /// Live sheep after the tick.
    pub sheep: usize,
    /// Live wolves after the tick.
    pub wolves: usize,
    /// Fully-grown grass patches after the tick.
    pub grown_grass: usize,
    /// Agents born during the tick (first activatable next tick).
    pub births: u32,
    /// Agents that died during the tick (starvation and predation).
    pub deaths: u32,
    /// Grass patches that finished regrowing during the tick.
    pub regrown: u32,
    /// Activations skipped because the agent had already been removed
    /// earlier in the tick. Expected under predation; reported, never
    /// fatal.
    pub stale_skips: u32,
}
