//! The closed set of agent breeds.

use std::fmt;

/// The species tag of an agent.
///
/// Determines both the agent's per-tick behavior and its scheduling
/// group: the activation schedule runs all agents of one breed before
/// moving to the next (in per-tick random breed order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breed {
    /// Grazing prey. Moves, eats grass, reproduces, starves.
    Sheep,
    /// Predator. Moves, eats sheep, reproduces, starves.
    Wolf,
    /// Stationary resource. Regrows on a fixed countdown after being eaten.
    GrassPatch,
}

impl Breed {
    /// All breeds in canonical (declaration) order.
    ///
    /// The schedule shuffles this order per tick; the constant itself
    /// exists so that "which breeds are present" checks enumerate a
    /// fixed, closed set.
    pub const ALL: [Breed; 3] = [Breed::Sheep, Breed::Wolf, Breed::GrassPatch];
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sheep => write!(f, "sheep"),
            Self::Wolf => write!(f, "wolf"),
            Self::GrassPatch => write!(f, "grass"),
        }
    }
}
