//! Agent state: the closed set of breeds and their per-breed data.

use paddock_core::{AgentId, Breed, Pos};

/// A grazing prey animal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sheep {
    /// Remaining energy. May transiently go to 0 or below between the
    /// metabolic decrement and the death check within one activation.
    pub energy: i64,
}

/// A predator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wolf {
    /// Remaining energy. Same transient semantics as [`Sheep::energy`].
    pub energy: i64,
}

/// A stationary grass patch.
///
/// Created once per eligible cell at world init and never destroyed.
/// Being eaten flips it to not-grown and restarts the countdown;
/// regrowth completes deterministically when the countdown hits zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrassPatch {
    /// Whether the patch is currently edible.
    pub fully_grown: bool,
    /// Regrowth duration in ticks.
    pub countdown: u32,
    /// Ticks remaining until regrowth; meaningful only while not grown.
    pub current_countdown: u32,
}

impl GrassPatch {
    /// A patch in the given growth state with a full countdown pending.
    pub fn new(fully_grown: bool, countdown: u32) -> Self {
        Self {
            fully_grown,
            countdown,
            current_countdown: countdown,
        }
    }

    /// Mark the patch eaten: not grown, countdown restarted.
    pub fn consume(&mut self) {
        self.fully_grown = false;
        self.current_countdown = self.countdown;
    }

    /// Advance regrowth by one tick. Returns `true` if the patch became
    /// fully grown on this call.
    ///
    /// Grown patches are inert: no decrement is applied, so the
    /// countdown can never overshoot below zero.
    pub fn grow_tick(&mut self) -> bool {
        if self.fully_grown {
            return false;
        }
        self.current_countdown = self.current_countdown.saturating_sub(1);
        if self.current_countdown == 0 {
            self.fully_grown = true;
            true
        } else {
            false
        }
    }
}

/// Per-breed agent state.
///
/// A closed tagged variant: behavior is selected by matching on this
/// enum, never by runtime type inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// See [`Sheep`].
    Sheep(Sheep),
    /// See [`Wolf`].
    Wolf(Wolf),
    /// See [`GrassPatch`].
    Grass(GrassPatch),
}

impl AgentState {
    /// The breed tag for this state.
    pub fn breed(&self) -> Breed {
        match self {
            Self::Sheep(_) => Breed::Sheep,
            Self::Wolf(_) => Breed::Wolf,
            Self::Grass(_) => Breed::GrassPatch,
        }
    }
}

/// A live agent: identity, position, and breed-specific state.
///
/// The position mirrors the grid's positional index; only the world's
/// movement and spawn/despawn paths write it, keeping the two in
/// lockstep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    pos: Pos,
    state: AgentState,
}

impl Agent {
    /// Construct an agent at `pos`.
    pub fn new(id: AgentId, pos: Pos, state: AgentState) -> Self {
        Self { id, pos, state }
    }

    /// The agent's unique id.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current cell coordinate.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Breed tag.
    pub fn breed(&self) -> Breed {
        self.state.breed()
    }

    /// Breed-specific state.
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Energy for mobile agents; `None` for grass patches.
    pub fn energy(&self) -> Option<i64> {
        match &self.state {
            AgentState::Sheep(s) => Some(s.energy),
            AgentState::Wolf(w) => Some(w.energy),
            AgentState::Grass(_) => None,
        }
    }

    /// Grass state, if this agent is a patch.
    pub fn grass(&self) -> Option<&GrassPatch> {
        match &self.state {
            AgentState::Grass(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    pub(crate) fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }

    /// Mutable energy for mobile agents; `None` for grass patches.
    pub(crate) fn energy_mut(&mut self) -> Option<&mut i64> {
        match &mut self.state {
            AgentState::Sheep(s) => Some(&mut s.energy),
            AgentState::Wolf(w) => Some(&mut w.energy),
            AgentState::Grass(_) => None,
        }
    }
}
