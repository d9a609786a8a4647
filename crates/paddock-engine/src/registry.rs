//! The authoritative set of live agents, partitioned by breed.

use crate::agent::Agent;
use indexmap::{IndexMap, IndexSet};
use paddock_core::{AgentId, Breed};
use smallvec::SmallVec;

/// Owns every live agent and tracks breed membership.
///
/// The registry is the sole owner of agent lifetime; the grid holds only
/// a positional index. Add and remove are O(1) (indexmap swap-remove),
/// so predation can kill agents mid-tick without disturbing iteration —
/// the schedule iterates over *copied snapshots*, never over the live
/// maps.
#[derive(Clone, Debug, Default)]
pub struct AgentRegistry {
    agents: IndexMap<AgentId, Agent>,
    by_breed: [IndexSet<AgentId>; 3],
}

fn breed_slot(breed: Breed) -> usize {
    match breed {
        Breed::Sheep => 0,
        Breed::Wolf => 1,
        Breed::GrassPatch => 2,
    }
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its breed. O(1).
    ///
    /// The caller (the world's spawn path) guarantees the id is fresh;
    /// re-adding a live id would desynchronize the breed partitions.
    pub fn add(&mut self, agent: Agent) {
        let id = agent.id();
        debug_assert!(!self.agents.contains_key(&id), "re-adding live agent {id}");
        self.by_breed[breed_slot(agent.breed())].insert(id);
        self.agents.insert(id, agent);
    }

    /// Remove an agent, returning it if it was live. Removing a
    /// non-member is a no-op returning `None`. O(1).
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let agent = self.agents.swap_remove(&id)?;
        self.by_breed[breed_slot(agent.breed())].swap_remove(&id);
        Some(agent)
    }

    /// Whether `id` is live. The schedule's pre-step liveness check.
    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Shared access to a live agent.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    /// Mutable access to a live agent.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    /// Number of live agents of `breed`. O(1).
    pub fn count(&self, breed: Breed) -> usize {
        self.by_breed[breed_slot(breed)].len()
    }

    /// Total number of live agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agents are live.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The distinct breeds with at least one live agent, in canonical
    /// order. The schedule shuffles this per tick.
    pub fn breeds_present(&self) -> SmallVec<[Breed; 3]> {
        Breed::ALL
            .into_iter()
            .filter(|&b| self.count(b) > 0)
            .collect()
    }

    /// A copied snapshot of the live ids of `breed`.
    ///
    /// Deliberately not a live view: births and deaths after the copy do
    /// not alter it, which is what keeps the current tick's activation
    /// order stable while the population mutates underneath it.
    pub fn snapshot(&self, breed: Breed) -> Vec<AgentId> {
        self.by_breed[breed_slot(breed)].iter().copied().collect()
    }

    /// Iterate over all live agents (registry order).
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }
}
