//! Per-breed behavior: the state transitions an agent applies when the
//! schedule activates it.
//!
//! Mobile agents share one activation shape: random move, metabolic
//! decrement, death check, feeding, reproduction. Grass patches only
//! regrow. Dispatch is a match on the closed [`AgentState`] enum.
//!
//! Every helper here re-checks liveness through the registry before
//! touching an agent: mid-tick removal by a predator is an expected
//! race between agents, recovered by skipping, never by aborting the
//! tick.

use rand::prelude::*;

use paddock_core::{AgentId, Breed, Pos};

use crate::agent::{Agent, AgentState, Sheep, Wolf};
use crate::report::StepReport;
use crate::world::World;

impl World {
    /// Activate one agent, dispatching on its breed.
    pub(crate) fn step_agent(&mut self, id: AgentId, report: &mut StepReport) {
        let breed = match self.registry.get(id) {
            Some(agent) => agent.breed(),
            None => {
                report.stale_skips += 1;
                return;
            }
        };
        match breed {
            Breed::Sheep => self.step_sheep(id, report),
            Breed::Wolf => self.step_wolf(id, report),
            Breed::GrassPatch => self.step_grass(id, report),
        }
    }

    fn step_sheep(&mut self, id: AgentId, report: &mut StepReport) {
        let Some(pos) = self.random_move(id) else {
            report.stale_skips += 1;
            return;
        };
        if self.metabolize(id) {
            self.despawn(id, report);
            return;
        }
        if self.config.grass {
            if let Some(patch) = self.grown_patch_at(pos) {
                if let Some(AgentState::Grass(p)) =
                    self.registry.get_mut(patch).map(Agent::state_mut)
                {
                    p.consume();
                }
                self.grazed.insert(patch);
                self.gain_energy(id, self.config.sheep_gain_from_food);
            }
        }
        self.maybe_reproduce(id, report);
    }

    fn step_wolf(&mut self, id: AgentId, report: &mut StepReport) {
        let Some(pos) = self.random_move(id) else {
            report.stale_skips += 1;
            return;
        };
        if self.metabolize(id) {
            self.despawn(id, report);
            return;
        }
        // One sheep per wolf per tick; the first id in the cell bucket
        // is arbitrary but deterministic under a fixed seed.
        if let Some(prey) = self.first_sheep_at(pos) {
            self.despawn(prey, report);
            self.gain_energy(id, self.config.wolf_gain_from_food);
        }
        self.maybe_reproduce(id, report);
    }

    fn step_grass(&mut self, id: AgentId, report: &mut StepReport) {
        // A patch eaten earlier this tick starts its countdown next
        // tick, mirroring the rule that newborns first act next tick.
        if self.grazed.contains(&id) {
            return;
        }
        if let Some(AgentState::Grass(patch)) = self.registry.get_mut(id).map(Agent::state_mut) {
            if patch.grow_tick() {
                report.regrown += 1;
            }
        }
    }

    // ── Shared mobile-agent steps ───────────────────────────────

    /// Move to a uniformly chosen neighbor cell (excluding the current
    /// cell), honoring the configured movement topology. Returns the
    /// landing cell, or `None` for a stale reference.
    fn random_move(&mut self, id: AgentId) -> Option<Pos> {
        let pos = self.grid.position(id)?;
        let neighborhood = self.grid.torus().neighbors(pos, self.config.moore, false);
        let target = *neighborhood
            .choose(&mut self.rng)
            .expect("torus neighborhood is never empty");
        let landed = self.grid.move_to(id, target).ok()?;
        if let Some(agent) = self.registry.get_mut(id) {
            agent.set_pos(landed);
        }
        Some(landed)
    }

    /// Apply the per-tick energy cost. Returns `true` if the agent is
    /// now dead (energy at or below zero).
    fn metabolize(&mut self, id: AgentId) -> bool {
        match self.registry.get_mut(id).and_then(Agent::energy_mut) {
            Some(energy) => {
                *energy -= 1;
                *energy <= 0
            }
            None => false,
        }
    }

    fn gain_energy(&mut self, id: AgentId, amount: i64) {
        if let Some(energy) = self.registry.get_mut(id).and_then(Agent::energy_mut) {
            *energy += amount;
        }
    }

    /// With the breed's configured probability, spawn a child of the
    /// same breed at the parent's cell, carrying the configured initial
    /// energy. The child joins the registry only — it is in no current
    /// snapshot and first acts next tick.
    fn maybe_reproduce(&mut self, id: AgentId, report: &mut StepReport) {
        let Some(agent) = self.registry.get(id) else {
            return;
        };
        let (probability, child) = match agent.breed() {
            Breed::Sheep => (
                self.config.sheep_reproduce,
                AgentState::Sheep(Sheep {
                    energy: self.config.sheep_initial_energy,
                }),
            ),
            Breed::Wolf => (
                self.config.wolf_reproduce,
                AgentState::Wolf(Wolf {
                    energy: self.config.wolf_initial_energy,
                }),
            ),
            Breed::GrassPatch => return,
        };
        let pos = agent.pos();
        if self.rng.random_bool(probability) {
            self.spawn(child, pos);
            report.births += 1;
        }
    }

    /// Remove an agent from both the grid and the registry, same tick.
    ///
    /// A missing grid entry is a stale reference: tallied and recovered,
    /// never propagated.
    pub(crate) fn despawn(&mut self, id: AgentId, report: &mut StepReport) {
        if self.grid.remove(id).is_err() {
            report.stale_skips += 1;
        }
        if self.registry.remove(id).is_some() {
            report.deaths += 1;
        }
    }

    // ── Cell queries ────────────────────────────────────────────

    /// The fully-grown grass patch at `pos`, if any. Cells hold at most
    /// one patch by construction.
    fn grown_patch_at(&self, pos: Pos) -> Option<AgentId> {
        self.grid.contents(pos).iter().copied().find(|&id| {
            self.registry
                .get(id)
                .and_then(Agent::grass)
                .is_some_and(|p| p.fully_grown)
        })
    }

    /// The first sheep in the cell bucket at `pos`, if any.
    fn first_sheep_at(&self, pos: Pos) -> Option<AgentId> {
        self.grid.contents(pos).iter().copied().find(|&id| {
            self.registry
                .get(id)
                .is_some_and(|agent| agent.breed() == Breed::Sheep)
        })
    }
}
