//! The simulation world: construction, the tick loop, and read access.

use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use paddock_core::{AgentId, Breed, IdAllocator, Pos, TickId};
use paddock_space::{MultiGrid, Torus};

use crate::agent::{Agent, AgentState, GrassPatch, Sheep, Wolf};
use crate::config::{ConfigError, WorldConfig};
use crate::registry::AgentRegistry;
use crate::report::StepReport;

/// A wolf-sheep-grass predation world.
///
/// Owns all simulation state: the grid, the registry, the id allocator,
/// and the RNG. Execution is single-threaded and turn-based — every
/// mutating method takes `&mut self`, one agent acts completely before
/// the next, and nothing suspends or blocks.
///
/// # Determinism
///
/// All stochastic choices draw from one seeded ChaCha8 RNG, so two
/// worlds built from identical configs produce identical runs. This is
/// what makes experiments reproducible and the scheduling tests exact.
///
/// # Example
///
/// ```
/// use paddock_engine::{World, WorldConfig};
///
/// let mut world = World::new(WorldConfig::default()).unwrap();
/// let report = world.run(10);
/// assert_eq!(report.tick.0, 10);
/// assert!(report.sheep > 0 || report.wolves > 0);
/// ```
pub struct World {
    pub(crate) config: WorldConfig,
    pub(crate) grid: MultiGrid,
    pub(crate) registry: AgentRegistry,
    pub(crate) ids: IdAllocator,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) tick: TickId,
    /// Patches eaten during the current tick. Their countdown starts on
    /// the next tick, so tick accounting does not depend on whether the
    /// grass pass happens to run before or after the sheep pass.
    pub(crate) grazed: IndexSet<AgentId>,
}

impl World {
    /// Build and populate a world from `config`.
    ///
    /// Seeding order is fixed (grass patches cell by cell, then sheep,
    /// then wolves) so that a given seed always produces the same
    /// initial state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is out of range; no
    /// partially-built world escapes.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        // Safety: validate() already checked the dimensions.
        let torus = Torus::new(config.width, config.height).expect("dimensions validated");
        let mut world = Self {
            grid: MultiGrid::new(torus),
            registry: AgentRegistry::new(),
            ids: IdAllocator::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: TickId(0),
            grazed: IndexSet::new(),
            config,
        };
        world.populate();
        Ok(world)
    }

    fn populate(&mut self) {
        let (w, h) = (self.config.width as i32, self.config.height as i32);
        if self.config.grass {
            for x in 0..w {
                for y in 0..h {
                    if !self.rng.random_bool(self.config.grass_probability) {
                        continue;
                    }
                    let grown = self.rng.random_bool(self.config.initial_grown_grass);
                    self.spawn(
                        AgentState::Grass(GrassPatch::new(grown, self.config.grass_regrowth_time)),
                        Pos::new(x, y),
                    );
                }
            }
        }
        for _ in 0..self.config.initial_sheep {
            let pos = self.random_cell();
            let energy = self.config.sheep_initial_energy;
            self.spawn(AgentState::Sheep(Sheep { energy }), pos);
        }
        for _ in 0..self.config.initial_wolves {
            let pos = self.random_cell();
            let energy = self.config.wolf_initial_energy;
            self.spawn(AgentState::Wolf(Wolf { energy }), pos);
        }
    }

    fn random_cell(&mut self) -> Pos {
        let x = self.rng.random_range(0..self.config.width) as i32;
        let y = self.rng.random_range(0..self.config.height) as i32;
        Pos::new(x, y)
    }

    /// Create an agent at `pos`, registering it on the grid and in the
    /// registry atomically. Used both at init and by reproduction.
    pub(crate) fn spawn(&mut self, state: AgentState, pos: Pos) -> AgentId {
        let id = self.ids.allocate();
        // Safety: callers pass in-bounds positions (validated dimensions
        // at init, a live parent's cell at reproduction) and the id is
        // fresh by construction.
        self.grid.place(id, pos).expect("spawn position in bounds");
        self.registry.add(Agent::new(id, pos, state));
        id
    }

    // ── The tick loop ───────────────────────────────────────────

    /// Advance exactly one tick.
    ///
    /// Activation order per tick: shuffle the breeds present at tick
    /// start; for each breed, copy and shuffle its live ids, then step
    /// each one that is still live when its turn comes. Agents removed
    /// earlier in the tick are skipped (tallied, never an error);
    /// agents born during the tick are not in any current snapshot and
    /// first act next tick. The tick is atomic from the caller's view —
    /// the returned report always describes a fully-applied tick.
    pub fn step(&mut self) -> StepReport {
        self.tick = self.tick.next();
        self.grazed.clear();
        let mut report = StepReport {
            tick: self.tick,
            ..StepReport::default()
        };

        let mut breeds = self.registry.breeds_present();
        breeds.shuffle(&mut self.rng);
        for breed in breeds {
            let mut snapshot = self.registry.snapshot(breed);
            snapshot.shuffle(&mut self.rng);
            for id in snapshot {
                if !self.registry.contains(id) {
                    // Removed earlier this tick (eaten); never re-stepped.
                    report.stale_skips += 1;
                    continue;
                }
                self.step_agent(id, &mut report);
            }
        }

        self.fill_census(&mut report);
        report
    }

    /// Advance `n` ticks and return the last tick's report.
    ///
    /// No early exit: the world keeps ticking even if a breed goes
    /// extinct. `run(0)` reports the current state without stepping.
    pub fn run(&mut self, n: u64) -> StepReport {
        let mut report = StepReport {
            tick: self.tick,
            ..StepReport::default()
        };
        self.fill_census(&mut report);
        for _ in 0..n {
            report = self.step();
        }
        report
    }

    fn fill_census(&self, report: &mut StepReport) {
        report.sheep = self.registry.count(Breed::Sheep);
        report.wolves = self.registry.count(Breed::Wolf);
        report.grown_grass = self.grown_grass_count();
    }

    // ── Read-only accessors ─────────────────────────────────────

    /// The current tick (0 before the first step).
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Live agents of `breed`. O(1).
    pub fn count(&self, breed: Breed) -> usize {
        self.registry.count(breed)
    }

    /// Fully-grown grass patches.
    pub fn grown_grass_count(&self) -> usize {
        self.registry
            .iter()
            .filter(|a| a.grass().is_some_and(|p| p.fully_grown))
            .count()
    }

    /// A live agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.registry.get(id)
    }

    /// All live agents, in registry order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.registry.iter()
    }

    /// The agent ids at a cell (wrapped), in bucket order.
    pub fn contents(&self, pos: Pos) -> &[AgentId] {
        self.grid.contents(pos)
    }

    /// The agents at a cell (wrapped). The per-cell view a renderer
    /// consumes.
    pub fn agents_at(&self, pos: Pos) -> impl Iterator<Item = &Agent> {
        self.grid
            .contents(pos)
            .iter()
            .filter_map(|&id| self.registry.get(id))
    }

    /// Where a live agent currently is, per the grid's index.
    pub fn position(&self, id: AgentId) -> Option<Pos> {
        self.grid.position(id)
    }
}
