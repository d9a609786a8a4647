//! Positional index: which agents occupy which cell.

use crate::error::GridError;
use crate::torus::Torus;
use indexmap::IndexMap;
use paddock_core::{AgentId, Pos};
use smallvec::SmallVec;

/// Per-cell agent bucket. Most cells hold a grass patch plus at most a
/// couple of mobile agents, so four slots inline covers the common case.
type Cell = SmallVec<[AgentId; 4]>;

/// A torus-shaped index from cells to the agent ids occupying them.
///
/// The grid holds *ids only* — agent state lives in the engine's
/// registry, which owns agent lifetime. The engine keeps the two in
/// lockstep: every create goes through [`place`](MultiGrid::place),
/// every move through [`move_to`](MultiGrid::move_to), every death
/// through [`remove`](MultiGrid::remove). No id ever occupies more than
/// one cell.
///
/// Cell buckets are unordered multisets as far as the contract goes;
/// the concrete order is deterministic for a given operation sequence,
/// which is what makes "first sheep in the cell" a reproducible
/// predation tie-break under a fixed seed.
#[derive(Clone, Debug)]
pub struct MultiGrid {
    torus: Torus,
    cells: Vec<Cell>,
    /// Reverse index: where each placed agent currently is.
    positions: IndexMap<AgentId, Pos>,
}

impl MultiGrid {
    /// Create an empty grid over the given torus.
    pub fn new(torus: Torus) -> Self {
        Self {
            torus,
            cells: vec![Cell::new(); torus.cell_count()],
            positions: IndexMap::new(),
        }
    }

    /// The underlying topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Number of agents currently placed.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no agents are placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Insert an agent at `pos`.
    ///
    /// Placement takes literal coordinates and does not wrap: an
    /// out-of-bounds `pos` is a caller bug, not a movement offset.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `pos` is outside the declared
    /// bounds; [`GridError::AlreadyPlaced`] if `id` is already on the
    /// grid.
    pub fn place(&mut self, id: AgentId, pos: Pos) -> Result<(), GridError> {
        if !self.torus.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.torus.width(),
                height: self.torus.height(),
            });
        }
        if self.positions.contains_key(&id) {
            return Err(GridError::AlreadyPlaced { agent: id });
        }
        let idx = self.torus.index(pos);
        self.cells[idx].push(id);
        self.positions.insert(id, pos);
        Ok(())
    }

    /// Move an agent to `pos` (wrapped onto the torus).
    ///
    /// O(1) amortized: one bucket swap-remove, one bucket push.
    ///
    /// # Errors
    ///
    /// [`GridError::NotPresent`] if `id` is not on the grid.
    pub fn move_to(&mut self, id: AgentId, pos: Pos) -> Result<Pos, GridError> {
        let old = *self
            .positions
            .get(&id)
            .ok_or(GridError::NotPresent { agent: id })?;
        let new = self.torus.wrap(pos);
        if new != old {
            Self::take_from_cell(&mut self.cells[self.torus.index(old)], id);
            let idx = self.torus.index(new);
            self.cells[idx].push(id);
            self.positions.insert(id, new);
        }
        Ok(new)
    }

    /// Erase an agent from its current cell.
    ///
    /// # Errors
    ///
    /// [`GridError::NotPresent`] if `id` is not on the grid. Callers
    /// treat this as a recoverable stale reference, not a tick-fatal
    /// condition.
    pub fn remove(&mut self, id: AgentId) -> Result<Pos, GridError> {
        let pos = self
            .positions
            .swap_remove(&id)
            .ok_or(GridError::NotPresent { agent: id })?;
        Self::take_from_cell(&mut self.cells[self.torus.index(pos)], id);
        Ok(pos)
    }

    /// The agents currently at `pos` (wrapped), in bucket order.
    pub fn contents(&self, pos: Pos) -> &[AgentId] {
        let pos = self.torus.wrap(pos);
        &self.cells[self.torus.index(pos)]
    }

    /// Where `id` currently is, if placed.
    pub fn position(&self, id: AgentId) -> Option<Pos> {
        self.positions.get(&id).copied()
    }

    fn take_from_cell(cell: &mut Cell, id: AgentId) {
        // positions and cells are updated together, so the id is present.
        if let Some(i) = cell.iter().position(|&a| a == id) {
            cell.swap_remove(i);
        }
    }
}
