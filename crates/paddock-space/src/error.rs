//! Error types for grid construction and agent placement.

use paddock_core::{AgentId, Pos};
use std::error::Error;
use std::fmt;

/// Errors from [`Torus`](crate::Torus) construction and
/// [`MultiGrid`](crate::MultiGrid) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is zero.
    EmptyGrid,
    /// A grid dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Axis name (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// `place` was called with a position outside the declared bounds.
    ///
    /// Placement takes literal coordinates, not offsets, so it does not
    /// wrap; wrap arithmetic makes this unreachable for `move_to`.
    OutOfBounds {
        /// The rejected position.
        pos: Pos,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The agent is already somewhere on the grid.
    AlreadyPlaced {
        /// The offending agent.
        agent: AgentId,
    },
    /// The agent is not on the grid.
    ///
    /// Expected mid-tick when a predator has already removed the agent;
    /// callers recover by skipping, never by aborting the tick.
    NotPresent {
        /// The missing agent.
        agent: AgentId,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be non-zero"),
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} exceeds i32 coordinate range")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} outside [0, {width}) x [0, {height})")
            }
            Self::AlreadyPlaced { agent } => {
                write!(f, "agent {agent} is already placed on the grid")
            }
            Self::NotPresent { agent } => write!(f, "agent {agent} is not on the grid"),
        }
    }
}

impl Error for GridError {}
