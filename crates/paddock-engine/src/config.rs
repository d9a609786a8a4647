//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a simulation
//! [`World`](crate::World). [`validate()`](WorldConfig::validate) checks
//! every parameter before any state is built; an invalid configuration
//! never produces a partially-initialized world.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
///
/// All are fatal at construction time: the simulation does not start.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `width` or `height` is zero, or exceeds the `i32` coordinate range.
    InvalidGrid {
        /// Description of the rejected dimensions.
        reason: String,
    },
    /// A probability parameter is outside `[0, 1]` (or NaN).
    ProbabilityOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An initial energy is below 1.
    ///
    /// Zero would spawn agents that die before ever acting; negative
    /// energy is meaningless outside the transient pre-death-check state.
    EnergyTooLow {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A food-gain parameter is negative.
    NegativeGain {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// `grass_regrowth_time` is zero.
    ZeroRegrowthTime,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => write!(f, "invalid grid: {reason}"),
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} = {value} is not a probability in [0, 1]")
            }
            Self::EnergyTooLow { name, value } => {
                write!(f, "{name} = {value} must be at least 1")
            }
            Self::NegativeGain { name, value } => {
                write!(f, "{name} = {value} must be non-negative")
            }
            Self::ZeroRegrowthTime => write!(f, "grass_regrowth_time must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── WorldConfig ────────────────────────────────────────────────────

/// Construction parameters for a [`World`](crate::World).
///
/// `Default` reproduces the reference model's parameter set. All
/// stochastic behavior derives from `seed`, so two worlds built from
/// identical configs evolve identically.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Number of sheep placed at world init.
    pub initial_sheep: u32,
    /// Number of wolves placed at world init.
    pub initial_wolves: u32,
    /// Probability that a seeded grass patch starts fully grown.
    pub initial_grown_grass: f64,
    /// Starting energy for sheep, both at init and at birth.
    pub sheep_initial_energy: i64,
    /// Starting energy for wolves, both at init and at birth.
    pub wolf_initial_energy: i64,
    /// Per-tick probability that a sheep spawns a lamb.
    pub sheep_reproduce: f64,
    /// Per-tick probability that a wolf spawns a cub.
    pub wolf_reproduce: f64,
    /// Energy a wolf gains from eating a sheep.
    pub wolf_gain_from_food: i64,
    /// Energy a sheep gains from eating a grown grass patch.
    pub sheep_gain_from_food: i64,
    /// Whether the grass subsystem exists at all.
    ///
    /// When `false`, no patches are seeded and sheep gain no energy
    /// from grazing. Predation is unaffected.
    pub grass: bool,
    /// Ticks for an eaten patch to regrow.
    pub grass_regrowth_time: u32,
    /// Fraction of cells seeded with a grass patch at init.
    pub grass_probability: f64,
    /// `true` for Moore (8-neighbor) movement, `false` for von Neumann.
    pub moore: bool,
    /// RNG seed. Identical seeds reproduce identical runs.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            initial_sheep: 100,
            initial_wolves: 50,
            initial_grown_grass: 0.5,
            sheep_initial_energy: 10,
            wolf_initial_energy: 10,
            sheep_reproduce: 0.04,
            wolf_reproduce: 0.05,
            wolf_gain_from_food: 20,
            sheep_gain_from_food: 4,
            grass: true,
            grass_regrowth_time: 30,
            grass_probability: 1.0,
            moore: true,
            seed: 42,
        }
    }
}

impl WorldConfig {
    /// Check every parameter, returning the first violation found.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`] for the full taxonomy. Checks run in field
    /// declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidGrid {
                reason: format!("{}x{} has a zero-sized axis", self.width, self.height),
            });
        }
        let max = i32::MAX as u32;
        if self.width > max || self.height > max {
            return Err(ConfigError::InvalidGrid {
                reason: format!("{}x{} exceeds the i32 coordinate range", self.width, self.height),
            });
        }
        for (name, value) in [
            ("initial_grown_grass", self.initial_grown_grass),
            ("sheep_reproduce", self.sheep_reproduce),
            ("wolf_reproduce", self.wolf_reproduce),
            ("grass_probability", self.grass_probability),
        ] {
            // NaN fails the range check too.
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        for (name, value) in [
            ("sheep_initial_energy", self.sheep_initial_energy),
            ("wolf_initial_energy", self.wolf_initial_energy),
        ] {
            if value < 1 {
                return Err(ConfigError::EnergyTooLow { name, value });
            }
        }
        for (name, value) in [
            ("sheep_gain_from_food", self.sheep_gain_from_food),
            ("wolf_gain_from_food", self.wolf_gain_from_food),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeGain { name, value });
            }
        }
        if self.grass_regrowth_time == 0 {
            return Err(ConfigError::ZeroRegrowthTime);
        }
        Ok(())
    }
}
