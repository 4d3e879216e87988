//! # paceline-drivetrain: Gearing arithmetic
//!
//! Gear ratio and gear-development calculations for a bicycle drivetrain:
//! - [`Gear`]: chainring and cog teeth counts, `ratio` and `gear_inches`
//! - [`Wheel`]: rim diameter and tire width, `diameter` and `circumference`
//! - [`Diameter`]: the seam between them
//!
//! A gear computes its development against *anything* that reports a
//! diameter, not a concrete wheel. That keeps the arithmetic testable with
//! fixed-diameter doubles and leaves room for non-wheel diameter sources.
//!
//! # Example
//!
//! ```
//! use paceline_drivetrain::{Gear, Wheel};
//!
//! let gear = Gear::new(52, 11);
//! let wheel = Wheel::new(26.0, 1.5);
//!
//! assert!((gear.ratio() - 4.7272).abs() < 1e-3);
//! assert!((gear.gear_inches(&wheel) - 137.0909).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

/// A source of a diameter measurement, in inches.
///
/// [`Gear::gear_inches`] accepts any implementor, so gears depend on the
/// measurement, not on [`Wheel`] itself.
pub trait Diameter {
    /// Diameter in inches.
    fn diameter(&self) -> f64;
}

// ============================================================================
// Wheel - Copy (two f64 fields)
// ============================================================================

/// A wheel described by rim diameter and tire width, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    rim: f64,
    tire: f64,
}

impl Wheel {
    /// Creates a wheel from rim diameter and tire width.
    pub fn new(rim: f64, tire: f64) -> Self {
        debug_assert!(rim >= 0.0 && tire >= 0.0, "wheel dimensions are non-negative");
        Self { rim, tire }
    }

    /// Rim diameter in inches.
    pub fn rim(&self) -> f64 {
        self.rim
    }

    /// Tire width in inches.
    pub fn tire(&self) -> f64 {
        self.tire
    }

    /// Rolling circumference in inches.
    pub fn circumference(&self) -> f64 {
        self.diameter() * std::f64::consts::PI
    }
}

impl Diameter for Wheel {
    /// The tire goes around the rim twice.
    fn diameter(&self) -> f64 {
        self.rim + self.tire * 2.0
    }
}

// ============================================================================
// Gear - Copy (two teeth counts)
// ============================================================================

/// A drivetrain gear: chainring and cog teeth counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gear {
    chainring: u32,
    cog: u32,
}

impl Gear {
    /// Chainring teeth fitted when unspecified.
    pub const DEFAULT_CHAINRING: u32 = 40;

    /// Cog teeth fitted when unspecified.
    pub const DEFAULT_COG: u32 = 18;

    /// Creates a gear from teeth counts.
    ///
    /// A zero-tooth cog is a programming error; debug builds assert on it.
    pub fn new(chainring: u32, cog: u32) -> Self {
        debug_assert!(cog > 0, "cog must have at least one tooth");
        Self { chainring, cog }
    }

    /// Chainring teeth count.
    pub fn chainring(&self) -> u32 {
        self.chainring
    }

    /// Cog teeth count.
    pub fn cog(&self) -> u32 {
        self.cog
    }

    /// Chainring-to-cog ratio: pedal revolutions to wheel revolutions.
    pub fn ratio(&self) -> f64 {
        f64::from(self.chainring) / f64::from(self.cog)
    }

    /// Gear development against the given diameter source.
    pub fn gear_inches(&self, wheel: &impl Diameter) -> f64 {
        self.ratio() * wheel.diameter()
    }
}

impl Default for Gear {
    /// The fallback gearing: 40 chainring teeth, 18 cog teeth.
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHAINRING, Self::DEFAULT_COG)
    }
}
