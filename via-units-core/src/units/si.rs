//! SI base quantities.
//!
//! Every unit here is the canonical SI unit of its dimension and supports [`Quantity::zero`].
//!
//! Quantities that are meaningfully summed (length, speed, temperature, mass) also support `+`, `-`, unary `-`,
//! `+=` and `-=`. Acceleration, pressure and density are comparison-only: they are read as instantaneous values and
//! have no arithmetic.
//!
//! ```rust
//! use via_units_core::si::Metres;
//!
//! let mut leg = Metres::new(1200.0);
//! leg += Metres::new(300.0);
//! assert_eq!(leg, Metres::new(1500.0));
//! assert_eq!(format!("{}", -leg), "-1500");
//! ```
//!
//! Comparison-only quantities have no `+`:
//!
//! ```compile_fail
//! use via_units_core::si::Pascals;
//!
//! let _ = Pascals::new(101_325.0) + Pascals::new(1.0);
//! ```

use crate::{Dimension, Quantity};
use via_units_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Dimension tag for speed.
pub enum Speed {}
impl Dimension for Speed {}

/// Dimension tag for acceleration.
pub enum Acceleration {}
impl Dimension for Acceleration {}

/// Dimension tag for thermodynamic temperature.
pub enum Temperature {}
impl Dimension for Temperature {}

/// Dimension tag for pressure.
pub enum Pressure {}
impl Dimension for Pressure {}

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {}

/// Dimension tag for density.
pub enum Density {}
impl Dimension for Density {}

/// Metre (SI base unit of length).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "Metres", symbol = "m", dimension = Length, accumulate = true)]
pub struct Metre;
/// A length measured in metres.
pub type Metres<F = f64> = Quantity<Metre, F>;

/// Metre per second.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "MetresPerSecond", symbol = "m/s", dimension = Speed, accumulate = true)]
pub struct MetrePerSecond;
/// A speed measured in metres per second.
pub type MetresPerSecond<F = f64> = Quantity<MetrePerSecond, F>;

/// Metre per second squared.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "MetresPerSecondSquared", symbol = "m/s^2", dimension = Acceleration)]
pub struct MetrePerSecondSquared;
/// An acceleration measured in metres per second squared.
pub type MetresPerSecondSquared<F = f64> = Quantity<MetrePerSecondSquared, F>;

/// Kelvin.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "Kelvin", symbol = "K", dimension = Temperature, accumulate = true)]
pub struct KelvinUnit;
/// A temperature measured in kelvin.
pub type Kelvin<F = f64> = Quantity<KelvinUnit, F>;

/// Pascal.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "Pascals", symbol = "Pa", dimension = Pressure)]
pub struct Pascal;
/// A pressure measured in pascals.
pub type Pascals<F = f64> = Quantity<Pascal, F>;

/// Kilogram.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "Kilograms", symbol = "kg", dimension = Mass, accumulate = true)]
pub struct Kilogram;
/// A mass measured in kilograms.
pub type Kilograms<F = f64> = Quantity<Kilogram, F>;

/// Kilogram per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "KilogramsPerCubicMetre", symbol = "kg/m^3", dimension = Density)]
pub struct KilogramPerCubicMetre;
/// A density measured in kilograms per cubic metre.
pub type KilogramsPerCubicMetre<F = f64> = Quantity<KilogramPerCubicMetre, F>;
