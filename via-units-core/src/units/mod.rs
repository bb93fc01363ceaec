//! Predefined unit modules.
//!
//! ## Modules
//!
//! - [`si`]: SI base quantities (length, speed, acceleration, temperature, pressure, mass, density).
//! - [`non_si`]: aviation units (nautical mile, foot, knot) with exact conversions to their SI base units.

pub mod non_si;
pub mod si;
