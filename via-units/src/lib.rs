//! Strongly typed SI and aviation units.
//!
//! `via-units` is the user-facing crate in this workspace. It re-exports the full API from `via-units-core` plus
//! every predefined unit at the crate root.
//!
//! A value is always a `Quantity<U, F>`, where `U` is a zero-sized type describing the unit and `F` is `f64`
//! (default) or `f32`. Units are erased at compile time; at run time a quantity is just its magnitude.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible quantities (you can't add metres to kelvin, or metres to nautical miles).
//! - Makes conversion between aviation and SI units explicit (`to_base`, `from_base`) and exact where the
//!   definition allows.
//! - Gives every unit the same comparison and formatting behaviour.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis: no `Metres / Seconds`, no scalar scaling.
//! - Integer or fixed-point magnitudes.
//! - Parsing quantities from strings.
//!
//! # Quick start
//!
//! ```rust
//! use via_units::{Feet, Knots, Metres, MetresPerSecond};
//!
//! let altitude = Feet::new(35_000.0);
//! let metres: Metres = altitude.to_base();
//! assert_eq!(metres.debug_repr(), "Metres(10668.000000)");
//!
//! let ground_speed = Knots::from_base(MetresPerSecond::new(250.0));
//! assert!(ground_speed > Knots::new(485.0));
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use via_units::{Kelvin, Metres};
//!
//! let _ = Metres::new(1.0) + Kelvin::new(1.0);
//! ```
//!
//! ```compile_fail
//! use via_units::Feet;
//!
//! let _ = Feet::new(1.0) + Feet::new(1.0); // alternate units are comparison-only
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `via-units-core`.
//! - `serde`: enables `serde` support for `Quantity<U, F>`.
//! - `python`: builds the `via_units` Python module (see [`python`]).
//! - `extension-module`: links as a Python extension module; implies `python`.
//!
//! # Panics and errors
//!
//! This crate does not define an error type. All operations are total over their floating-point domain.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "python"), forbid(unsafe_code))]

pub use via_units_core::*;

/// Derive macro used by `via-units-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and related traits, so it is intended for use inside
/// `via-units-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use via_units_derive::Unit;

pub use via_units_core::units::non_si;
pub use via_units_core::units::si;

pub use via_units_core::units::non_si::*;
pub use via_units_core::units::si::*;

#[cfg(feature = "python")]
pub mod python;
