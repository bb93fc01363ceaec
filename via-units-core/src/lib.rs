//! Core type system for strongly typed SI and navigation units.
//!
//! `via-units-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`].
//! - A value tagged with a unit is a [`Quantity<U, F>`], backed by an `f32` or `f64` magnitude.
//! - SI units ([`SiUnit`]) can be constructed as zero; accumulative units ([`Accumulate`]) support `+`, `-`,
//!   unary `-`, `+=` and `-=`; alternate units ([`Convertible`]) convert to and from their SI base unit.
//!
//! Most users should depend on `via-units` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of quantities (metres vs kelvin vs nautical miles, …).
//! - Explicit, auditable conversions between aviation units and SI through named constants.
//! - Uniform IEEE-754 semantics: NaN never equals itself and is unordered against everything.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis: there is no unit multiplication or division, and no scalar scaling.
//! - Integer or fixed-point magnitudes.
//! - Parsing quantities from strings.
//!
//! # Quick start
//!
//! ```rust
//! use via_units_core::non_si::NauticalMiles;
//! use via_units_core::si::Metres;
//!
//! let nm = NauticalMiles::new(1.0);
//! let m: Metres = nm.to_base();
//! assert_eq!(m.value(), 1852.0);
//! assert_eq!(m.debug_repr(), "Metres(1852.000000)");
//! assert_eq!(format!("{}", m), "1852");
//! ```
//!
//! Quantities of different units never mix:
//!
//! ```compile_fail
//! use via_units_core::si::{Kelvin, Metres};
//!
//! let _ = Metres::new(1.0) + Kelvin::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `via-units-core` without `std`. The crate still needs `alloc` for
//! [`Quantity::debug_repr`].
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U, F>`; serialization is the raw magnitude only, or
//!   `{"value", "unit"}` through [`serde_with_unit`].
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Conversions and
//! arithmetic are pure floating-point computations; they follow IEEE-754 behavior (NaN and infinities propagate).

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod float;
mod macros;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use float::Float;
pub use quantity::Quantity;
pub use unit::{Accumulate, Convertible, SiUnit, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules.
///
/// These are defined in `via-units-core` so they can implement conversion traits without running into Rust's
/// orphan rules.
pub mod units;

pub use units::non_si;
pub use units::si;
