//! Dimension marker trait.

/// Marker trait for **dimensions** (Length, Speed, Mass …).
///
/// A *dimension* is the category that distinguishes metres from kelvin. Each dimension is modelled as an empty enum:
///
/// ```rust
/// use via_units_core::Dimension;
/// pub enum Luminosity {}
/// impl Dimension for Luminosity {}
/// ```
///
/// Units only convert into units of the same dimension, so `Feet` can name `Metres` as its base but never
/// `MetresPerSecond`.
pub trait Dimension {}
