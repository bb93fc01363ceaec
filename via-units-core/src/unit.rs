//! Unit marker traits.

use crate::dimension::Dimension;
use crate::float::Float;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `NAME` is the type name shown by the `Name(value)` representation, e.g. `"Metres"`.
/// * `SYMBOL` is the short unit symbol, e.g. `"m"`.
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// Implementations are zero-sized marker types, normally generated with `#[derive(Unit)]`.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Name used in the representation string.
    const NAME: &'static str;

    /// Printable symbol.
    const SYMBOL: &'static str;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;
}

/// An SI base unit. Quantities in these units can be constructed as zero.
pub trait SiUnit: Unit {}

/// A unit whose quantities may be added, subtracted and negated.
///
/// Only quantities for which linear combination is physically meaningful carry this marker. No multiplicative
/// operators exist for any unit.
pub trait Accumulate: Unit {}

/// A non-SI unit with an exact conversion to exactly one SI base unit.
pub trait Convertible: Unit {
    /// The SI unit of the same dimension.
    type Base: SiUnit<Dim = Self::Dim>;

    /// Number of base units in one of this unit, e.g. `1852.0` for the nautical mile.
    const RATIO: f64;

    /// [`Self::RATIO`] in the precision `F`.
    #[inline]
    fn ratio<F: Float>() -> F {
        F::from_f64(Self::RATIO)
    }
}
