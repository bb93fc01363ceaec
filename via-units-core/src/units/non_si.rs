//! Non-SI units used in aviation and navigation.
//!
//! Each unit converts to and from exactly one SI base unit through a named constant:
//!
//! - **Nautical mile**: exactly `1852 m` (ICAO Annex 5, Table 3-3).
//! - **Foot**: exactly `0.3048 m` (ICAO Annex 5, Table 3-3).
//! - **Knot**: one nautical mile per hour, `1852 / 3600 m/s`.
//!
//! Conversions are explicit: there is no arithmetic on these units, and no operator mixes them with SI quantities.
//!
//! ```rust
//! use via_units_core::non_si::{Feet, NauticalMiles};
//! use via_units_core::si::Metres;
//!
//! let altitude = Feet::new(10_000.0);
//! let metres: Metres = altitude.into();
//! assert_eq!(metres.value(), 3048.0);
//!
//! let range = NauticalMiles::from_base(Metres::new(3704.0));
//! assert_eq!(range.value(), 2.0);
//! ```
//!
//! ```compile_fail
//! use via_units_core::non_si::NauticalMiles;
//! use via_units_core::si::Metres;
//!
//! let _ = Metres::new(1.0) + NauticalMiles::new(1.0);
//! ```

use crate::units::si::{Length, Metre, MetrePerSecond, Metres, MetresPerSecond, Speed};
use crate::{Convertible, Float, Quantity};
use via_units_derive::Unit;

/// The length of a nautical mile in metres.
///
/// See [`metres_per_nautical_mile`] for the value in another precision.
pub const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;

/// The length of a foot in metres.
///
/// See [`metres_per_foot`] for the value in another precision.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// Metres per second in one knot (one nautical mile per hour).
///
/// See [`metres_per_second_per_knot`] for the value in another precision.
pub const METRES_PER_SECOND_PER_KNOT: f64 = METRES_PER_NAUTICAL_MILE / 3600.0;

/// [`METRES_PER_NAUTICAL_MILE`] in precision `F`.
///
/// ```rust
/// use via_units_core::non_si::metres_per_nautical_mile;
/// assert_eq!(metres_per_nautical_mile::<f32>(), 1852.0_f32);
/// ```
#[inline]
pub fn metres_per_nautical_mile<F: Float>() -> F {
    NauticalMile::ratio()
}

/// [`METRES_PER_FOOT`] in precision `F`.
#[inline]
pub fn metres_per_foot<F: Float>() -> F {
    Foot::ratio()
}

/// [`METRES_PER_SECOND_PER_KNOT`] in precision `F`.
#[inline]
pub fn metres_per_second_per_knot<F: Float>() -> F {
    Knot::ratio()
}

/// International nautical mile.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "NauticalMiles", symbol = "NM", dimension = Length, base = Metre, ratio = METRES_PER_NAUTICAL_MILE)]
pub struct NauticalMile;
/// A length measured in nautical miles.
pub type NauticalMiles<F = f64> = Quantity<NauticalMile, F>;

/// International foot.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "Feet", symbol = "ft", dimension = Length, base = Metre, ratio = METRES_PER_FOOT)]
pub struct Foot;
/// A length measured in feet.
pub type Feet<F = f64> = Quantity<Foot, F>;

/// Knot.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(name = "Knots", symbol = "kt", dimension = Speed, base = MetrePerSecond, ratio = METRES_PER_SECOND_PER_KNOT)]
pub struct Knot;
/// A speed measured in knots.
pub type Knots<F = f64> = Quantity<Knot, F>;

crate::impl_base_conversions!(
    NauticalMile => Metre,
    Foot => Metre,
    Knot => MetrePerSecond,
);

impl<F: Float> NauticalMiles<F> {
    /// Converts to metres.
    #[inline]
    pub fn to_metres(&self) -> Metres<F> {
        self.to_base()
    }
}

impl<F: Float> Feet<F> {
    /// Converts to metres.
    #[inline]
    pub fn to_metres(&self) -> Metres<F> {
        self.to_base()
    }
}

impl<F: Float> Knots<F> {
    /// Converts to metres per second.
    #[inline]
    pub fn to_metres_per_second(&self) -> MetresPerSecond<F> {
        self.to_base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq, relative_eq};
    use proptest::prelude::*;

    fn check_traits<U: Convertible>(name: &str) {
        let one = Quantity::<U>::new(1.0);
        let minus_one = Quantity::<U>::new(-1.0);

        assert_eq!(one, one);
        assert!(minus_one < one);
        assert!(minus_one <= one);

        assert!(minus_one != one);
        assert!(one > minus_one);
        assert!(one >= minus_one);

        assert_eq!(one.debug_repr(), format!("{}(1.000000)", name));
        assert_eq!(format!("{}", minus_one), "-1");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Nautical miles
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn nautical_miles_traits() {
        check_traits::<NauticalMile>("NauticalMiles");
    }

    #[test]
    fn nautical_miles_conversion() {
        let one_nm = NauticalMiles::new(1.0);

        let metres = one_nm.to_metres();
        assert_eq!(metres.value(), METRES_PER_NAUTICAL_MILE);
        assert_eq!(metres.value(), 1852.0);

        let result = NauticalMiles::from_base(metres);
        assert_eq!(result.value(), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Feet
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn feet_traits() {
        check_traits::<Foot>("Feet");
    }

    #[test]
    fn feet_conversion() {
        let one_ft = Feet::new(1.0);

        let metres = one_ft.to_metres();
        assert_eq!(metres.value(), METRES_PER_FOOT);
        assert_eq!(metres.value(), 0.3048);

        let result = Feet::from_base(Metres::new(0.3048));
        assert_eq!(result.value(), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Knots
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn knots_traits() {
        check_traits::<Knot>("Knots");
    }

    #[test]
    fn knots_conversion() {
        let one_kt = Knots::new(1.0);

        let metres_per_second = one_kt.to_metres_per_second();
        assert_eq!(metres_per_second.value(), METRES_PER_SECOND_PER_KNOT);
        assert_relative_eq!(metres_per_second.value(), 0.514_444, max_relative = 1e-6);

        let result = Knots::from_base(metres_per_second);
        assert_eq!(result.value(), 1.0);
    }

    #[test]
    fn knots_from_rounded_literal_is_close_but_not_exact() {
        let result = Knots::from_base(MetresPerSecond::new(0.514_444));
        assert_abs_diff_eq!(result.value(), 1.0, epsilon = 1e-6);
        assert!(result.value() < 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // From conversions and precision
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_impls_match_explicit_conversions() {
        let nm = NauticalMiles::new(2.5);
        let metres: Metres = nm.into();
        assert_eq!(metres, nm.to_base());

        let back: NauticalMiles = metres.into();
        assert_eq!(back, nm);

        let speed: MetresPerSecond = Knots::new(120.0).into();
        assert_eq!(speed, Knots::new(120.0).to_base());
    }

    #[test]
    fn ratio_in_single_precision() {
        assert_eq!(Foot::ratio::<f32>(), 0.3048_f32);
        assert_eq!(NauticalMile::ratio::<f32>(), 1852.0_f32);
        assert_eq!(Knot::ratio::<f64>(), METRES_PER_SECOND_PER_KNOT);
    }

    #[test]
    fn constants_in_either_precision() {
        assert_eq!(metres_per_nautical_mile::<f64>(), METRES_PER_NAUTICAL_MILE);
        assert_eq!(metres_per_foot::<f64>(), METRES_PER_FOOT);
        assert_eq!(metres_per_second_per_knot::<f64>(), METRES_PER_SECOND_PER_KNOT);

        assert_eq!(metres_per_nautical_mile::<f32>(), 1852.0_f32);
        assert_eq!(metres_per_foot::<f32>(), 0.3048_f32);
        assert_eq!(metres_per_second_per_knot::<f32>(), (1852.0 / 3600.0) as f32);
    }

    #[test]
    fn converted_values_display_with_six_significant_digits() {
        assert_eq!(Knots::<f64>::new(1.0).to_base().to_string(), "0.514444");
        assert_eq!(NauticalMiles::<f64>::new(1.0 / 3.0).to_string(), "0.333333");
        assert_eq!(NauticalMiles::<f64>::new(1.0 / 3.0).to_metres().to_string(), "617.333");
        assert_eq!(Feet::<f64>::new(35_000.0).to_metres().to_string(), "10668");
        assert_eq!(Knots::<f32>::new(1.0).to_base().to_string(), "0.514444");
    }

    #[test]
    fn single_precision_conversion() {
        let ft = Feet::<f32>::new(1.0);
        assert_eq!(ft.to_metres().value(), 0.3048_f32);
        assert_eq!(Feet::<f32>::from_base(Metres::<f32>::new(0.3048)).value(), 1.0);

        let kt = Knots::<f32>::new(1.0);
        assert_relative_eq!(kt.to_metres_per_second().value(), 0.514_444_f32, max_relative = 1e-5);
    }

    #[test]
    fn nan_survives_conversion() {
        assert!(Feet::<f64>::NAN.to_metres().value().is_nan());
        assert!(Knots::from_base(MetresPerSecond::<f64>::NAN) != Knots::<f64>::NAN);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_metres_nautical_miles(m in -1e9..1e9f64) {
            let back = NauticalMiles::from_base(Metres::new(m)).to_metres();
            prop_assert!(relative_eq!(back.value(), m, max_relative = 1e-15));
        }

        #[test]
        fn prop_roundtrip_feet_metres(f in -1e9..1e9f64) {
            let back = Feet::from_base(Feet::new(f).to_metres());
            prop_assert!(relative_eq!(back.value(), f, max_relative = 1e-15));
        }

        #[test]
        fn prop_roundtrip_knots_metres_per_second(v in -1e6..1e6f64) {
            let back = Knots::from_base(Knots::new(v).to_metres_per_second());
            prop_assert!(relative_eq!(back.value(), v, max_relative = 1e-15));
        }

        #[test]
        fn prop_conversion_preserves_order(a in -1e9..1e9f64, b in -1e9..1e9f64) {
            let (x, y) = (Feet::new(a), Feet::new(b));
            prop_assert_eq!(x < y, x.to_metres() < y.to_metres());
        }
    }
}
