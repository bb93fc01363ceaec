//! Quantity type and its implementations.

use crate::float::Float;
use crate::unit::{Accumulate, Convertible, SiUnit, Unit};
use alloc::format;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U, F>` wraps a single floating-point magnitude of precision `F` (`f64` unless stated otherwise)
/// together with phantom type information about its unit `U`. Operators are only defined between two quantities of
/// the same unit and precision, so mixing lengths and temperatures is a compile error.
///
/// # Examples
///
/// ```rust
/// use via_units_core::{Dimension, Quantity, SiUnit, Unit};
///
/// pub enum Luminosity {}
/// impl Dimension for Luminosity {}
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub enum Candela {}
/// impl Unit for Candela {
///     const NAME: &'static str = "Candelas";
///     const SYMBOL: &'static str = "cd";
///     type Dim = Luminosity;
/// }
/// impl SiUnit for Candela {}
///
/// let x = Quantity::<Candela>::new(5.0);
/// assert_eq!(x.value(), 5.0);
/// assert_eq!(x.debug_repr(), "Candelas(5.000000)");
/// assert_eq!(Quantity::<Candela>::zero().value(), 0.0);
/// ```
#[derive(Clone, Copy)]
pub struct Quantity<U: Unit, F: Float = f64>(F, PhantomData<U>);

impl<U: Unit, F: Float> Quantity<U, F> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use via_units_core::si::Metres;
    /// assert!(Metres::<f64>::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(F::NAN);

    /// Creates a NaN quantity. Equivalent to [`Self::NAN`].
    #[inline]
    pub const fn nan() -> Self {
        Self::NAN
    }

    /// Creates a new quantity with the given magnitude.
    ///
    /// No validation is performed: NaN and infinities are accepted and propagate through arithmetic.
    ///
    /// ```rust
    /// use via_units_core::si::Kelvin;
    /// let t = Kelvin::new(273.15);
    /// assert_eq!(t.value(), 273.15);
    /// ```
    #[inline]
    pub const fn new(value: F) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw magnitude.
    #[inline]
    pub const fn value(&self) -> F {
        self.0
    }

    /// Returns the representation `Name(magnitude)` with six digits after the decimal point.
    ///
    /// ```rust
    /// use via_units_core::non_si::Knots;
    /// assert_eq!(Knots::new(250.0).debug_repr(), "Knots(250.000000)");
    /// ```
    pub fn debug_repr(&self) -> String {
        Repr::new(U::NAME, self.0).to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SI base units
// ─────────────────────────────────────────────────────────────────────────────

impl<U: SiUnit, F: Float> Quantity<U, F> {
    /// The zero quantity.
    pub const ZERO: Self = Self::new(F::ZERO);

    /// Creates a quantity with magnitude `0`.
    ///
    /// ```rust
    /// use via_units_core::si::Kilograms;
    /// assert_eq!(Kilograms::<f64>::zero().value(), 0.0);
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<U: SiUnit, F: Float> Default for Quantity<U, F> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion to and from the base unit
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Convertible, F: Float> Quantity<U, F> {
    /// Converts a quantity in the base unit into this unit: `base / RATIO`.
    ///
    /// ```rust
    /// use via_units_core::non_si::NauticalMiles;
    /// use via_units_core::si::Metres;
    ///
    /// let nm = NauticalMiles::from_base(Metres::new(1852.0));
    /// assert_eq!(nm.value(), 1.0);
    /// ```
    #[inline]
    pub fn from_base(base: Quantity<U::Base, F>) -> Self {
        Self::new(base.value() / U::ratio::<F>())
    }

    /// Converts this quantity into the base unit: `value * RATIO`.
    ///
    /// ```rust
    /// use via_units_core::non_si::Feet;
    /// assert_eq!(Feet::new(1.0).to_base().value(), 0.3048);
    /// ```
    #[inline]
    pub fn to_base(&self) -> Quantity<U::Base, F> {
        Quantity::new(self.0 * U::ratio::<F>())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Accumulation
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Accumulate, F: Float> Quantity<U, F> {
    /// Adds `other` in place and returns `self`, so that updates can be chained.
    ///
    /// ```rust
    /// use via_units_core::si::Metres;
    ///
    /// let mut total = Metres::new(1.0);
    /// total.accumulate(Metres::new(2.0)).deplete(Metres::new(0.5));
    /// assert_eq!(total.value(), 2.5);
    /// ```
    #[inline]
    pub fn accumulate(&mut self, other: Self) -> &mut Self {
        self.0 += other.0;
        self
    }

    /// Subtracts `other` in place and returns `self`.
    #[inline]
    pub fn deplete(&mut self, other: Self) -> &mut Self {
        self.0 -= other.0;
        self
    }
}

impl<U: Accumulate, F: Float> Add for Quantity<U, F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Accumulate, F: Float> AddAssign for Quantity<U, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.accumulate(rhs);
    }
}

impl<U: Accumulate, F: Float> Sub for Quantity<U, F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Accumulate, F: Float> SubAssign for Quantity<U, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.deplete(rhs);
    }
}

impl<U: Accumulate, F: Float> Neg for Quantity<U, F> {
    type Output = Self;
    /// Unary minus on the magnitude. This flips the sign bit, so negating `+0.0` yields `-0.0` (whereas `0 - x`
    /// would yield `+0.0`).
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, F: Float> PartialEq for Quantity<U, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit, F: Float> PartialOrd for Quantity<U, F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Formats `name(magnitude)` with a fixed six-digit fraction.
///
/// Shared by every unit so that `Debug` and [`Quantity::debug_repr`] cannot drift apart.
struct Repr<'a, F> {
    name: &'a str,
    magnitude: F,
}

impl<'a, F: Float> Repr<'a, F> {
    fn new(name: &'a str, magnitude: F) -> Self {
        Self { name, magnitude }
    }
}

impl<F: Float> Display for Repr<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.6})", self.name, self.magnitude)
    }
}

impl<U: Unit, F: Float> Debug for Quantity<U, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&Repr::new(U::NAME, self.0), f)
    }
}

/// Significant digits of the general notation.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats a magnitude in general notation, like `printf("%g")` and default C++ streams.
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] significant digits and trailing zeros are trimmed. Exponent form
/// (`1e+07`, `2.5e-05`) is used when the decimal exponent is below `-4` or at least `SIGNIFICANT_DIGITS`.
struct General<F>(F);

impl<F: Float> Display for General<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            // inf, -inf and NaN
            return if scientific == "NaN" {
                f.pad("nan")
            } else {
                f.pad(&scientific)
            };
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            let text = format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs());
            f.pad(&text)
        } else {
            let fixed = format!("{:.*}", (SIGNIFICANT_DIGITS - 1 - exponent) as usize, value);
            f.pad(trim_fraction(&fixed))
        }
    }
}

/// Strips trailing zeros after the decimal point, and the point itself if nothing remains.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Plain magnitude in general notation with six significant digits: `-1`, `0.514444`, `1e+07`.
///
/// An explicit precision (`{:.2}`) is forwarded to the magnitude's own fixed-point formatting instead.
impl<U: Unit, F: Float> Display for Quantity<U, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.precision().is_some() {
            Display::fmt(&self.0, f)
        } else {
            Display::fmt(&General(self.0), f)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, F: Float + Serialize> Serialize for Quantity<U, F> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, F: Float + Deserialize<'de>> Deserialize<'de> for Quantity<U, F> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = F::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit symbol in serialized data.
///
/// # Examples
///
/// ```rust
/// use via_units_core::non_si::Feet;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Clearance {
///     #[serde(with = "via_units_core::serde_with_unit")]
///     altitude: Feet,  // Serializes as {"value": 3000.0, "unit": "ft"}
///
///     ceiling: Feet,   // Serializes as 5000.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U, F>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, F, S>(quantity: &Quantity<U, F>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        F: Float + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U, F>` from a struct with a `value` field and an optional `unit` field.
    ///
    /// A `unit` that differs from `U::SYMBOL` is rejected.
    pub fn deserialize<'de, U, F, D>(deserializer: D) -> Result<Quantity<U, F>, D::Error>
    where
        U: Unit,
        F: Float + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, F>(PhantomData<(U, F)>);

        impl<'de, U: Unit, F: Float + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, F> {
            type Value = Quantity<U, F>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, F>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<F> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit_str) = unit {
                    if unit_str != U::SYMBOL {
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{}', found '{}'",
                            U::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
