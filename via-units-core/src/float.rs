//! Floating-point precision of a quantity's magnitude.

use core::fmt::{Debug, Display, LowerExp};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

mod private {
    pub trait Sealed {}
}

/// The floating-point type backing a [`Quantity`](crate::Quantity).
///
/// Implemented for `f32` and `f64` only; the trait is sealed so that integer or fixed-point magnitudes cannot be
/// plugged in.
pub trait Float:
    private::Sealed
    + Copy
    + Debug
    + Display
    + LowerExp
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    /// Positive zero.
    const ZERO: Self;

    /// Not-a-number.
    const NAN: Self;

    /// Converts an `f64` constant to this precision, rounding to nearest.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Float for $t {
                const ZERO: Self = 0.0;
                const NAN: Self = <$t>::NAN;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_positive() {
        assert!(f64::ZERO.is_sign_positive());
        assert!(f32::ZERO.is_sign_positive());
    }

    #[test]
    fn nan_is_nan() {
        assert!(<f64 as Float>::NAN.is_nan());
        assert!(<f32 as Float>::NAN.is_nan());
    }

    #[test]
    fn from_f64_rounds_to_nearest_f32() {
        assert_eq!(f32::from_f64(0.3048), 0.3048_f32);
        assert_eq!(f32::from_f64(1852.0), 1852.0_f32);
        assert_eq!(f64::from_f64(0.3048), 0.3048);
    }
}
