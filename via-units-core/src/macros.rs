//! Macros for defining conversions.

/// Generates `From` implementations in both directions between each convertible unit and its base unit, for every
/// floating-point precision.
///
/// Each entry is written `Unit => Base`, where `Base` must equal `<Unit as Convertible>::Base`.
#[macro_export]
macro_rules! impl_base_conversions {
    ($($unit:ty => $base:ty),+ $(,)?) => {
        $(
            impl<F: $crate::Float> From<$crate::Quantity<$unit, F>> for $crate::Quantity<$base, F> {
                #[inline]
                fn from(value: $crate::Quantity<$unit, F>) -> Self {
                    value.to_base()
                }
            }

            impl<F: $crate::Float> From<$crate::Quantity<$base, F>> for $crate::Quantity<$unit, F> {
                #[inline]
                fn from(value: $crate::Quantity<$base, F>) -> Self {
                    Self::from_base(value)
                }
            }
        )+
    };
}
