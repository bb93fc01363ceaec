//! Python bindings for the unit types.
//!
//! This module exposes one Python class per unit through PyO3, in a module named `via_units`. The classes hold a
//! double-precision quantity and bind only through its public API (`Quantity::value`, `Quantity::debug_repr`,
//! the comparison and arithmetic operators, and the base-unit conversions).
//!
//! ## Python API
//!
//! ```python
//! from via_units import Metres, NauticalMiles, METRES_PER_NAUTICAL_MILE
//!
//! one = NauticalMiles(1.0)
//! metres = one.to_metres()
//! assert metres.v() == METRES_PER_NAUTICAL_MILE
//! assert NauticalMiles(metres).v() == 1.0
//! assert repr(metres) == "Metres(1852.000000)"
//! ```
//!
//! Every class supports `v()`, `repr()`, `str()` and all six rich comparisons. `Metres`, `MetresPerSecond`,
//! `Kelvin` and `Kilograms` also support `+`, `-` and unary `-`. `NauticalMiles`, `Feet` and `Knots` accept either a
//! float or an instance of their base class in the constructor.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

use crate::{
    Feet, Kelvin, Kilograms, KilogramsPerCubicMetre, Knots, Metres, MetresPerSecond,
    MetresPerSecondSquared, NauticalMiles, Pascals, METRES_PER_FOOT,
    METRES_PER_NAUTICAL_MILE, METRES_PER_SECOND_PER_KNOT,
};

/// Name of the Python module.
pub const MODULE_NAME: &str = "via_units";

/// Declares a `#[pyclass]` wrapper around one quantity type.
///
/// - `accumulate`: adds `__add__`, `__sub__` and `__neg__`.
/// - `base = PyBase, to = method`: the constructor also accepts a `PyBase` instance, and `method()` converts to it.
macro_rules! py_quantity {
    ($py:ident, $name:literal, $qty:ty) => {
        #[doc = concat!("Python class `", $name, "`.")]
        #[pyclass(name = $name, module = "via_units", frozen, eq, ord)]
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $py(pub $qty);

        #[pymethods]
        impl $py {
            #[new]
            pub fn new(value: f64) -> Self {
                Self(<$qty>::new(value))
            }

            /// The magnitude.
            pub fn v(&self) -> f64 {
                self.0.value()
            }

            pub fn __repr__(&self) -> String {
                self.0.debug_repr()
            }

            pub fn __str__(&self) -> String {
                self.0.to_string()
            }
        }
    };

    ($py:ident, $name:literal, $qty:ty, accumulate) => {
        #[doc = concat!("Python class `", $name, "`.")]
        #[pyclass(name = $name, module = "via_units", frozen, eq, ord)]
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $py(pub $qty);

        #[pymethods]
        impl $py {
            #[new]
            pub fn new(value: f64) -> Self {
                Self(<$qty>::new(value))
            }

            /// The magnitude.
            pub fn v(&self) -> f64 {
                self.0.value()
            }

            pub fn __repr__(&self) -> String {
                self.0.debug_repr()
            }

            pub fn __str__(&self) -> String {
                self.0.to_string()
            }

            pub fn __add__(&self, other: &Self) -> Self {
                Self(self.0 + other.0)
            }

            pub fn __sub__(&self, other: &Self) -> Self {
                Self(self.0 - other.0)
            }

            pub fn __neg__(&self) -> Self {
                Self(-self.0)
            }
        }
    };

    ($py:ident, $name:literal, $qty:ty, base = $base:ident, to = $to:ident) => {
        #[doc = concat!("Python class `", $name, "`.")]
        #[pyclass(name = $name, module = "via_units", frozen, eq, ord)]
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $py(pub $qty);

        #[pymethods]
        impl $py {
            #[new]
            pub fn new(value: &Bound<'_, PyAny>) -> PyResult<Self> {
                if let Ok(base) = value.extract::<PyRef<'_, $base>>() {
                    return Ok(Self(<$qty>::from_base(base.0)));
                }
                let magnitude: f64 = value.extract().map_err(|_| {
                    PyTypeError::new_err(concat!(
                        $name,
                        "() expects a float or a ",
                        stringify!($base),
                        " instance"
                    ))
                })?;
                Ok(Self(<$qty>::new(magnitude)))
            }

            /// The magnitude.
            pub fn v(&self) -> f64 {
                self.0.value()
            }

            pub fn $to(&self) -> $base {
                $base(self.0.to_base())
            }

            pub fn __repr__(&self) -> String {
                self.0.debug_repr()
            }

            pub fn __str__(&self) -> String {
                self.0.to_string()
            }
        }
    };
}

// SI units
py_quantity!(PyMetres, "Metres", Metres, accumulate);
py_quantity!(PyMetresPerSecond, "MetresPerSecond", MetresPerSecond, accumulate);
py_quantity!(PyMetresPerSecondSquared, "MetresPerSecondSquared", MetresPerSecondSquared);
py_quantity!(PyKelvin, "Kelvin", Kelvin, accumulate);
py_quantity!(PyPascals, "Pascals", Pascals);
py_quantity!(PyKilograms, "Kilograms", Kilograms, accumulate);
py_quantity!(PyKilogramsPerCubicMetre, "KilogramsPerCubicMetre", KilogramsPerCubicMetre);

// Non-SI units
py_quantity!(PyNauticalMiles, "NauticalMiles", NauticalMiles, base = PyMetres, to = to_metres);
py_quantity!(PyFeet, "Feet", Feet, base = PyMetres, to = to_metres);
py_quantity!(PyKnots, "Knots", Knots, base = PyMetresPerSecond, to = to_metres_per_second);

/// Module initializer for `import via_units`.
#[pymodule]
pub fn via_units(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("METRES_PER_NAUTICAL_MILE", METRES_PER_NAUTICAL_MILE)?;
    m.add("METRES_PER_FOOT", METRES_PER_FOOT)?;
    m.add("METRES_PER_SECOND_PER_KNOT", METRES_PER_SECOND_PER_KNOT)?;

    m.add_class::<PyMetres>()?;
    m.add_class::<PyMetresPerSecond>()?;
    m.add_class::<PyMetresPerSecondSquared>()?;
    m.add_class::<PyKelvin>()?;
    m.add_class::<PyPascals>()?;
    m.add_class::<PyKilograms>()?;
    m.add_class::<PyKilogramsPerCubicMetre>()?;
    m.add_class::<PyNauticalMiles>()?;
    m.add_class::<PyFeet>()?;
    m.add_class::<PyKnots>()?;

    log::debug!("registered unit classes and constants in Python module {}", MODULE_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metres_class_methods() {
        let one = PyMetres::new(1.0);
        let minus_one = PyMetres::new(-1.0);

        assert_eq!(one.v(), 1.0);
        assert_eq!(one.__repr__(), "Metres(1.000000)");
        assert_eq!(minus_one.__str__(), "-1");
        assert!(minus_one < one);
        assert_eq!(one.__neg__(), minus_one);
        assert_eq!(one.__add__(&one).v(), 2.0);
        assert_eq!(one.__sub__(&one).v(), 0.0);
    }

    #[test]
    fn comparison_only_class_methods() {
        let p = PyPascals::new(101_325.0);
        assert_eq!(p.__repr__(), "Pascals(101325.000000)");
        assert_eq!(p.__str__(), "101325");
    }

    #[test]
    fn conversion_class_methods() {
        let nm = PyNauticalMiles(NauticalMiles::new(1.0));
        assert_eq!(nm.to_metres().v(), METRES_PER_NAUTICAL_MILE);
        assert_eq!(nm.__repr__(), "NauticalMiles(1.000000)");

        let ft = PyFeet(Feet::new(1.0));
        assert_eq!(ft.to_metres().v(), METRES_PER_FOOT);

        let kt = PyKnots(Knots::new(1.0));
        assert_eq!(kt.to_metres_per_second().v(), METRES_PER_SECOND_PER_KNOT);
    }

    #[test]
    fn nan_class_is_unequal_to_itself() {
        let nan = PyKilograms::new(f64::NAN);
        assert!(nan != nan);
    }
}
