//! Semantic unit types for the curing inputs
//!
//! Newtype wrappers keep weather and swath quantities from being mixed up
//! (grams per square metre with kilograms per square metre, percent with
//! fraction, and so on).
//!
//! # Design Philosophy
//! - Every quantity is an `f64`; the regression equations are evaluated in
//!   double precision throughout
//! - Constructors do not validate. Out-of-range values propagate as numeric
//!   anomalies; use [`crate::checked`] for fail-fast validation
//! - Serde support for serialization
//! - `Deref` to the raw value for use inside formulas
//!
//! # Usage
//! ```
//! use forage_cure_core::core_types::units::{GramsPerSquareMeter, Hours};
//!
//! let density = GramsPerSquareMeter::new(450.0);
//! assert!((density.as_kg_per_square_meter() - 0.45).abs() < 1e-12);
//!
//! let day = Hours::new(13.7);
//! assert_eq!(day.whole_hours(), 13);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Declares an `f64` newtype with the shared trait surface.
macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $unit:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Wrap a raw value (no validation)
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(q: $name) -> f64 {
                q.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $unit)
            }
        }
    };
}

quantity!(
    /// Dry-bulb air temperature in degrees Celsius
    Celsius,
    "°C"
);

quantity!(
    /// Wind speed in metres per second
    MetersPerSecond,
    " m/s"
);

quantity!(
    /// Solar insolation in watts per square metre
    WattsPerSquareMeter,
    " W/m²"
);

quantity!(
    /// Rainfall depth in millimetres
    Millimeters,
    " mm"
);

quantity!(
    /// Areal mass of cut forage (swath density) in grams per square metre
    GramsPerSquareMeter,
    " g/m²"
);

quantity!(
    /// Duration in hours
    Hours,
    " h"
);

quantity!(
    /// Dimensionless fraction, nominally in [0, 1]
    Fraction,
    ""
);

quantity!(
    /// Percentage, nominally in [0, 100]
    Percent,
    "%"
);

impl GramsPerSquareMeter {
    /// Rescale to kg/m², the unit the leaching, raking and re-wetting terms use
    #[inline]
    #[must_use]
    pub fn as_kg_per_square_meter(self) -> f64 {
        self.0 / 1000.0
    }
}

impl Hours {
    /// Truncate toward zero to a whole number of hours
    #[inline]
    #[must_use]
    pub fn whole_hours(self) -> i32 {
        self.0.trunc() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swath_density_rescale() {
        let sd = GramsPerSquareMeter::new(300.0);
        assert!((sd.as_kg_per_square_meter() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_whole_hours_truncates() {
        assert_eq!(Hours::new(14.99).whole_hours(), 14);
        assert_eq!(Hours::new(0.4).whole_hours(), 0);
        assert_eq!(Hours::new(-1.5).whole_hours(), -1);
    }

    #[test]
    fn test_raw_value_round_trip() {
        let rh = Fraction::from(0.35);
        assert_eq!(*rh, 0.35);
        assert_eq!(f64::from(rh), 0.35);
    }

    #[test]
    fn test_display_includes_unit() {
        assert_eq!(Millimeters::new(12.5).to_string(), "12.5 mm");
        assert_eq!(Celsius::new(20.0).to_string(), "20°C");
    }
}
