//! Swath state and curing-day inputs

use crate::core_types::units::{Fraction, GramsPerSquareMeter};
use crate::core_types::weather::WeatherSample;
use serde::{Deserialize, Serialize};

/// State of the cut forage lying in the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwathState {
    /// Moisture content at the start of the day (fresh-matter basis, [0, 1))
    pub moisture: Fraction,
    /// Swath density (g/m², > 0)
    pub density: GramsPerSquareMeter,
    /// Stems were crushed or crimped at mowing
    pub conditioned: bool,
    /// Ordinal of the harvest within the season (1-based)
    pub cut_number: u32,
}

impl SwathState {
    /// Create a swath state
    pub fn new(moisture: f64, density: f64, conditioned: bool, cut_number: u32) -> Self {
        SwathState {
            moisture: Fraction::new(moisture),
            density: GramsPerSquareMeter::new(density),
            conditioned,
            cut_number,
        }
    }
}

/// Everything one call to [`crate::curing::curing`] needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuringInput {
    /// Weather over the day (and preceding night)
    pub weather: WeatherSample,
    /// Swath at the start of the day
    pub swath: SwathState,
    /// The crop was mowed on this day
    pub mowed: bool,
    /// The swath was raked on this day
    pub raked: bool,
}

impl CuringInput {
    /// Binary indicator used by the drying-rate equation: 1 on a mowing or raking day
    pub fn day_indicator(&self) -> f64 {
        if self.mowed || self.raked {
            1.0
        } else {
            0.0
        }
    }

    /// A continuation day starts from a swath that has sat out overnight
    pub fn is_continuation_day(&self) -> bool {
        !self.mowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(mowed: bool, raked: bool) -> CuringInput {
        CuringInput {
            weather: WeatherSample::new(400.0, 20.0, 10.0, 0.0, 3.0, 0.6),
            swath: SwathState::new(0.8, 450.0, true, 1),
            mowed,
            raked,
        }
    }

    #[test]
    fn test_day_indicator() {
        assert_eq!(input(true, false).day_indicator(), 1.0);
        assert_eq!(input(false, true).day_indicator(), 1.0);
        assert_eq!(input(false, false).day_indicator(), 0.0);
    }

    #[test]
    fn test_continuation_day() {
        assert!(!input(true, false).is_continuation_day());
        assert!(input(false, true).is_continuation_day());
    }
}
