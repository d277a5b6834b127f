//! Hourly field-curing simulation
//!
//! Simulates the moisture decline of a cut swath over one curing day. On continuation
//! days the start-of-day moisture is first re-wet by overnight rain and dew, then the
//! swath dries exponentially hour by hour at a rate set by the weather, the swath
//! density, the cut number and conditioning, modulated through the day by a diurnal
//! step function.
//!
//! # Example
//! ```
//! use forage_cure_core::{curing, CuringInput, ModelConstants, SwathState, WeatherSample};
//!
//! let input = CuringInput {
//!     weather: WeatherSample::new(400.0, 20.0, 10.0, 0.0, 3.0, 0.6),
//!     swath: SwathState::new(0.80, 450.0, true, 1),
//!     mowed: true,
//!     raked: false,
//! };
//! let series = curing(&input, &ModelConstants::default());
//! assert_eq!(series.len(), 11);
//! assert!(series.end() < series.start());
//! ```

mod drying_rate;
mod rewetting;

pub use drying_rate::{adjusted_drying_rate, base_drying_rate, diurnal_factor};
pub use rewetting::{dew_rewet, equilibrium_moisture, rain_rewet, RAIN_SATURATION_MOISTURE};

use crate::config::ModelConstants;
use crate::core_types::CuringInput;
use crate::error::ForageError;
use crate::moisture::{dry_to_fresh_basis, fresh_to_dry_basis};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Hourly moisture over one curing day (fresh-matter basis)
///
/// Element 0 is the start-of-day moisture after any overnight re-wetting; element
/// `h` is the moisture after `h` hours of drying. Never empty; deserialization
/// goes through `TryFrom<Vec<f64>>` and rejects an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CuringSeries {
    hourly: Vec<f64>,
}

impl CuringSeries {
    fn from_dry_basis(hourly_dm: &[f64]) -> Self {
        CuringSeries {
            hourly: hourly_dm.iter().copied().map(dry_to_fresh_basis).collect(),
        }
    }

    /// Start-of-day moisture
    pub fn start(&self) -> f64 {
        self.hourly[0]
    }

    /// End-of-day moisture
    pub fn end(&self) -> f64 {
        self.hourly[self.hourly.len() - 1]
    }

    /// Number of values (drying hours + 1)
    pub fn len(&self) -> usize {
        self.hourly.len()
    }

    /// Never true for a series built by [`curing`]
    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty()
    }

    /// First hour at which the moisture is at or below `target` (fresh basis)
    ///
    /// Returns `Some(0)` if the swath already starts at or below the target, and
    /// `None` if it never gets there within the day.
    pub fn hours_to_reach(&self, target: f64) -> Option<usize> {
        self.hourly.iter().position(|&m| m <= target)
    }

    /// Borrow the hourly values
    pub fn as_slice(&self) -> &[f64] {
        &self.hourly
    }

    /// Take ownership of the hourly values
    pub fn into_vec(self) -> Vec<f64> {
        self.hourly
    }
}

impl TryFrom<Vec<f64>> for CuringSeries {
    type Error = ForageError;

    fn try_from(hourly: Vec<f64>) -> Result<Self, Self::Error> {
        if hourly.is_empty() {
            return Err(ForageError::EmptySeries);
        }
        Ok(CuringSeries { hourly })
    }
}

impl From<CuringSeries> for Vec<f64> {
    fn from(series: CuringSeries) -> Self {
        series.hourly
    }
}

/// Simulate one curing day
///
/// 1. Convert the starting moisture to dry basis
/// 2. Compute the Rotz & Chen drying-rate constant and adjust it for cut and conditioning
/// 3. On continuation days apply rain re-wetting, then dew equilibration over the night
/// 4. Step hour by hour: `M[h] = M[h-1] / exp(rate × diurnal_factor(h))`
/// 5. Convert the series back to fresh basis
///
/// No validation is done; see [`crate::checked::curing`] for the fail-fast variant.
/// A day length below 1 hour yields only the start-of-day value.
pub fn curing(input: &CuringInput, constants: &ModelConstants) -> CuringSeries {
    let weather = &input.weather;
    let swath = &input.swath;
    let day_length = weather.whole_day_length();

    let base_rate = base_drying_rate(
        *weather.solar_insolation,
        *weather.dry_bulb,
        *weather.soil_moisture,
        *swath.density,
        input.day_indicator(),
        constants.drying_agent_rate,
    );
    let rate = adjusted_drying_rate(base_rate, swath.cut_number, swath.conditioned);
    debug!(
        base_rate,
        rate,
        cut_number = swath.cut_number,
        conditioned = swath.conditioned,
        "drying rate"
    );

    let mut moisture = fresh_to_dry_basis(*swath.moisture);
    if input.is_continuation_day() {
        let density_kg = swath.density.as_kg_per_square_meter();
        let after_rain = rain_rewet(
            moisture,
            *weather.rainfall,
            density_kg,
            constants.rain_rewet_rate,
        );
        let equilibrium = equilibrium_moisture(*weather.wind_speed, *weather.relative_humidity);
        moisture = dew_rewet(
            after_rain,
            equilibrium,
            f64::from(weather.night_hours()),
            density_kg,
            constants.dew_rewet_rate,
        );
        debug!(
            before = *swath.moisture,
            after_rain = dry_to_fresh_basis(after_rain),
            after_dew = dry_to_fresh_basis(moisture),
            "overnight re-wetting"
        );
    }

    let mut hourly = Vec::with_capacity(day_length.max(0) as usize + 1);
    hourly.push(moisture);
    for hour in 1..=day_length {
        moisture /= (rate * diurnal_factor(hour, day_length)).exp();
        trace!(hour, moisture_dm = moisture, "curing step");
        hourly.push(moisture);
    }

    CuringSeries::from_dry_basis(&hourly)
}
