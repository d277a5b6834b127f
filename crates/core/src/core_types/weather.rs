//! Weather sample for a single curing day
//!
//! One sample describes the conditions the swath experiences between the end of the
//! previous curing day and the end of this one: daylight drying inputs (insolation,
//! temperature, soil moisture) plus the overnight re-wetting inputs (rain, wind, humidity).

use crate::core_types::units::{
    Celsius, Fraction, Hours, MetersPerSecond, Millimeters, Percent, WattsPerSquareMeter,
};
use serde::{Deserialize, Serialize};

/// Weather and site conditions for one curing day
///
/// # Example
/// ```
/// use forage_cure_core::WeatherSample;
///
/// let weather = WeatherSample::new(400.0, 20.0, 10.0, 0.0, 3.0, 0.6);
/// assert_eq!(weather.night_hours(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Mean wind speed (m/s, >= 0)
    pub wind_speed: MetersPerSecond,
    /// Relative humidity as a fraction, must stay below 1
    pub relative_humidity: Fraction,
    /// Mean solar insolation over the daylight hours (W/m², >= 0)
    pub solar_insolation: WattsPerSquareMeter,
    /// Mean dry-bulb air temperature (°C)
    pub dry_bulb: Celsius,
    /// Rainfall since the previous curing day (mm, >= 0)
    pub rainfall: Millimeters,
    /// Drying hours in the day (0-24, truncated to whole hours)
    pub day_length: Hours,
    /// Surface soil moisture (% dry basis)
    #[serde(default = "default_soil_moisture")]
    pub soil_moisture: Percent,
}

fn default_soil_moisture() -> Percent {
    Percent::new(WeatherSample::DEFAULT_SOIL_MOISTURE)
}

impl WeatherSample {
    /// Soil moisture used by [`WeatherSample::new`] (% dry basis)
    pub const DEFAULT_SOIL_MOISTURE: f64 = 20.0;

    /// Create a sample with default soil moisture
    ///
    /// # Arguments
    /// * `solar_insolation` - W/m²
    /// * `dry_bulb` - °C
    /// * `day_length` - hours
    /// * `rainfall` - mm
    /// * `wind_speed` - m/s
    /// * `relative_humidity` - fraction
    pub fn new(
        solar_insolation: f64,
        dry_bulb: f64,
        day_length: f64,
        rainfall: f64,
        wind_speed: f64,
        relative_humidity: f64,
    ) -> Self {
        WeatherSample {
            wind_speed: MetersPerSecond::new(wind_speed),
            relative_humidity: Fraction::new(relative_humidity),
            solar_insolation: WattsPerSquareMeter::new(solar_insolation),
            dry_bulb: Celsius::new(dry_bulb),
            rainfall: Millimeters::new(rainfall),
            day_length: Hours::new(day_length),
            soil_moisture: default_soil_moisture(),
        }
    }

    /// Override the surface soil moisture (% dry basis)
    pub fn with_soil_moisture(mut self, soil_moisture: f64) -> Self {
        self.soil_moisture = Percent::new(soil_moisture);
        self
    }

    /// Whole daylight hours
    pub fn whole_day_length(&self) -> i32 {
        self.day_length.whole_hours()
    }

    /// Non-daylight hours over which dew re-wets the swath
    pub fn night_hours(&self) -> i32 {
        24 - self.whole_day_length()
    }
}
