//! Curing engine over the C ABI

use crate::error::{DefaultFfiError, ForageErrorCode};
use crate::helpers::{clear_last_error, track_error};
use forage_cure_core::core_types::{
    Celsius, Fraction, GramsPerSquareMeter, Hours, MetersPerSecond, Millimeters, Percent,
    WattsPerSquareMeter,
};
use forage_cure_core::{checked, CuringInput, ModelConstants, SwathState, WeatherSample};
use std::ptr;

/// C-compatible curing-day input.
/// Keep this layout stable for C/C++ consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ForageCuringInput {
    /// Start-of-day moisture (fresh basis, [0, 1)).
    pub initial_moisture: f64,
    /// Solar insolation (W/m²).
    pub solar_insolation: f64,
    /// Dry-bulb air temperature (°C).
    pub dry_bulb: f64,
    /// Surface soil moisture (% dry basis).
    pub soil_moisture: f64,
    /// Drying hours (0-24, truncated).
    pub day_length: f64,
    /// Rainfall since the previous day (mm).
    pub rainfall: f64,
    /// Wind speed (m/s).
    pub wind_speed: f64,
    /// Relative humidity (fraction, [0, 1)).
    pub relative_humidity: f64,
    /// Swath density (g/m²).
    pub swath_density: f64,
    /// Harvest ordinal within the season (1-based).
    pub cut_number: u32,
    /// Stems were conditioned at mowing.
    pub conditioned: bool,
    /// The crop was mowed on this day.
    pub mowed: bool,
    /// The swath was raked on this day.
    pub raked: bool,
}

impl From<&ForageCuringInput> for CuringInput {
    fn from(input: &ForageCuringInput) -> Self {
        CuringInput {
            weather: WeatherSample {
                wind_speed: MetersPerSecond::new(input.wind_speed),
                relative_humidity: Fraction::new(input.relative_humidity),
                solar_insolation: WattsPerSquareMeter::new(input.solar_insolation),
                dry_bulb: Celsius::new(input.dry_bulb),
                rainfall: Millimeters::new(input.rainfall),
                day_length: Hours::new(input.day_length),
                soil_moisture: Percent::new(input.soil_moisture),
            },
            swath: SwathState {
                moisture: Fraction::new(input.initial_moisture),
                density: GramsPerSquareMeter::new(input.swath_density),
                conditioned: input.conditioned,
                cut_number: input.cut_number,
            },
            mowed: input.mowed,
            raked: input.raked,
        }
    }
}

/// C-compatible model constants.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ForageModelConstants {
    /// Drying agent application rate (g solution / g DM).
    pub drying_agent_rate: f64,
    /// Rain re-wetting rate constant.
    pub rain_rewet_rate: f64,
    /// Dew re-wetting rate constant.
    pub dew_rewet_rate: f64,
}

impl From<&ForageModelConstants> for ModelConstants {
    fn from(constants: &ForageModelConstants) -> Self {
        ModelConstants {
            drying_agent_rate: constants.drying_agent_rate,
            rain_rewet_rate: constants.rain_rewet_rate,
            dew_rewet_rate: constants.dew_rewet_rate,
        }
    }
}

/// Default model constants, for callers that want to tweak one value.
#[no_mangle]
pub extern "C" fn forage_default_constants() -> ForageModelConstants {
    let defaults = ModelConstants::default();
    ForageModelConstants {
        drying_agent_rate: defaults.drying_agent_rate,
        rain_rewet_rate: defaults.rain_rewet_rate,
        dew_rewet_rate: defaults.dew_rewet_rate,
    }
}

/// Simulate one curing day and copy the hourly moisture series into `out_values`.
///
/// The series has `floor(day_length) + 1` values (fresh basis). `out_len` always
/// receives the required length once the input is valid, so a caller can pass
/// `out_values = NULL, capacity = 0` to size its buffer.
///
/// # Returns
/// - `ForageErrorCode::Ok` (0) with the series in `out_values[0..*out_len]`
/// - `ForageErrorCode::NullPointer` if `input` or `out_len` is null, or `out_values`
///   is null with a non-zero `capacity`
/// - `ForageErrorCode::InvalidInput` if an input violates its constraint
/// - `ForageErrorCode::BufferTooSmall` if `capacity < *out_len`
///
/// # Safety
/// - `input` must be a valid pointer to a `ForageCuringInput`.
/// - `constants` must be null (use defaults) or a valid pointer to a `ForageModelConstants`.
/// - `out_values` must be null or valid for writes of `capacity` doubles.
/// - `out_len` must be a valid pointer to a `usize`.
#[no_mangle]
pub unsafe extern "C" fn forage_curing(
    input: *const ForageCuringInput,
    constants: *const ForageModelConstants,
    out_values: *mut f64,
    capacity: usize,
    out_len: *mut usize,
) -> ForageErrorCode {
    if input.is_null() {
        return track_error(&DefaultFfiError::null_pointer("input"));
    }
    if out_len.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_len"));
    }
    if out_values.is_null() && capacity > 0 {
        return track_error(&DefaultFfiError::null_pointer("out_values"));
    }

    let input = CuringInput::from(unsafe { &*input });
    let constants = if constants.is_null() {
        ModelConstants::default()
    } else {
        ModelConstants::from(unsafe { &*constants })
    };

    let series = match checked::curing(&input, &constants) {
        Ok(series) => series,
        Err(error) => {
            unsafe {
                *out_len = 0;
            }
            return track_error(&DefaultFfiError::from(error));
        }
    };

    let values = series.as_slice();
    unsafe {
        *out_len = values.len();
    }
    if capacity < values.len() {
        return track_error(&DefaultFfiError::buffer_too_small(values.len(), capacity));
    }

    unsafe {
        ptr::copy_nonoverlapping(values.as_ptr(), out_values, values.len());
    }
    clear_last_error()
}
