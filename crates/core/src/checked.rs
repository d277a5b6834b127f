//! Fail-fast variants of every public calculation
//!
//! The plain functions let invalid inputs propagate as infinities or NaN. The
//! functions here check each input against the constraint the model relies on and
//! return [`ForageError::InvalidInput`] naming the first offending value, then
//! delegate to the plain function.
//!
//! ```
//! use forage_cure_core::{checked, ForageError};
//!
//! assert!(checked::loss_raking(0.4, 0.3, 350.0).is_ok());
//! let err = checked::loss_raking(0.4, 0.3, 0.0).unwrap_err();
//! assert!(matches!(err, ForageError::InvalidInput { name: "swath_density", .. }));
//! ```

use crate::config::ModelConstants;
use crate::core_types::CuringInput;
use crate::curing::CuringSeries;
use crate::error::{ForageError, Result};
use crate::{curing as engine, harvest_loss, storage_loss};
use tracing::debug;

fn reject(name: &'static str, value: f64, constraint: &'static str) -> ForageError {
    debug!(name, value, constraint, "rejected input");
    ForageError::invalid_input(name, value, constraint)
}

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(reject(name, value, "must be finite"))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if finite(name, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(reject(name, value, "must be >= 0"))
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64> {
    if finite(name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(reject(name, value, "must be > 0"))
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&finite(name, value)?) {
        Ok(value)
    } else {
        Err(reject(name, value, "must be in [0, 1]"))
    }
}

fn below_one(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..1.0).contains(&finite(name, value)?) {
        Ok(value)
    } else {
        Err(reject(name, value, "must be in [0, 1)"))
    }
}

/// Validate every field of a curing input
///
/// # Errors
/// [`ForageError::InvalidInput`] for the first field that violates its constraint.
pub fn validate_curing_input(input: &CuringInput) -> Result<()> {
    let weather = &input.weather;
    let swath = &input.swath;

    below_one("initial_moisture", *swath.moisture)?;
    positive("swath_density", *swath.density)?;
    if swath.cut_number == 0 {
        return Err(reject("cut_number", 0.0, "must be >= 1"));
    }
    non_negative("solar_insolation", *weather.solar_insolation)?;
    finite("dry_bulb", *weather.dry_bulb)?;
    non_negative("soil_moisture", *weather.soil_moisture)?;
    non_negative("rainfall", *weather.rainfall)?;
    non_negative("wind_speed", *weather.wind_speed)?;
    below_one("relative_humidity", *weather.relative_humidity)?;
    let day_length = finite("day_length", *weather.day_length)?;
    if !(0.0..=24.0).contains(&day_length) {
        return Err(reject("day_length", day_length, "must be in [0, 24]"));
    }
    Ok(())
}

/// Validated [`crate::curing::curing`]
///
/// # Errors
/// [`ForageError::InvalidInput`] if any input field is out of range.
pub fn curing(input: &CuringInput, constants: &ModelConstants) -> Result<CuringSeries> {
    validate_curing_input(input)?;
    Ok(engine::curing(input, constants))
}

/// Validated [`harvest_loss::loss_respiration`]
///
/// # Errors
/// [`ForageError::InvalidInput`] if a moisture is outside [0, 1), the moistures are
/// equal, the temperature is not finite or the duration is negative.
pub fn loss_respiration(
    m_initial: f64,
    m_final: f64,
    avg_temp: f64,
    curing_hours: f64,
) -> Result<f64> {
    below_one("m_initial", m_initial)?;
    below_one("m_final", m_final)?;
    if m_initial == m_final {
        return Err(reject("m_final", m_final, "must differ from m_initial"));
    }
    finite("avg_temp", avg_temp)?;
    non_negative("curing_hours", curing_hours)?;
    Ok(harvest_loss::loss_respiration(
        m_initial,
        m_final,
        avg_temp,
        curing_hours,
    ))
}

/// Validated [`harvest_loss::loss_rain`]
///
/// # Errors
/// [`ForageError::InvalidInput`] on out-of-range moisture, NDF, rainfall or density.
pub fn loss_rain(
    m_initial: f64,
    conditioned: bool,
    ndf: f64,
    rainfall: f64,
    swath_density: f64,
) -> Result<f64> {
    unit_interval("m_initial", m_initial)?;
    unit_interval("ndf", ndf)?;
    non_negative("rainfall", rainfall)?;
    positive("swath_density", swath_density)?;
    Ok(harvest_loss::loss_rain(
        m_initial,
        conditioned,
        ndf,
        rainfall,
        swath_density,
    ))
}

/// Validated [`harvest_loss::loss_mowing`]
///
/// # Errors
/// [`ForageError::InvalidInput`] on a negative stage factor or legume fraction outside [0, 1].
pub fn loss_mowing(stage_factor: f64, conditioned: bool, legume_fraction: f64) -> Result<f64> {
    non_negative("stage_factor", stage_factor)?;
    unit_interval("legume_fraction", legume_fraction)?;
    Ok(harvest_loss::loss_mowing(
        stage_factor,
        conditioned,
        legume_fraction,
    ))
}

/// Validated [`harvest_loss::loss_tedding`]
///
/// # Errors
/// [`ForageError::InvalidInput`] on moisture or legume fraction outside [0, 1].
pub fn loss_tedding(m_initial: f64, legume_fraction: f64) -> Result<f64> {
    unit_interval("m_initial", m_initial)?;
    unit_interval("legume_fraction", legume_fraction)?;
    Ok(harvest_loss::loss_tedding(m_initial, legume_fraction))
}

/// Validated [`harvest_loss::loss_raking`]
///
/// # Errors
/// [`ForageError::InvalidInput`] on moisture or legume fraction outside [0, 1], or a
/// non-positive swath density.
pub fn loss_raking(m_initial: f64, legume_fraction: f64, swath_density: f64) -> Result<f64> {
    unit_interval("m_initial", m_initial)?;
    unit_interval("legume_fraction", legume_fraction)?;
    positive("swath_density", swath_density)?;
    Ok(harvest_loss::loss_raking(
        m_initial,
        legume_fraction,
        swath_density,
    ))
}

/// Validated [`storage_loss::loss_hay_storage`]
///
/// # Errors
/// [`ForageError::InvalidInput`] if the moisture is outside [0, 1).
pub fn loss_hay_storage(moisture_dm: f64) -> Result<f64> {
    below_one("moisture_dm", moisture_dm)?;
    Ok(storage_loss::loss_hay_storage(moisture_dm))
}

/// Validated [`storage_loss::loss_fermentation`]
///
/// # Errors
/// [`ForageError::InvalidInput`] if the dry-matter fraction is outside [0, 1].
pub fn loss_fermentation(dry_matter_fraction: f64) -> Result<f64> {
    unit_interval("dry_matter_fraction", dry_matter_fraction)?;
    Ok(storage_loss::loss_fermentation(dry_matter_fraction))
}

/// Validated [`storage_loss::loss_effluent`]
///
/// # Errors
/// [`ForageError::InvalidInput`] if the dry-matter fraction is outside (0, 1] or the
/// mass is not positive.
pub fn loss_effluent(dry_matter_fraction: f64, dm_mass: f64, elapsed_days: u32) -> Result<f64> {
    if positive("dry_matter_fraction", dry_matter_fraction)? > 1.0 {
        return Err(reject(
            "dry_matter_fraction",
            dry_matter_fraction,
            "must be in (0, 1]",
        ));
    }
    positive("dm_mass", dm_mass)?;
    Ok(storage_loss::loss_effluent(
        dry_matter_fraction,
        dm_mass,
        elapsed_days,
    ))
}
