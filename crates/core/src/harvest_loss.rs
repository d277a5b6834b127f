//! Dry-matter losses during field curing
//!
//! Each function converts curing-period conditions into a dry-matter loss fraction
//! (kg DM lost / kg DM harvested) for one loss mechanism. Moisture arguments are on a
//! fresh-matter basis; swath densities are in g/m² and rescaled to kg/m² internally.
//!
//! # Scientific References
//! - Rotz, C.A. (1995). "Field curing of forages", CSSA Special Publication 22
//! - Rotz, C.A., Muck, R.E. (1994). "Changes in forage quality during harvest and
//!   storage", in Forage Quality, Evaluation, and Utilization, ASA, 828-868

use serde::{Deserialize, Serialize};

/// Respiration coefficient (1 / (°C·h))
const RESPIRATION_COEFFICIENT: f64 = 1.0e-4;
/// Exponent of the moisture dependence of plant respiration, integrated over the curing span
const RESPIRATION_MOISTURE_EXPONENT: f64 = 3.6;
/// Leaching per mm of rain per kg/m² of swath
const RAIN_LEACHING_COEFFICIENT: f64 = 0.01;
/// Moisture at which rain no longer leaches solubles
const RAIN_LEACHING_MOISTURE_CEILING: f64 = 0.9;
/// Unconditioned stems shed less to rain
const RAIN_UNCONDITIONED_FACTOR: f64 = 0.8;
/// Mowing shatter loss for a grass crop at the reference stage
const MOWING_COEFFICIENT: f64 = 0.006;
/// Unconditioned mowing loses half as much as a mower-conditioner
const MOWING_UNCONDITIONED_FACTOR: f64 = 0.5;
/// Tedding shatter coefficient
const TEDDING_COEFFICIENT: f64 = 0.02;
/// Raking shatter coefficient (kg/m²)
const RAKING_COEFFICIENT: f64 = 0.01;
/// Extra shatter from leaves per unit legume-leaf fraction
const LEGUME_LEAF_MULTIPLIER: f64 = 2.0;

fn legume_factor(legume_fraction: f64) -> f64 {
    1.0 + LEGUME_LEAF_MULTIPLIER * legume_fraction
}

/// Dryness term shared by tedding and raking, `1 - M^1.5`
fn shatter_dryness(moisture: f64) -> f64 {
    1.0 - moisture.powf(1.5)
}

/// Respiration loss while the swath dries from `m_initial` to `m_final`
///
/// RL = c × T × t × (Mi^3.6 − Mf^3.6) / (Mi − Mf)
///
/// Equal initial and final moisture divides zero by zero and yields NaN.
///
/// # Arguments
/// * `m_initial` - moisture at the start of curing (fresh basis)
/// * `m_final` - moisture at the end of curing (fresh basis)
/// * `avg_temp` - mean air temperature over the period (°C)
/// * `curing_hours` - duration of the period (h)
pub fn loss_respiration(m_initial: f64, m_final: f64, avg_temp: f64, curing_hours: f64) -> f64 {
    let moisture_term = (m_initial.powf(RESPIRATION_MOISTURE_EXPONENT)
        - m_final.powf(RESPIRATION_MOISTURE_EXPONENT))
        / (m_initial - m_final);
    RESPIRATION_COEFFICIENT * avg_temp * curing_hours * moisture_term
}

/// Leaching loss from rain falling on the swath
///
/// LL = f × c × RN × (1 − NDF) × (0.9 − M) / SD
///
/// # Arguments
/// * `m_initial` - swath moisture when the rain falls (fresh basis)
/// * `conditioned` - stems were conditioned at mowing
/// * `ndf` - neutral detergent fibre fraction of the crop
/// * `rainfall` - mm
/// * `swath_density` - g/m²
pub fn loss_rain(
    m_initial: f64,
    conditioned: bool,
    ndf: f64,
    rainfall: f64,
    swath_density: f64,
) -> f64 {
    let factor = if conditioned {
        1.0
    } else {
        RAIN_UNCONDITIONED_FACTOR
    };
    factor
        * RAIN_LEACHING_COEFFICIENT
        * rainfall
        * (1.0 - ndf)
        * (RAIN_LEACHING_MOISTURE_CEILING - m_initial)
        / (swath_density / 1000.0)
}

/// Shatter loss from mowing (and conditioning)
///
/// ML = f × 0.006 × (1 + 2L) × stage
///
/// # Arguments
/// * `stage_factor` - crop maturity multiplier (1.0 at the reference stage)
/// * `conditioned` - a mower-conditioner was used
/// * `legume_fraction` - legume-leaf fraction of the crop
pub fn loss_mowing(stage_factor: f64, conditioned: bool, legume_fraction: f64) -> f64 {
    let factor = if conditioned {
        1.0
    } else {
        MOWING_UNCONDITIONED_FACTOR
    };
    factor * MOWING_COEFFICIENT * legume_factor(legume_fraction) * stage_factor
}

/// Shatter loss from tedding
///
/// TL = 0.02 × (1 − M^1.5) × (1 + 2L)
pub fn loss_tedding(m_initial: f64, legume_fraction: f64) -> f64 {
    TEDDING_COEFFICIENT * shatter_dryness(m_initial) * legume_factor(legume_fraction)
}

/// Shatter loss from raking
///
/// RKL = 0.01 × (1 − M^1.5) × (1 + 2L) / SD
///
/// Thin swaths lose proportionally more because a larger share of the crop is in
/// contact with the rake.
pub fn loss_raking(m_initial: f64, legume_fraction: f64, swath_density: f64) -> f64 {
    RAKING_COEFFICIENT * shatter_dryness(m_initial) * legume_factor(legume_fraction)
        / (swath_density / 1000.0)
}

/// Losses from one harvest, by mechanism
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HarvestLosses {
    pub respiration: f64,
    pub rain: f64,
    pub mowing: f64,
    pub tedding: f64,
    pub raking: f64,
}

impl HarvestLosses {
    /// Total dry-matter loss fraction (losses are expressed against harvested DM and add)
    pub fn total(&self) -> f64 {
        self.respiration + self.rain + self.mowing + self.tedding + self.raking
    }
}
