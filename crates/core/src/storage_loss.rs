//! Dry-matter losses in storage
//!
//! Hay storage loss depends on bale moisture. Silage losses are split into
//! fermentation loss (a function of the dry-matter fraction at ensiling) and
//! effluent loss (liquid draining from wet silage during the first weeks after
//! sealing).
//!
//! # Scientific References
//! - Rotz, C.A., Muck, R.E. (1994). "Changes in forage quality during harvest and storage"
//! - Bastiman, B. (1976). "Factors affecting silage effluent production"
//!   Experimental Husbandry, 31, 40-46

use tracing::debug;

/// Scale of the hay storage curve (fraction)
const HAY_STORAGE_COEFFICIENT: f64 = 0.012;
/// Growth of hay storage loss per percentage point of moisture
///
/// Keeps the loss below `0.012 × e⁴ ≈ 0.66` for every moisture below 100%.
const HAY_STORAGE_EXPONENT: f64 = 0.04;

/// Fermentation loss at the reference dry-matter fraction
const FERMENTATION_REFERENCE_LOSS: f64 = 0.00864;
/// Dry-matter fraction at which fermentation loss equals the reference loss
const FERMENTATION_REFERENCE_DMC: f64 = 0.15;
/// Change in fermentation loss per unit dry-matter fraction
const FERMENTATION_SLOPE: f64 = -0.0576;

/// Silage at or above this dry-matter fraction produces no effluent
pub const EFFLUENT_DMC_THRESHOLD: f64 = 0.29;
/// Last day after sealing covered by the effluent model
pub const EFFLUENT_LAST_DAY: u32 = 79;
/// Length of the initial high-flow period (days)
const EFFLUENT_EARLY_DAYS: u32 = 3;
/// First-order release rate of the total effluent (1/day)
const EFFLUENT_RELEASE_RATE: f64 = 0.12;
/// Dry matter carried in effluent (t DM per litre)
const EFFLUENT_DM_CONTENT: f64 = 6.0e-5;

/// Hay storage loss (fraction of stored DM)
///
/// HL = 0.012 × exp(0.04 × 100M)
///
/// Stays below 1 for every moisture in [0, 1).
///
/// # Arguments
/// * `moisture_dm` - bale moisture at storage (dry-matter basis)
pub fn loss_hay_storage(moisture_dm: f64) -> f64 {
    HAY_STORAGE_COEFFICIENT * (HAY_STORAGE_EXPONENT * moisture_dm * 100.0).exp()
}

/// Silage fermentation loss (fraction of ensiled DM)
///
/// FL = 0.00864 − 0.0576 × (DMC − 0.15)
///
/// Not clamped: dry-matter fractions above 0.30 give a negative loss.
pub fn loss_fermentation(dry_matter_fraction: f64) -> f64 {
    FERMENTATION_REFERENCE_LOSS
        + FERMENTATION_SLOPE * (dry_matter_fraction - FERMENTATION_REFERENCE_DMC)
}

/// Maximum effluent volume per tonne of fresh crop (L/t)
///
/// Bastiman (1976): V = 767 − 53.3D + 0.936D², D = dry matter (%).
/// Zero at or above 29% dry matter.
pub fn max_effluent_volume(dry_matter_fraction: f64) -> f64 {
    if dry_matter_fraction >= EFFLUENT_DMC_THRESHOLD {
        return 0.0;
    }
    let dm_percent = dry_matter_fraction * 100.0;
    767.0 - 53.3 * dm_percent + 0.936 * dm_percent * dm_percent
}

/// Fraction of the total effluent released by `days` after sealing
pub fn cumulative_effluent_fraction(days: f64) -> f64 {
    1.0 - (-EFFLUENT_RELEASE_RATE * days).exp()
}

/// Daily dry matter lost in effluent (t DM / day)
///
/// - days 0-3: average daily loss over the first three days
/// - days 4-79: average daily loss over the remaining release period
/// - after day 79: zero; the model does not extend past day 79
///
/// # Arguments
/// * `dry_matter_fraction` - DM fraction of the ensiled crop
/// * `dm_mass` - dry matter ensiled (t)
/// * `elapsed_days` - whole days since sealing
pub fn loss_effluent(dry_matter_fraction: f64, dm_mass: f64, elapsed_days: u32) -> f64 {
    let fresh_mass = dm_mass / dry_matter_fraction;
    let total_dm_in_effluent =
        max_effluent_volume(dry_matter_fraction) * fresh_mass * EFFLUENT_DM_CONTENT;

    let early = cumulative_effluent_fraction(f64::from(EFFLUENT_EARLY_DAYS));
    match elapsed_days {
        0..=EFFLUENT_EARLY_DAYS => total_dm_in_effluent * early / f64::from(EFFLUENT_EARLY_DAYS),
        d if d <= EFFLUENT_LAST_DAY => {
            let late = cumulative_effluent_fraction(f64::from(EFFLUENT_LAST_DAY));
            total_dm_in_effluent * (late - early)
                / f64::from(EFFLUENT_LAST_DAY - EFFLUENT_EARLY_DAYS)
        }
        _ => {
            debug!(elapsed_days, "past the effluent release period, no loss");
            0.0
        }
    }
}
