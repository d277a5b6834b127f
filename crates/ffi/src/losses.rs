//! Loss equations over the C ABI
//!
//! Every function validates its inputs, writes the loss to `out` and returns
//! `ForageErrorCode::Ok`, or leaves `out` untouched and returns the error code
//! (details via `forage_get_last_error`).

use crate::error::ForageErrorCode;
use crate::helpers::write_scalar;
use forage_cure_core::checked;

/// Respiration loss (fraction of DM) while drying from `m_initial` to `m_final`.
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_respiration(
    m_initial: f64,
    m_final: f64,
    avg_temp: f64,
    curing_hours: f64,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe {
        write_scalar(
            checked::loss_respiration(m_initial, m_final, avg_temp, curing_hours),
            out,
        )
    }
}

/// Rain leaching loss (fraction of DM); `swath_density` in g/m².
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_rain(
    m_initial: f64,
    conditioned: bool,
    ndf: f64,
    rainfall: f64,
    swath_density: f64,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe {
        write_scalar(
            checked::loss_rain(m_initial, conditioned, ndf, rainfall, swath_density),
            out,
        )
    }
}

/// Mowing/conditioning shatter loss (fraction of DM).
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_mowing(
    stage_factor: f64,
    conditioned: bool,
    legume_fraction: f64,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe {
        write_scalar(
            checked::loss_mowing(stage_factor, conditioned, legume_fraction),
            out,
        )
    }
}

/// Tedding shatter loss (fraction of DM).
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_tedding(
    m_initial: f64,
    legume_fraction: f64,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe { write_scalar(checked::loss_tedding(m_initial, legume_fraction), out) }
}

/// Raking shatter loss (fraction of DM); `swath_density` in g/m².
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_raking(
    m_initial: f64,
    legume_fraction: f64,
    swath_density: f64,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe {
        write_scalar(
            checked::loss_raking(m_initial, legume_fraction, swath_density),
            out,
        )
    }
}

/// Hay storage loss (fraction of DM) for bale moisture on a dry-matter basis.
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_hay_storage(moisture_dm: f64, out: *mut f64) -> ForageErrorCode {
    unsafe { write_scalar(checked::loss_hay_storage(moisture_dm), out) }
}

/// Silage fermentation loss (fraction of DM).
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_fermentation(
    dry_matter_fraction: f64,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe { write_scalar(checked::loss_fermentation(dry_matter_fraction), out) }
}

/// Daily silage effluent loss (t DM / day).
///
/// # Safety
/// `out` must be null or valid for a write of one `double`.
#[no_mangle]
pub unsafe extern "C" fn forage_loss_effluent(
    dry_matter_fraction: f64,
    dm_mass: f64,
    elapsed_days: u32,
    out: *mut f64,
) -> ForageErrorCode {
    unsafe {
        write_scalar(
            checked::loss_effluent(dry_matter_fraction, dm_mass, elapsed_days),
            out,
        )
    }
}
