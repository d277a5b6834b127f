//! Properties of the harvest and storage loss equations

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use forage_cure_core::storage_loss::{max_effluent_volume, EFFLUENT_LAST_DAY};
use forage_cure_core::{
    checked, dry_to_fresh_basis, fresh_to_dry_basis, loss_effluent, loss_fermentation, loss_hay_storage,
    loss_mowing, loss_rain, loss_raking, loss_respiration, loss_tedding, HarvestLosses,
};

fn grid(start: f64, end: f64, steps: u32) -> impl Iterator<Item = f64> {
    (0..=steps).map(move |i| start + (end - start) * f64::from(i) / f64::from(steps))
}

#[test]
fn test_hay_storage_monotonically_increasing() {
    let losses: Vec<f64> = grid(0.0, 0.99, 99).map(loss_hay_storage).collect();
    for pair in losses.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_hay_storage_stays_a_fraction_over_accepted_moisture() {
    for m in grid(0.0, 0.999_999, 500) {
        let loss = checked::loss_hay_storage(m).unwrap();
        assert!(loss > 0.0 && loss <= 1.0, "m = {m}: loss {loss}");
    }
}

#[test]
fn test_tedding_reference_value() {
    // 0.02 × (1 − 0.36^1.5) × (1 + 2 × 0.5) = 0.02 × 0.784 × 2
    assert_relative_eq!(loss_tedding(0.36, 0.5), 0.03136, max_relative = 1e-12);
}

#[test]
fn test_raking_reference_value() {
    // 0.01 × (1 − 0.25^1.5) × 1 / 0.5 kg/m²
    assert_relative_eq!(loss_raking(0.25, 0.0, 500.0), 0.0175, max_relative = 1e-12);
}

#[test]
fn test_raking_and_rain_decrease_with_swath_density() {
    let densities: Vec<f64> = grid(50.0, 1500.0, 60).collect();
    for pair in densities.windows(2) {
        let (thin, thick) = (pair[0], pair[1]);
        assert!(loss_raking(0.4, 0.3, thick) < loss_raking(0.4, 0.3, thin));
        assert!(loss_rain(0.5, true, 0.45, 12.0, thick) < loss_rain(0.5, true, 0.45, 12.0, thin));
        assert!(
            loss_rain(0.5, false, 0.45, 12.0, thick) < loss_rain(0.5, false, 0.45, 12.0, thin)
        );
    }
}

#[test]
fn test_moisture_basis_round_trip() {
    for m in grid(0.0, 0.999, 200) {
        assert_relative_eq!(
            dry_to_fresh_basis(fresh_to_dry_basis(m)),
            m,
            epsilon = 1e-12,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_mowing_reference_value() {
    assert_relative_eq!(loss_mowing(1.0, false, 0.5), 0.006, max_relative = 1e-12);
    assert_abs_diff_eq!(0.5 * 0.006 * (1.0 + 2.0 * 0.5) * 1.0, 0.006, epsilon = 1e-15);
}

#[test]
fn test_fermentation_reference_value_exact() {
    assert_eq!(loss_fermentation(0.15), 0.00864);
}

#[test]
fn test_effluent_first_period_is_flat() {
    let day0 = loss_effluent(0.18, 120.0, 0);
    assert!(day0 > 0.0);
    for day in 1..=3 {
        assert_eq!(loss_effluent(0.18, 120.0, day), day0);
    }
}

#[test]
fn test_effluent_second_period_is_flat_and_lower() {
    let day4 = loss_effluent(0.18, 120.0, 4);
    assert!(day4 > 0.0);
    assert!(day4 < loss_effluent(0.18, 120.0, 3));
    assert_eq!(loss_effluent(0.18, 120.0, EFFLUENT_LAST_DAY), day4);
}

#[test]
fn test_effluent_drops_to_zero_after_day_79() {
    // Known discontinuity: the model has no branch past day 79, so the daily loss
    // falls from the day-79 value straight to zero instead of tapering.
    let day79 = loss_effluent(0.18, 120.0, 79);
    let day80 = loss_effluent(0.18, 120.0, 80);
    assert!(day79 > 0.0);
    assert_eq!(day80, 0.0);
    assert_eq!(loss_effluent(0.18, 120.0, 365), 0.0);
}

#[test]
fn test_effluent_total_matches_max_volume() {
    // Summing the daily losses over days 1-79 recovers the released fraction of
    // the total effluent dry matter.
    let (dmc, mass) = (0.16, 80.0);
    let released: f64 = (1..=79).map(|d| loss_effluent(dmc, mass, d)).sum();
    let total = max_effluent_volume(dmc) * (mass / dmc) * 6.0e-5;
    let fraction = released / total;
    assert!(fraction > 0.99 && fraction < 1.0, "fraction was {fraction}");
}

#[test]
fn test_shatter_losses_increase_with_legume_fraction() {
    for legume in grid(0.0, 0.9, 9) {
        assert!(loss_tedding(0.5, legume + 0.1) > loss_tedding(0.5, legume));
        assert!(loss_raking(0.5, legume + 0.1, 400.0) > loss_raking(0.5, legume, 400.0));
        assert!(loss_mowing(1.0, true, legume + 0.1) > loss_mowing(1.0, true, legume));
    }
}

#[test]
fn test_harvest_losses_from_curing_endpoints() {
    let losses = HarvestLosses {
        respiration: loss_respiration(0.80, 0.45, 20.0, 30.0),
        rain: loss_rain(0.6, true, 0.4, 5.0, 450.0),
        mowing: loss_mowing(1.0, true, 0.4),
        tedding: loss_tedding(0.6, 0.4),
        raking: loss_raking(0.45, 0.4, 450.0),
    };
    let total = losses.total();
    assert!(total > 0.05 && total < 0.3, "total was {total}");
}
