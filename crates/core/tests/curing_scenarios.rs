//! Curing engine scenarios over single and consecutive days
//!
//! Run with: `RUST_LOG=forage_cure_core=trace cargo test --test curing_scenarios`

mod common;

use approx::assert_abs_diff_eq;
use forage_cure_core::core_types::{
    Celsius, Fraction, Hours, MetersPerSecond, Millimeters, WattsPerSquareMeter,
};
use forage_cure_core::{curing, CuringInput, ModelConstants, SwathState, WeatherSample};

fn reference_mowing_day() -> CuringInput {
    CuringInput {
        weather: WeatherSample::new(400.0, 20.0, 10.0, 0.0, 3.0, 0.6),
        swath: SwathState::new(0.80, 450.0, true, 1),
        mowed: true,
        raked: false,
    }
}

#[test]
fn test_reference_scenario_strictly_decreasing_from_initial() {
    let series = curing(&reference_mowing_day(), &ModelConstants::default());
    let values = series.as_slice();

    assert_eq!(values.len(), 11);
    assert_abs_diff_eq!(values[0], 0.80, epsilon = 1e-12);
    for pair in values.windows(2) {
        assert!(pair[1] < pair[0], "series not decreasing: {values:?}");
    }
}

#[test]
fn test_series_length_and_range_across_day_lengths() {
    for day_length in 0..=24 {
        let mut input = reference_mowing_day();
        input.weather.day_length = Hours::new(f64::from(day_length));
        let series = curing(&input, &ModelConstants::default());

        assert_eq!(series.len(), day_length as usize + 1);
        for &m in series.as_slice() {
            assert!((0.0..1.0).contains(&m), "day {day_length}: {m} out of range");
        }
    }
}

#[test]
fn test_range_holds_on_wet_continuation_day() {
    let mut input = reference_mowing_day();
    input.mowed = false;
    input.swath.moisture = Fraction::new(0.35);
    input.weather.rainfall = Millimeters::new(40.0);
    input.weather.relative_humidity = Fraction::new(0.95);
    let series = curing(&input, &ModelConstants::default());

    assert!(series.start() > 0.35);
    for &m in series.as_slice() {
        assert!((0.0..1.0).contains(&m));
    }
}

#[test]
fn test_dew_rewets_dry_swath_overnight() {
    let mut input = reference_mowing_day();
    input.mowed = false;
    input.swath.moisture = Fraction::new(0.25);
    input.weather.relative_humidity = Fraction::new(0.92);
    input.weather.wind_speed = MetersPerSecond::new(0.5);
    let series = curing(&input, &ModelConstants::default());

    assert!(series.start() > 0.25, "start was {}", series.start());
}

#[test]
fn test_no_rewetting_on_mowing_day() {
    let mut input = reference_mowing_day();
    input.weather.rainfall = Millimeters::new(25.0);
    let series = curing(&input, &ModelConstants::default());
    assert_abs_diff_eq!(series.start(), 0.80, epsilon = 1e-12);
}

#[test]
fn test_consecutive_days_chain_to_baling_moisture() {
    let constants = ModelConstants::default();
    let mut input = reference_mowing_day();
    input.weather.day_length = Hours::new(12.0);
    input.weather.solar_insolation = WattsPerSquareMeter::new(550.0);
    input.weather.dry_bulb = Celsius::new(26.0);

    let mut days = 0;
    let mut moisture = *input.swath.moisture;
    while moisture > 0.20 && days < 10 {
        let series = curing(&input, &constants);
        moisture = series.end();
        days += 1;

        input.mowed = false;
        input.swath.moisture = Fraction::new(moisture);
    }

    assert!(moisture <= 0.20, "still at {moisture} after {days} days");
    assert!(days >= 2, "dried in a single day");
}

#[test]
fn test_raking_day_dries_faster_than_undisturbed_day() {
    let constants = ModelConstants::default();
    let mut undisturbed = reference_mowing_day();
    undisturbed.mowed = false;
    undisturbed.swath.moisture = Fraction::new(0.6);

    let mut raked = undisturbed;
    raked.raked = true;

    let a = curing(&undisturbed, &constants);
    let b = curing(&raked, &constants);
    assert_abs_diff_eq!(a.start(), b.start(), epsilon = 1e-12);
    assert!(b.end() < a.end());
}

#[test]
fn test_constants_from_toml_change_result() {
    let treated = ModelConstants::from_toml_str("drying_agent_rate = 0.03").unwrap();
    let plain = curing(&reference_mowing_day(), &ModelConstants::default());
    let with_agent = curing(&reference_mowing_day(), &treated);
    assert!(with_agent.end() < plain.end());
}

#[test]
fn test_series_converts_into_hourly_vec() {
    let series = curing(&reference_mowing_day(), &ModelConstants::default());
    let values: Vec<f64> = series.clone().into();
    assert_eq!(values, series.into_vec());
}
