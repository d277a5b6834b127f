//! Core types and utilities

pub mod swath;
pub mod units;
pub mod weather;

pub use swath::{CuringInput, SwathState};
pub use units::*;
pub use weather::WeatherSample;
