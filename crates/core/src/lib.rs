//! Forage Curing Core Library
//!
//! Empirical models of dry-matter moisture and loss for cut forage, from the field to
//! storage. Every calculation is a pure function of its inputs.
//!
//! ## Models
//! - Hourly field-curing simulation with overnight rain and dew re-wetting
//! - Harvest losses: respiration, rain leaching, mowing, tedding and raking shatter
//! - Storage losses: hay storage, silage fermentation and silage effluent
//!
//! The plain functions propagate invalid inputs as numeric anomalies (infinity or NaN).
//! The [`checked`] module wraps each of them with fail-fast input validation.
//!
//! ```
//! use forage_cure_core::{
//!     curing, loss_mowing, loss_respiration, CuringInput, ModelConstants, SwathState,
//!     WeatherSample,
//! };
//!
//! let input = CuringInput {
//!     weather: WeatherSample::new(450.0, 22.0, 12.0, 0.0, 2.5, 0.55),
//!     swath: SwathState::new(0.78, 400.0, true, 2),
//!     mowed: true,
//!     raked: false,
//! };
//! let series = curing(&input, &ModelConstants::default());
//! let respiration = loss_respiration(series.start(), series.end(), 22.0, 12.0);
//! assert!(respiration > 0.0);
//! assert!((loss_mowing(1.0, true, 0.0) - 0.006).abs() < 1e-12);
//! ```

// Core types and utilities
pub mod core_types;

pub mod checked;
pub mod config;
pub mod curing;
pub mod error;
pub mod harvest_loss;
pub mod moisture;
pub mod storage_loss;

// Re-export core types
pub use core_types::{CuringInput, SwathState, WeatherSample};

pub use config::ModelConstants;
pub use curing::{curing, CuringSeries};
pub use error::{ForageError, Result};
pub use harvest_loss::{
    loss_mowing, loss_rain, loss_raking, loss_respiration, loss_tedding, HarvestLosses,
};
pub use moisture::{dry_to_fresh_basis, fresh_to_dry_basis};
pub use storage_loss::{loss_effluent, loss_fermentation, loss_hay_storage};
