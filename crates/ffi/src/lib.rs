//! C ABI for the forage curing and loss models
//!
//! Every entry point validates its inputs through `forage_cure_core::checked`,
//! returns a `ForageErrorCode`, and records a message retrievable with
//! `forage_get_last_error` on failure. The header is generated by cbindgen into
//! `ForageCureFFI.h` at the workspace root.

mod curing;
mod error;
mod helpers;
mod losses;

pub use curing::{forage_curing, forage_default_constants, ForageCuringInput, ForageModelConstants};
pub use error::{forage_get_last_error, forage_get_last_error_code, ForageErrorCode};
pub use losses::{
    forage_loss_effluent, forage_loss_fermentation, forage_loss_hay_storage, forage_loss_mowing,
    forage_loss_rain, forage_loss_raking, forage_loss_respiration, forage_loss_tedding,
};
