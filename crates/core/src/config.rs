//! Model-wide empirical constants
//!
//! The drying-agent application rate and the two re-wetting rate constants are fixed
//! by the published calibration but are kept in one value that callers pass by
//! reference, so a run can be repeated with a different calibration without any
//! global state.
//!
//! ```
//! use forage_cure_core::ModelConstants;
//!
//! let constants = ModelConstants::from_toml_str("drying_agent_rate = 0.02").unwrap();
//! assert_eq!(constants.drying_agent_rate, 0.02);
//! assert_eq!(constants.rain_rewet_rate, ModelConstants::default().rain_rewet_rate);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Empirical constants shared by the drying-rate and re-wetting equations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConstants {
    /// Application rate of chemical drying agent (g solution / g dry matter), `AR`
    pub drying_agent_rate: f64,
    /// Rain re-wetting rate constant (per mm of rain per kg/m² of swath), `WRR`
    pub rain_rewet_rate: f64,
    /// Dew re-wetting rate constant (per night hour per kg/m² of swath), `WRD`
    pub dew_rewet_rate: f64,
}

impl ModelConstants {
    /// No drying agent applied
    pub const DRYING_AGENT_RATE: f64 = 0.0;
    /// Default rain re-wetting rate
    pub const RAIN_REWET_RATE: f64 = 0.04;
    /// Default dew re-wetting rate
    pub const DEW_REWET_RATE: f64 = 0.02;

    /// Parse constants from TOML; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`crate::ForageError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let constants: ModelConstants = toml::from_str(source)?;
        debug!(?constants, "loaded model constants");
        Ok(constants)
    }
}

impl Default for ModelConstants {
    fn default() -> Self {
        ModelConstants {
            drying_agent_rate: Self::DRYING_AGENT_RATE,
            rain_rewet_rate: Self::RAIN_REWET_RATE,
            dew_rewet_rate: Self::DEW_REWET_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForageError;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let constants = ModelConstants::from_toml_str("").unwrap();
        assert_eq!(constants, ModelConstants::default());
    }

    #[test]
    fn test_full_override() {
        let constants = ModelConstants::from_toml_str(
            "drying_agent_rate = 0.01\nrain_rewet_rate = 0.05\ndew_rewet_rate = 0.1\n",
        )
        .unwrap();
        assert_eq!(constants.drying_agent_rate, 0.01);
        assert_eq!(constants.rain_rewet_rate, 0.05);
        assert_eq!(constants.dew_rewet_rate, 0.1);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ModelConstants::from_toml_str("wrr = 0.05").unwrap_err();
        assert!(matches!(err, ForageError::Config(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = ModelConstants::from_toml_str("dew_rewet_rate = \"fast\"").unwrap_err();
        assert!(matches!(err, ForageError::Config(_)));
    }
}
