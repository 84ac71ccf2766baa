//! Evaluator configuration.

use crate::arguments::RAD_TO_ARCSEC;
use crate::error::ElpError;
use crate::table::Quantity;

/// ELP2000-82B reference Earth-Moon distance in km, used to express a
/// truncation level given in radians as a distance.
pub const A0_KM: f64 = 384_747.980_674_316_5;

/// Largest accepted truncation level, radians.
pub const MAX_PRECISION_RAD: f64 = 0.01;

/// Series truncation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    /// Truncation level in radians; `0.0` keeps every term.
    ///
    /// For distance tables the level is scaled by [`A0_KM`].
    pub precision_rad: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { precision_rad: 0.0 }
    }
}

impl SeriesConfig {
    pub fn with_precision(precision_rad: f64) -> Self {
        Self { precision_rad }
    }

    pub fn validate(&self) -> Result<(), ElpError> {
        if !self.precision_rad.is_finite() {
            return Err(ElpError::InvalidConfig("precision must be finite"));
        }
        if self.precision_rad < 0.0 {
            return Err(ElpError::InvalidConfig("precision must not be negative"));
        }
        if self.precision_rad > MAX_PRECISION_RAD {
            return Err(ElpError::InvalidConfig("precision must not exceed 0.01 rad"));
        }
        Ok(())
    }

    /// Amplitude threshold in the table's own unit. Terms with
    /// `|amplitude| <= threshold` are dropped.
    pub fn amplitude_threshold(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Longitude | Quantity::Latitude => self.precision_rad * RAD_TO_ARCSEC,
            Quantity::Distance => self.precision_rad * A0_KM,
        }
    }
}
