//! Construction parameters for the elliptical calculus.

use serde::{Deserialize, Serialize};

use super::error::CalculusError;
use super::search::SearchConfig;

/// Immutable configuration of an [`EllipticalCalculus`](super::EllipticalCalculus).
///
/// Only `relative_width` shapes the curve. The remaining fields are numeric
/// guards with defaults that reproduce the reference behaviour; they are
/// exposed so they can be tuned without touching the formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EllipticalConfig {
    /// Horizontal half-axis of the ellipse as a fraction of the neutral price.
    pub relative_width: f64,
    /// Floor factor applied to the position denominator near the neutral price.
    pub position_epsilon: f64,
    /// Exponent `e` of the `price^e` bracket used when `relative_width` is outside `(-1, 1)`.
    pub degenerate_bracket_exponent: f64,
    /// Tuning of the bisection fallback.
    pub search: SearchConfig,
}

impl Default for EllipticalConfig {
    fn default() -> Self {
        Self {
            relative_width: 0.1,
            position_epsilon: 1e-10,
            degenerate_bracket_exponent: 2.0,
            search: SearchConfig::default(),
        }
    }
}

impl EllipticalConfig {
    /// Creates a configuration with the given width ratio and default guards.
    #[must_use]
    pub fn new(relative_width: f64) -> Self {
        Self {
            relative_width,
            ..Self::default()
        }
    }

    /// Sets the width ratio.
    #[must_use]
    pub fn with_relative_width(mut self, relative_width: f64) -> Self {
        self.relative_width = relative_width;
        self
    }

    /// Sets the position denominator floor.
    #[must_use]
    pub fn with_position_epsilon(mut self, position_epsilon: f64) -> Self {
        self.position_epsilon = position_epsilon;
        self
    }

    /// Sets the exponent of the out-of-model bracket fallback.
    #[must_use]
    pub fn with_degenerate_bracket_exponent(mut self, exponent: f64) -> Self {
        self.degenerate_bracket_exponent = exponent;
        self
    }

    /// Sets the search configuration.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Validates the configuration.
    ///
    /// # Returns
    /// - `Ok(())` if every parameter is usable
    /// - `Err(CalculusError::InvalidConfig)` naming the first invalid parameter
    pub fn validate(&self) -> Result<(), CalculusError> {
        if !self.relative_width.is_finite() {
            return Err(CalculusError::InvalidConfig {
                message: format!(
                    "relative_width must be finite, got {}",
                    self.relative_width
                ),
            });
        }

        // every formula divides by the width
        if self.relative_width == 0.0 {
            return Err(CalculusError::InvalidConfig {
                message: "relative_width must be non-zero".to_string(),
            });
        }

        if !self.position_epsilon.is_finite() || self.position_epsilon < 0.0 {
            return Err(CalculusError::InvalidConfig {
                message: format!(
                    "position_epsilon must be non-negative and finite, got {}",
                    self.position_epsilon
                ),
            });
        }

        if !self.degenerate_bracket_exponent.is_finite() {
            return Err(CalculusError::InvalidConfig {
                message: format!(
                    "degenerate_bracket_exponent must be finite, got {}",
                    self.degenerate_bracket_exponent
                ),
            });
        }

        self.search.validate()
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String, CalculusError> {
        serde_json::to_string(self).map_err(|error| CalculusError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes and validates a configuration from JSON.
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    pub fn from_json(data: &str) -> Result<Self, CalculusError> {
        let config: Self =
            serde_json::from_str(data).map_err(|error| CalculusError::DeserializationError {
                message: error.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }
}
