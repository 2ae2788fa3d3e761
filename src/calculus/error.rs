//! Error types for the bonding-curve calculus.
//!
//! Errors only surface at configuration boundaries. Once a calculus is
//! constructed, every curve operation is total and degrades to a documented
//! fallback value instead of failing.

use std::fmt;

/// Errors raised while building or (de)serializing a calculus configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculusError {
    /// A configuration parameter is outside its valid domain.
    InvalidConfig {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The configuration could not be serialized.
    SerializationError {
        /// Underlying serializer message.
        message: String,
    },

    /// The configuration could not be deserialized.
    DeserializationError {
        /// Underlying deserializer message.
        message: String,
    },
}

impl fmt::Display for CalculusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculusError::InvalidConfig { message } => {
                write!(f, "invalid configuration: {message}")
            }
            CalculusError::SerializationError { message } => {
                write!(f, "failed to serialize configuration: {message}")
            }
            CalculusError::DeserializationError { message } => {
                write!(f, "failed to deserialize configuration: {message}")
            }
        }
    }
}

impl std::error::Error for CalculusError {}
