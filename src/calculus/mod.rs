//! Bonding-curve calculus relating price, position, value and neutral price.
//!
//! This module provides the elliptical curve used by inventory-based
//! strategies, together with the bisection search its inversions fall back on.
//!
//! # Overview
//!
//! The curve is an ellipse in (price, position) space:
//! - centred on the **neutral** price,
//! - with a horizontal half-axis of `relative_width * neutral`,
//! - vertically scaled by **power** (derived from the account balance),
//! - sheared by **asym** so the buy and sell sides respond differently.
//!
//! # Forward and inverse queries
//!
//! Forward queries (`calc_position`, `calc_pos_value`, `calc_price0`,
//! `calc_power`) are closed form. Inverse queries solve a quadratic and keep
//! the root whose position has the sign of a reference evaluation
//! (`calc_price_from_position`, `calc_neutral_from_value`) or bisect a
//! bracket derived from the ellipse geometry (`calc_neutral`, `calc_roots`).
//! None of them fails: an unreachable target falls back to the unchanged
//! neutral price.
//!
//! # Example
//!
//! ```
//! use bonding_curve_rs::calculus::EllipticalCalculus;
//!
//! let calc = EllipticalCalculus::new(0.1).unwrap();
//! let power = calc.calc_power(1000.0, 100.0, 0.0);
//!
//! let position = calc.calc_position(power, 0.0, 1000.0, 1050.0);
//! assert!(position < 0.0);
//!
//! let neutral = calc.calc_neutral(power, 0.0, position, 1050.0);
//! assert!((neutral - 1000.0).abs() < 1e-3);
//! ```

mod config;
mod elliptical;
mod error;
mod search;
mod traits;
mod types;

pub use config::EllipticalConfig;
pub use elliptical::{ELLIPTICAL_ID, EllipticalCalculus};
pub use error::CalculusError;
pub use search::{SearchConfig, SearchResult, numeric_search, numeric_search_with};
pub use traits::BondingCurve;
pub use types::MinMax;
