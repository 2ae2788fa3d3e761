//! # Bonding Curve
//!
//! A closed-form calculus for the elliptical bonding curve used by
//! inventory-based trading strategies. Given a neutral price, a vertical
//! scale (`power`) and a skew (`asym`), it maps market prices to the position
//! a strategy should hold and to the value locked in that position, and it
//! inverts those maps to recover prices or a new neutral price from observed
//! positions, values and balances.
//!
//! ## Key Features
//!
//! - **Forward evaluation**: position, position value, zero-position price and
//!   power from balance, all in closed form.
//!
//! - **Stable inversions**: the price-from-position and neutral-from-value
//!   quadratics are evaluated in a rescaled form that avoids cancellation
//!   between fourth-power terms.
//!
//! - **Sign-consistent root selection**: among several mathematical roots the
//!   one that keeps the sign of the current position wins.
//!
//! - **Total functions**: unreachable targets degrade to the unchanged neutral
//!   price instead of failing, so the driving strategy always gets an answer.
//!
//! - **Bisection fallback**: a generic relative-accuracy bisection search for
//!   inversions without a closed form.
//!
//! The calculus holds only an immutable configuration and is `Send + Sync`,
//! so one instance can serve any number of threads.
//!
//! ## Usage
//!
//! ```
//! use bonding_curve_rs::prelude::*;
//!
//! let calc = EllipticalCalculus::new(0.1).unwrap();
//! let curve: &dyn BondingCurve = &calc;
//!
//! let roots = curve.calc_roots(100.0, 0.0, 1000.0, 50.0);
//! assert!(roots.min < 1000.0 && roots.max > 1000.0);
//! ```

pub mod calculus;
pub mod prelude;
mod utils;

pub use calculus::{BondingCurve, CalculusError, EllipticalCalculus, EllipticalConfig, MinMax};
pub use utils::sgn;
