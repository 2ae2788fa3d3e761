//! Bisection search used when a curve inversion has no usable closed form.
//!
//! The search works on any continuous scalar function that changes sign
//! (or reaches exactly zero) between two bracket endpoints. The sign
//! convention is fixed once from the anchor endpoint, so the function is
//! never evaluated at the second endpoint.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::error::CalculusError;

/// Configuration for the bisection search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Relative accuracy of the result, measured against the bracket midpoint.
    pub accuracy: f64,
    /// Upper bound on function evaluations for brackets that never reach `accuracy`.
    pub max_iterations: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            accuracy: 1e-8,
            max_iterations: 1024,
        }
    }
}

impl SearchConfig {
    /// Creates a new search configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative accuracy.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the accuracy is a positive finite number and the cap is non-zero.
    pub fn validate(&self) -> Result<(), CalculusError> {
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(CalculusError::InvalidConfig {
                message: format!(
                    "search accuracy must be positive and finite, got {}",
                    self.accuracy
                ),
            });
        }

        if self.max_iterations == 0 {
            return Err(CalculusError::InvalidConfig {
                message: "search max_iterations must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Outcome of a bisection search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Estimated root.
    pub root: f64,
    /// Number of function evaluations after the anchor.
    pub iterations: u32,
    /// False when the iteration cap was hit before reaching the requested accuracy.
    pub converged: bool,
}

/// Finds a root of `f` between `anchor` and `second` with the default configuration.
///
/// # Arguments
/// - `anchor`: Bracket endpoint whose function value fixes the sign convention
/// - `second`: Other bracket endpoint
/// - `f`: Continuous function with a single sign change in the bracket
///
/// # Returns
/// The estimated root, accurate to `1e-8` relative to the midpoint.
///
/// # Example
/// ```
/// use bonding_curve_rs::calculus::numeric_search;
///
/// let root = numeric_search(1.0, 10.0, |x| x - 4.0);
/// assert!((root - 4.0).abs() < 1e-7);
/// ```
pub fn numeric_search<F>(anchor: f64, second: f64, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    numeric_search_with(anchor, second, &SearchConfig::default(), f).root
}

/// Finds a root of `f` between `anchor` and `second`.
///
/// The sign direction `sd` is `-1` when the anchor is the lower endpoint and
/// `+1` otherwise; `reference` is `f(anchor)`. For each midpoint `md` the
/// product `f(md) * reference * sd` decides the half that keeps the root:
/// positive moves the upper bound down, negative moves the lower bound up,
/// zero (or unordered) returns `md` as is.
///
/// On a bracket without a sign change the result is not a root: the search
/// drifts towards one of the endpoints.
pub fn numeric_search_with<F>(
    anchor: f64,
    second: f64,
    config: &SearchConfig,
    f: F,
) -> SearchResult
where
    F: Fn(f64) -> f64,
{
    let mut min = anchor.min(second);
    let mut max = anchor.max(second);
    let sd = if anchor == min { -1.0 } else { 1.0 };

    let reference = f(anchor);
    if reference == 0.0 {
        trace!("numeric_search: anchor {} is an exact root", anchor);
        return SearchResult {
            root: anchor,
            iterations: 0,
            converged: true,
        };
    }

    let mut iterations = 0;
    let mut md = (min + max) / 2.0;
    while (max - min) / md.abs() > config.accuracy {
        if iterations >= config.max_iterations {
            warn!(
                "numeric_search: no convergence after {} iterations, bracket [{}, {}]",
                iterations, min, max
            );
            return SearchResult {
                root: md,
                iterations,
                converged: false,
            };
        }

        let v = f(md);
        iterations += 1;

        let ml = v * reference * sd;
        if ml > 0.0 {
            max = md;
        } else if ml < 0.0 {
            min = md;
        } else {
            break;
        }
        md = (min + max) / 2.0;
    }

    trace!("numeric_search: root {} after {} iterations", md, iterations);
    SearchResult {
        root: md,
        iterations,
        converged: true,
    }
}
