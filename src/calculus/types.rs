//! Value types returned by the calculus.

use serde::{Deserialize, Serialize};

/// A closed price interval `[min, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    /// Lower price bound.
    pub min: f64,
    /// Upper price bound.
    pub max: f64,
}

impl MinMax {
    /// Creates a new interval.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance between the two bounds.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if `price` lies inside the interval, bounds included.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}
