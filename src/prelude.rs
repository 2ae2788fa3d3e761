//! Re-exports of the types needed to evaluate and invert a bonding curve.

pub use crate::calculus::{
    BondingCurve, CalculusError, ELLIPTICAL_ID, EllipticalCalculus, EllipticalConfig, MinMax,
    SearchConfig, SearchResult, numeric_search, numeric_search_with,
};
pub use crate::utils::sgn;
