/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Elliptical bonding curve.
//!
//! The curve is an ellipse in (price, position) space centred on the neutral
//! price. Its horizontal half-axis is `relative_width * neutral`, its vertical
//! scale is `power` and `asym` shears it so buying and selling respond
//! differently. Forward evaluations are closed form; inversions solve the
//! underlying quadratic directly and pick the root whose position keeps the
//! sign of a reference evaluation, or fall back to a bisection search.

use tracing::{debug, trace};

use super::config::EllipticalConfig;
use super::error::CalculusError;
use super::search::numeric_search_with;
use super::traits::BondingCurve;
use super::types::MinMax;
use crate::utils::sgn;

/// Identifier reported through [`BondingCurve::id`].
pub const ELLIPTICAL_ID: &str = "elliptical";

/// Fraction of the neutral bracket trimmed from each end before searching.
const BRACKET_INSET: f64 = 1e-9;

/// Closed-form calculus of the elliptical curve.
///
/// Holds nothing but its immutable configuration, so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipticalCalculus {
    config: EllipticalConfig,
}

impl EllipticalCalculus {
    /// Creates a calculus with the given width ratio and default numeric guards.
    ///
    /// # Errors
    /// Returns `CalculusError::InvalidConfig` if `relative_width` is zero or not finite.
    pub fn new(relative_width: f64) -> Result<Self, CalculusError> {
        Self::from_config(EllipticalConfig::new(relative_width))
    }

    /// Creates a calculus from a full configuration.
    ///
    /// # Errors
    /// Returns `CalculusError::InvalidConfig` if the configuration does not validate.
    pub fn from_config(config: EllipticalConfig) -> Result<Self, CalculusError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this calculus was built with.
    #[must_use]
    pub fn config(&self) -> &EllipticalConfig {
        &self.config
    }

    /// Width ratio of the ellipse.
    #[must_use]
    pub fn relative_width(&self) -> f64 {
        self.config.relative_width
    }

    /// Horizontal half-axis of the ellipse centred on `neutral`, in price units.
    #[inline]
    #[must_use]
    pub fn width(&self, neutral: f64) -> f64 {
        self.config.relative_width * neutral
    }

    /// Value of the position held at `cur_price`.
    ///
    /// value = -power * ((sqrt(w² - (price - neutral)²) + asym * (price - neutral)) / w - 1)
    ///
    /// Outside the ellipse the square root saturates at zero, leaving a value
    /// linear in `asym * (price - neutral) / w`.
    #[must_use]
    pub fn calc_pos_value(&self, power: f64, asym: f64, neutral: f64, cur_price: f64) -> f64 {
        let width = self.width(neutral);
        let dp = cur_price - neutral;
        let mut sq = width * width - dp * dp;
        if sq < 0.0 {
            sq = 0.0;
        }
        let value = -power * ((sq.sqrt() + asym * dp) / width - 1.0);
        trace!("calc_pos_value: price {} -> value {}", cur_price, value);
        value
    }

    /// Position implied by the curve at `price`.
    ///
    /// position = -power * ((price - neutral) / sqrt(w⁴ - w²(price - neutral)²) - asym / w)
    ///
    /// Returns `0.0` outside the ellipse. The denominator is floored at
    /// `(price - neutral) * position_epsilon`, which keeps the sign of the
    /// price deviation at the ellipse edge.
    #[must_use]
    pub fn calc_position(&self, power: f64, asym: f64, neutral: f64, price: f64) -> f64 {
        let width = self.width(neutral);
        let dp = price - neutral;
        let w2 = width * width;
        let mut sq = w2 * w2 - w2 * dp * dp;
        if sq < 0.0 {
            return 0.0;
        }
        let floor = dp * self.config.position_epsilon;
        if sq < floor {
            sq = floor;
        }
        -power * (dp / sq.sqrt() - asym / width)
    }

    /// Vertical scale derived from the account balance: `balance / (1 + |asym|)`.
    #[must_use]
    pub fn calc_power(&self, _neutral: f64, balance: f64, asym: f64) -> f64 {
        balance / (1.0 + asym.abs())
    }

    /// Neutral price that reproduces `position` at `cur_price`.
    ///
    /// Searches the neutral prices that keep `cur_price` inside the ellipse,
    /// `[cur_price / (1 + rw), cur_price / (1 - rw)]`, anchored at the first
    /// bound. A side whose ratio is outside `(-1, 1)` is replaced by
    /// `cur_price^degenerate_bracket_exponent`.
    ///
    /// The result is the unique answer only while the position is monotone in
    /// the neutral across the bracket. Skews of the opposite sign to the width
    /// ratio always are; same-sign skews must stay below
    /// `min over u in (-1, 1) of (u + 1/|rw|) / (1 - u²)^(3/2) + u / sqrt(1 - u²)`,
    /// which exceeds 2 up to `|rw| = 0.4`, is about 1.2 at 0.6 and 0.5 at 0.8.
    /// Past that bound bisection may settle on another neutral with the same
    /// position.
    #[must_use]
    pub fn calc_neutral(&self, power: f64, asym: f64, position: f64, cur_price: f64) -> f64 {
        let rw = self.config.relative_width;
        let fallback = cur_price.powf(self.config.degenerate_bracket_exponent);

        let mut anchor = if rw > -1.0 {
            cur_price / (1.0 + rw)
        } else {
            debug!("calc_neutral: lower bracket degenerate for width ratio {}", rw);
            fallback
        };
        let mut second = if rw < 1.0 {
            cur_price / (1.0 - rw)
        } else {
            debug!("calc_neutral: upper bracket degenerate for width ratio {}", rw);
            fallback
        };

        // both ends put cur_price on the ellipse edge, where rounding may land outside
        let inset = (second - anchor) * BRACKET_INSET;
        anchor += inset;
        second -= inset;

        let result = numeric_search_with(anchor, second, &self.config.search, |n| {
            self.calc_position(power, asym, n, cur_price) - position
        });
        trace!(
            "calc_neutral: position {} at price {} -> neutral {} ({} iterations)",
            position,
            cur_price,
            result.root,
            result.iterations
        );
        result.root
    }

    /// Zero-position price of the curve, the anchor of [`calc_roots`](Self::calc_roots).
    ///
    /// price0 = neutral * (1 + a²) + sgn(a) * sqrt(a²w² + a⁴w²) / (1 + a²)
    ///
    /// Only the square-root term is scaled by `1 / (1 + a²)`. Zero skew gives
    /// exactly `neutral`; any other skew adds `neutral * a²` on top of the
    /// square-root term, so strong skews land outside the ellipse.
    #[must_use]
    pub fn calc_price0(&self, neutral: f64, asym: f64) -> f64 {
        let width = self.width(neutral);
        let w2 = width * width;
        let a2 = asym * asym;
        let price0 =
            neutral * (1.0 + a2) + sgn(asym) * (a2 * w2 + a2 * a2 * w2).sqrt() / (1.0 + a2);
        trace!("calc_price0: neutral {} asym {} -> {}", neutral, asym, price0);
        price0
    }

    /// Price at which the curve holds `position`.
    ///
    /// Inverting the position formula gives a quadratic in price whose
    /// discriminant is `p⁴w²·d²·(d² + 1)` and whose denominator is
    /// `p²·(d² + 1)`, with `d = asym - w * position / power`. The root is
    /// therefore evaluated in the rescaled form
    /// `neutral + sa * |w| * |d| / sqrt(d² + 1)`, free of the cancellation
    /// between fourth-power terms. `sa = sgn(power * asym / w - position)`
    /// selects the branch.
    ///
    /// Falls back to `neutral` when the discriminant is negative or not a number.
    #[must_use]
    pub fn calc_price_from_position(
        &self,
        power: f64,
        asym: f64,
        neutral: f64,
        position: f64,
    ) -> f64 {
        let width = self.width(neutral);

        if power == 0.0 {
            if position == 0.0 {
                debug!("calc_price_from_position: zero power and zero position");
                return neutral;
            }
            return neutral - sgn(position) * width.abs();
        }

        let d = asym - width * position / power;
        let d2 = d * d;
        let discriminant = d2 * (d2 + 1.0);
        if discriminant.is_nan() || discriminant < 0.0 {
            debug!(
                "calc_price_from_position: position {} unreachable, keeping neutral {}",
                position, neutral
            );
            return neutral;
        }

        let sa = sgn(power * asym / width - position);
        let price = neutral + sa * width.abs() * d.abs() / d.hypot(1.0);
        trace!("calc_price_from_position: position {} -> price {}", position, price);
        price
    }

    /// Neutral price that makes the position value equal `value` at `cur_price`.
    ///
    /// Solves the value formula for the neutral `k`, keeping the width of the
    /// current `neutral`. With `r = -value / power` the two candidates are
    ///
    /// k = cur_price - (a * w * (1 + r) ± |w| * sqrt(a² - r² - 2r)) / (1 + a²)
    ///
    /// The candidate whose position at `cur_price` has the same sign as the
    /// position at the current neutral wins, `k1` (the `+` branch) first.
    /// Returns `neutral` when the discriminant is negative, when `power` is
    /// zero, or when neither candidate keeps the sign.
    #[must_use]
    pub fn calc_neutral_from_value(
        &self,
        power: f64,
        asym: f64,
        neutral: f64,
        value: f64,
        cur_price: f64,
    ) -> f64 {
        let pref = self.calc_position(power, asym, neutral, cur_price);

        if power == 0.0 {
            debug!(
                "calc_neutral_from_value: zero power, keeping neutral {}",
                neutral
            );
            return neutral;
        }

        let width = self.width(neutral);
        let a2 = asym * asym;
        let r = -value / power;
        let discriminant = a2 - r * r - 2.0 * r;
        if discriminant.is_nan() || discriminant < 0.0 {
            debug!(
                "calc_neutral_from_value: value {} unreachable, keeping neutral {}",
                value, neutral
            );
            return neutral;
        }

        let center = cur_price - asym * width * (1.0 + r) / (1.0 + a2);
        let spread = width.abs() * discriminant.sqrt() / (1.0 + a2);
        let k1 = center - spread;
        let k2 = center + spread;

        let pk1 = self.calc_position(power, asym, k1, cur_price);
        if pk1 * pref > 0.0 {
            trace!("calc_neutral_from_value: value {} -> neutral {}", value, k1);
            return k1;
        }
        let pk2 = self.calc_position(power, asym, k2, cur_price);
        if pk2 * pref > 0.0 {
            trace!("calc_neutral_from_value: value {} -> neutral {}", value, k2);
            return k2;
        }

        debug!(
            "calc_neutral_from_value: no candidate keeps position sign {}, keeping neutral {}",
            pref,
            neutral
        );
        neutral
    }

    /// Price interval over which the position value stays within `balance`.
    ///
    /// Searches from [`calc_price0`](Self::calc_price0) towards each edge of the
    /// ellipse. A side whose bracket holds no sign change converges to that edge.
    /// When the anchor lies outside the ellipse the upper search can return a
    /// price beyond the edge, where the saturated value meets `balance`.
    #[must_use]
    pub fn calc_roots(&self, power: f64, asym: f64, neutral: f64, balance: f64) -> MinMax {
        let width = self.width(neutral);
        let min = neutral - width;
        let max = neutral + width;
        let mid = self.calc_price0(neutral, asym);

        let f = |v: f64| self.calc_pos_value(power, asym, neutral, v) - balance;
        let roots = MinMax {
            min: numeric_search_with(mid, min, &self.config.search, f).root,
            max: numeric_search_with(mid, max, &self.config.search, f).root,
        };
        trace!("calc_roots: balance {} -> [{}, {}]", balance, roots.min, roots.max);
        roots
    }
}

impl BondingCurve for EllipticalCalculus {
    fn id(&self) -> &'static str {
        ELLIPTICAL_ID
    }

    fn calc_pos_value(&self, power: f64, asym: f64, neutral: f64, cur_price: f64) -> f64 {
        EllipticalCalculus::calc_pos_value(self, power, asym, neutral, cur_price)
    }

    fn calc_position(&self, power: f64, asym: f64, neutral: f64, price: f64) -> f64 {
        EllipticalCalculus::calc_position(self, power, asym, neutral, price)
    }

    fn calc_power(&self, neutral: f64, balance: f64, asym: f64) -> f64 {
        EllipticalCalculus::calc_power(self, neutral, balance, asym)
    }

    fn calc_neutral(&self, power: f64, asym: f64, position: f64, cur_price: f64) -> f64 {
        EllipticalCalculus::calc_neutral(self, power, asym, position, cur_price)
    }

    fn calc_price0(&self, neutral: f64, asym: f64) -> f64 {
        EllipticalCalculus::calc_price0(self, neutral, asym)
    }

    fn calc_price_from_position(
        &self,
        power: f64,
        asym: f64,
        neutral: f64,
        position: f64,
    ) -> f64 {
        EllipticalCalculus::calc_price_from_position(self, power, asym, neutral, position)
    }

    fn calc_neutral_from_value(
        &self,
        power: f64,
        asym: f64,
        neutral: f64,
        value: f64,
        cur_price: f64,
    ) -> f64 {
        EllipticalCalculus::calc_neutral_from_value(self, power, asym, neutral, value, cur_price)
    }

    fn calc_roots(&self, power: f64, asym: f64, neutral: f64, balance: f64) -> MinMax {
        EllipticalCalculus::calc_roots(self, power, asym, neutral, balance)
    }
}
