//! Contract between a bonding-curve calculus and the strategy driving it.

use super::types::MinMax;

/// Curve calculus consumed by a leveraged-strategy driver.
///
/// Forward queries (`calc_pos_value`, `calc_position`, `calc_price0`,
/// `calc_power`) are closed form. Inverse queries return a best-effort answer
/// even when the exact inverse does not exist; falling back to the unchanged
/// input is a legitimate result, never an error.
pub trait BondingCurve: Send + Sync {
    /// Short identifier of the curve family.
    fn id(&self) -> &'static str;

    /// Value of the position held at `cur_price`.
    fn calc_pos_value(&self, power: f64, asym: f64, neutral: f64, cur_price: f64) -> f64;

    /// Position implied by the curve at `price`.
    fn calc_position(&self, power: f64, asym: f64, neutral: f64, price: f64) -> f64;

    /// Vertical scale derived from the account balance.
    fn calc_power(&self, neutral: f64, balance: f64, asym: f64) -> f64;

    /// Neutral price that reproduces `position` at `cur_price`.
    fn calc_neutral(&self, power: f64, asym: f64, position: f64, cur_price: f64) -> f64;

    /// Price at which the position crosses zero.
    fn calc_price0(&self, neutral: f64, asym: f64) -> f64;

    /// Price at which the curve holds `position`.
    fn calc_price_from_position(&self, power: f64, asym: f64, neutral: f64, position: f64)
    -> f64;

    /// Neutral price that makes the position value equal `value` at `cur_price`.
    fn calc_neutral_from_value(
        &self,
        power: f64,
        asym: f64,
        neutral: f64,
        value: f64,
        cur_price: f64,
    ) -> f64;

    /// Price interval over which the position value stays within `balance`.
    fn calc_roots(&self, power: f64, asym: f64, neutral: f64, balance: f64) -> MinMax;
}
