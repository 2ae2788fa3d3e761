//! Example sweeping an elliptical bonding curve across its price range
//!
//! This example shows how to:
//! 1. Build a calculus from a JSON configuration
//! 2. Derive the curve power from an account balance
//! 3. Tabulate position and position value across the ellipse
//! 4. Invert an observed position back into a neutral price

use bonding_curve_rs::prelude::{BondingCurve, EllipticalCalculus, EllipticalConfig};
use serde::Serialize;
use tracing::{error, info};

const CONFIG: &str = r#"{ "relative_width": 0.15, "search": { "accuracy": 1e-10 } }"#;

/// One sampled point of the curve
#[derive(Debug, Serialize)]
struct CurvePoint {
    price: f64,
    position: f64,
    value: f64,
}

fn profile(
    curve: &dyn BondingCurve,
    power: f64,
    asym: f64,
    neutral: f64,
    width: f64,
) -> Vec<CurvePoint> {
    (-10..=10)
        .map(|step| {
            let price = neutral + width * step as f64 / 10.5;
            CurvePoint {
                price,
                position: curve.calc_position(power, asym, neutral, price),
                value: curve.calc_pos_value(power, asym, neutral, price),
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = EllipticalConfig::from_json(CONFIG);
    let calc = match config.and_then(EllipticalCalculus::from_config) {
        Ok(calc) => calc,
        Err(e) => {
            error!("Failed to build calculus: {}", e);
            return;
        }
    };

    let balance = 10_000.0;
    let asym = 0.35;
    let neutral = 2_500.0;
    let power = calc.calc_power(neutral, balance, asym);
    let width = calc.width(neutral);

    info!(
        "Curve '{}': neutral {}, width {}, power {:.2}",
        calc.id(),
        neutral,
        width,
        power
    );

    let points = profile(&calc, power, asym, neutral, width);
    for point in &points {
        info!(
            "price {:>10.2}  position {:>12.4}  value {:>10.2}",
            point.price, point.position, point.value
        );
    }

    match serde_json::to_string(&points) {
        Ok(json) => info!("Profile as JSON: {} bytes", json.len()),
        Err(e) => error!("Failed to serialize profile: {}", e),
    }

    let price0 = calc.calc_price0(neutral, asym);
    info!("Root search anchor (price0): {:.4}", price0);

    let roots = calc.calc_roots(power, asym, neutral, balance * 0.2);
    info!(
        "Value stays within {:.2} between {:.4} and {:.4} (span {:.4})",
        balance * 0.2,
        roots.min,
        roots.max,
        roots.span()
    );

    let observed = &points[14];
    let recovered = calc.calc_neutral(power, asym, observed.position, observed.price);
    info!(
        "Position {:.4} at {:.2} implies neutral {:.6}",
        observed.position, observed.price, recovered
    );

    let moved =
        calc.calc_neutral_from_value(power, asym, neutral, observed.value * 1.5, observed.price);
    info!(
        "Raising value to {:.2} moves neutral to {:.4}",
        observed.value * 1.5,
        moved
    );
}
