use bonding_curve_rs::prelude::*;
use std::sync::Arc;
use std::thread;

fn drive(curve: &dyn BondingCurve, balance: f64, asym: f64, neutral: f64, price: f64) -> f64 {
    let power = curve.calc_power(neutral, balance, asym);
    let position = curve.calc_position(power, asym, neutral, price);
    curve.calc_neutral(power, asym, position, price)
}

#[test]
fn test_id() {
    let calc = EllipticalCalculus::new(0.1).unwrap();
    assert_eq!(BondingCurve::id(&calc), ELLIPTICAL_ID);
    assert_eq!(ELLIPTICAL_ID, "elliptical");
}

#[test]
fn test_driver_round_trip_through_trait_object() {
    let calc = EllipticalCalculus::new(0.2).unwrap();
    let neutral = drive(&calc, 1_000.0, 0.25, 50.0, 53.0);
    assert!((neutral - 50.0).abs() / 50.0 < 1e-6);
}

#[test]
fn test_shared_between_threads() {
    let calc = Arc::new(EllipticalCalculus::new(0.1).unwrap());
    let expected = calc.calc_roots(100.0, 0.2, 1000.0, 30.0);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calc = Arc::clone(&calc);
            thread::spawn(move || calc.calc_roots(100.0, 0.2, 1000.0, 30.0))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_inverse_queries_never_fail() {
    let calc = EllipticalCalculus::new(0.1).unwrap();
    for value in [-500.0, -1.0, 0.0, 1.0, 50.0, 500.0] {
        let neutral = calc.calc_neutral_from_value(100.0, 0.3, 1000.0, value, 1040.0);
        assert!(neutral.is_finite());
    }
    for position in [-1e6, -1.0, 0.0, 1.0, 1e6] {
        let price = calc.calc_price_from_position(100.0, 0.3, 1000.0, position);
        assert!(price.is_finite());
        assert!((price - 1000.0).abs() <= 100.0 + 1e-9);
    }
}
