use bonding_curve_rs::prelude::*;

#[test]
fn test_linear_functions_converge_to_constant() {
    for c in [0.37, 1.0, 17.5, 999.999, 123_456.0] {
        let root = numeric_search(c / 3.0, c * 4.0, |x| x - c);
        assert!((root - c).abs() / c < 1e-8, "c {} root {}", c, root);
    }
}

#[test]
fn test_anchor_root_needs_no_iterations() {
    let result = numeric_search_with(2.5, 10.0, &SearchConfig::default(), |x| x - 2.5);
    assert_eq!(result.root, 2.5);
    assert_eq!(result.iterations, 0);
}

#[test]
fn test_bisection_iteration_count() {
    // bracket [1, 2] halves below 1e-8 relative in under 30 evaluations
    let result = numeric_search_with(1.0, 2.0, &SearchConfig::default(), |x| x * x - 2.0);
    assert!(result.converged);
    assert!(result.iterations <= 30);
    assert!((result.root - 2.0f64.sqrt()).abs() < 1e-7);
}

#[test]
fn test_looser_accuracy_takes_fewer_iterations() {
    let tight = numeric_search_with(1.0, 2.0, &SearchConfig::default(), |x| x - 1.7);
    let loose = numeric_search_with(
        1.0,
        2.0,
        &SearchConfig::new().with_accuracy(1e-3),
        |x| x - 1.7,
    );
    assert!(loose.iterations < tight.iterations);
    assert!((loose.root - 1.7).abs() < 2e-3);
}
