mod measurement;



const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {} (±{}), got {}",
        expected,
        TOLERANCE,
        actual
    );
}
