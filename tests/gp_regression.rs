//! End-to-end tests: text-format input, fit, predict, error summary.

use predecir::gaussian_process::GaussianProcessRegressor;
use predecir::metrics::mse;
use predecir::primitives::Matrix;

#[test]
fn fit_predict_recovers_linear_function() {
    // y = x sampled on a 0.5 grid; predict at interior midpoints.
    let train_x: Vec<f64> = (0..13).map(|i| i as f64 * 0.5).collect();
    let train_y = train_x.clone();
    let n = train_x.len();
    let x = Matrix::from_vec(n, 1, train_x).expect("valid");
    let y = Matrix::from_vec(n, 1, train_y).expect("valid");

    let mut model = GaussianProcessRegressor::new()
        .with_gamma(1.0)
        .with_beta(0.01);
    model.fit(&x, &y).expect("consistent training data");

    let test_x: Vec<f64> = (0..9).map(|i| 0.75 + i as f64 * 0.5).collect();
    let truth = Matrix::from_vec(9, 1, test_x.clone()).expect("valid");
    let x_test = Matrix::from_vec(9, 1, test_x).expect("valid");

    let (mean, cov) = model.predict(&x_test).expect("fitted model");
    assert_eq!(mean.shape(), (9, 1));
    assert_eq!(cov.shape(), (9, 9));

    let err = mse(&mean, &truth).expect("same shape");
    assert!(err < 0.05, "interpolation MSE too large: {err}");

    // Predictive variances sit on the covariance diagonal and stay
    // non-negative for a regularized kernel.
    for i in 0..9 {
        assert!(cov.get(i, i) >= 0.0, "negative variance at {i}");
    }
}

#[test]
fn text_stream_drives_full_regression() {
    // Train and test pairs read back to back from one stream.
    let input = "\
        5 1  0.0 1.0 2.0 3.0 4.0\n\
        5 1  0.0 2.0 4.0 6.0 8.0\n\
        2 1  1.5 2.5\n\
        2 1  3.0 5.0\n";
    let mut stream = input.as_bytes();

    let x = Matrix::read_from(&mut stream).expect("train inputs");
    let y = Matrix::read_from(&mut stream).expect("train targets");
    let x_test = Matrix::read_from(&mut stream).expect("test inputs");
    let y_test = Matrix::read_from(&mut stream).expect("test targets");

    assert_eq!(x.shape(), (5, 1));
    assert_eq!(y_test.shape(), (2, 1));

    let mut model = GaussianProcessRegressor::new()
        .with_gamma(0.5)
        .with_beta(0.01);
    model.fit(&x, &y).expect("consistent training data");
    let (mean, _) = model.predict(&x_test).expect("fitted model");

    let err = mse(&mean, &y_test).expect("same shape");
    assert!(err < 0.5, "regression MSE too large: {err}");
}

#[test]
fn predictions_round_trip_through_text_format() {
    let x = Matrix::from_vec(3, 1, vec![0.0, 1.0, 2.0]).expect("valid");
    let y = Matrix::from_vec(3, 1, vec![0.5, 1.5, 2.5]).expect("valid");
    let mut model = GaussianProcessRegressor::new()
        .with_gamma(1.0)
        .with_beta(0.01);
    model.fit(&x, &y).expect("consistent training data");

    let x_test = Matrix::from_vec(2, 1, vec![0.5, 1.5]).expect("valid");
    let (mean, _) = model.predict(&x_test).expect("fitted model");

    let serialized = format!("2 1\n{mean}");
    let mut stream = serialized.as_bytes();
    let reread = Matrix::read_from(&mut stream).expect("well-formed stream");
    assert_eq!(reread.shape(), mean.shape());
    for i in 0..2 {
        assert!(
            (reread.get(i, 0) - mean.get(i, 0)).abs() <= 5e-4,
            "round trip drifted beyond 3-decimal precision"
        );
    }
}
