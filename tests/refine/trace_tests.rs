//! tests for the per-run diagnostic trace, exercised through refine()
use refina::refine::config::RefineCfg;
use refina::refine::errors::RefineError;
use refina::refine::point::Point;
use refina::refine::refiner::refine;

type TestResult = Result<(), RefineError>;

#[test]
fn immediate_success_leaves_empty_step_history() -> TestResult {
    let mut point = Point::new(2.0, 2.0);
    let report = refine(&mut point, |_, _| 0.0, RefineCfg::new())?;

    assert_eq!(report.trace.residuals(), &[0.0]);
    assert!(report.trace.step_magnitudes().is_empty());
    assert!(report.trace.convergence_orders().is_empty());
    assert_eq!(report.descent_rate, None);
    Ok(())
}

#[test]
fn first_residual_is_the_initial_evaluation() -> TestResult {
    let mut point = Point::new(1.0, 1.0);
    let report = refine(&mut point, |x, _| x * x - 2.0, RefineCfg::new())?;

    assert_eq!(report.trace.residuals()[0], -1.0);
    Ok(())
}

#[test]
fn orders_lag_step_magnitudes_by_two() -> TestResult {
    let mut point = Point::new(1.0, 1.0);
    let report = refine(&mut point, |x, _| x * x - 2.0, RefineCfg::new())?;

    let steps = report.trace.step_magnitudes().len();
    let orders = report.trace.convergence_orders().len();
    assert!(steps >= 3);
    assert_eq!(orders, steps - 2);
    Ok(())
}

#[test]
fn step_magnitudes_are_positive_and_shrink_overall() -> TestResult {
    let mut point = Point::new(1.0, 1.0);
    let report = refine(&mut point, |x, _| x * x - 2.0, RefineCfg::new())?;

    let steps = report.trace.step_magnitudes();
    assert!(steps.iter().all(|m| m.is_finite() && *m > 0.0));
    assert!(steps[steps.len() - 1] < steps[0]);
    Ok(())
}

#[test]
fn descent_rate_present_after_three_residuals() -> TestResult {
    let mut point = Point::new(1.0, 1.0);
    let report = refine(&mut point, |x, _| x * x - 2.0, RefineCfg::new())?;

    assert!(report.trace.residuals().len() >= 3);
    let rate = report.descent_rate.expect("three residuals recorded");
    assert!(rate.is_finite());
    assert_eq!(report.descent_rate, report.trace.descent_rate());
    Ok(())
}
