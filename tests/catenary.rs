use float_eq::assert_float_eq;
use kensui::prelude::*;
use kensui::*;

type La = FloatGeneric<f64>;

type ASolver = Solver<La>;

//

#[test]
fn test_catenary1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((0., 0.), (1., 0.), 11, 2.).unwrap();

    let s = ASolver::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-5;
    });
    let (x, y) = solve_catenary(s, &chain).unwrap();

    assert_eq!(x.len(), 11);
    assert_eq!(y.len(), 11);

    // ends pinned at the boundary values
    assert_float_eq!(x[0], 0., abs <= 1e-3);
    assert_float_eq!(y[0], 0., abs <= 1e-3);
    assert_float_eq!(x[10], 1., abs <= 1e-3);
    assert_float_eq!(y[10], 0., abs <= 1e-3);

    // symmetric chain sags at the middle
    assert_float_eq!(x[5], 0.5, abs <= 1e-2);
    assert!(y[5] < -0.7);
    assert!(y[5] > -0.9);

    // no segment stretches beyond its share of the length
    let h = chain.seg();
    for k in 0..10 {
        let seg = (x[k + 1] - x[k]).hypot(y[k + 1] - y[k]);
        assert!(seg <= h + 1e-3);
    }
}

//

#[test]
fn test_catenary_sag()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((0., 0.), (1., 0.), 51, 2.).unwrap();

    let s = ASolver::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-3;
    });
    let (x, y) = solve_catenary(s, &chain).unwrap();

    assert_float_eq!(x[0], 0., abs <= 1e-2);
    assert_float_eq!(y[0], 0., abs <= 1e-2);
    assert_float_eq!(x[50], 1., abs <= 1e-2);
    assert_float_eq!(y[50], 0., abs <= 1e-2);

    // the lowest node is near the middle of a symmetric chain
    let mut k_min = 0;
    for k in 0..51 {
        if y[k] < y[k_min] {
            k_min = k;
        }
    }
    assert!(k_min >= 22 && k_min <= 28);
    assert!(y[k_min] < -0.6);
    assert!(y[k_min] > -0.9);

    let h = chain.seg();
    for k in 0..50 {
        let seg = (x[k + 1] - x[k]).hypot(y[k + 1] - y[k]);
        assert!(seg <= h + 1e-2);
    }
}

//

#[test]
fn test_catenary_skew()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((0., 0.), (2., -0.5), 21, 3.).unwrap();

    let s = ASolver::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-3;
    });
    let (x, y) = solve_catenary(s, &chain).unwrap();

    assert_float_eq!(x[0], 0., abs <= 1e-2);
    assert_float_eq!(y[0], 0., abs <= 1e-2);
    assert_float_eq!(x[20], 2., abs <= 1e-2);
    assert_float_eq!(y[20], -0.5, abs <= 1e-2);

    // gravity keeps the chain taut
    let mut arclen = 0.;
    for k in 0..20 {
        arclen += (x[k + 1] - x[k]).hypot(y[k + 1] - y[k]);
    }
    assert!(arclen <= chain.length() + 1e-2);
    assert!(arclen >= chain.length() * 0.99);

    // nodes follow the closed-form curve
    let cf = ClosedForm::fit(&chain).unwrap();
    for k in 0..21 {
        assert_float_eq!(y[k], cf.y(x[k]), abs <= 0.1);
    }
}

//

#[test]
fn test_catenary_vertical()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // both ends on one vertical line
    let chain = Chain::new((0., 0.), (0., -0.5), 11, 1.).unwrap();

    let s = ASolver::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-4;
    });
    let (x, y) = solve_catenary(s, &chain).unwrap();

    // the chain folds straight down and back up
    assert_float_eq!(x.as_slice(), [0.; 11].as_ref(), abs_all <= 1e-2);
    assert_float_eq!(y[0], 0., abs <= 1e-2);
    assert_float_eq!(y[10], -0.5, abs <= 1e-2);

    let mut y_min = y[0];
    for k in 0..11 {
        if y[k] < y_min {
            y_min = y[k];
        }
    }
    assert_float_eq!(y_min, -0.7, abs <= 1e-2);
}

//

#[test]
fn test_catenary_low_slack()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // barely longer than the span
    let chain = Chain::new((0., 0.), (1., 0.), 11, 1.05).unwrap();

    let s = ASolver::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-4;
    });
    let (_x, y) = solve_catenary(s, &chain).unwrap();

    assert_float_eq!(y[0], 0., abs <= 1e-2);
    assert_float_eq!(y[10], 0., abs <= 1e-2);
    assert!(y[5] < -0.08);
    assert!(y[5] > -0.2);
}

//

#[test]
fn test_catenary_refine()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // boundary conditions survive refinement
    for n in [11, 22] {
        let chain = Chain::new((0., 0.), (1., 0.), n, 2.).unwrap();

        let s = ASolver::new().par(|p| {
            p.max_iter = Some(1_000_000);
            p.eps_acc = 1e-4;
        });
        let (x, y) = solve_catenary(s, &chain).unwrap();

        assert_float_eq!(x[0], 0., abs <= 1e-2);
        assert_float_eq!(y[0], 0., abs <= 1e-2);
        assert_float_eq!(x[n - 1], 1., abs <= 1e-2);
        assert_float_eq!(y[n - 1], 0., abs <= 1e-2);
    }
}

//

#[test]
fn test_catenary_iter_out()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((0., 0.), (1., 0.), 31, 2.).unwrap();

    // a tiny iteration cap makes the solver give up, and the error is passed through
    let s = ASolver::new().par(|p| {
        p.max_iter = Some(10);
    });
    let rslt = solve_catenary(s, &chain);
    assert_eq!(rslt.unwrap_err(), CatenaryError::Solver(SolverError::ExcessIter));
}

//

#[test]
fn test_catenary_reject()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // too short to span the endpoints
    let rslt = Chain::new((0., 0.), (1., 0.), 5, 0.5);
    assert_eq!(rslt.unwrap_err(), CatenaryError::TooShort);

    // a single node cannot hang
    let rslt = Chain::new((0., 0.), (1., 0.), 1, 2.);
    assert_eq!(rslt.unwrap_err(), CatenaryError::TooFewNodes);

    // nonpositive and nonfinite lengths
    let rslt = Chain::new((0., 0.), (1., 0.), 5, 0.);
    assert_eq!(rslt.unwrap_err(), CatenaryError::BadLength);
    let rslt = Chain::new((0., 0.), (1., 0.), 5, f64::NAN);
    assert_eq!(rslt.unwrap_err(), CatenaryError::BadLength);

    // nonfinite coordinates
    let rslt = Chain::new((0., f64::INFINITY), (1., 0.), 5, 2.);
    assert_eq!(rslt.unwrap_err(), CatenaryError::BadBounds);
}
