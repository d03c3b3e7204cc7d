use float_eq::assert_float_eq;
use kensui::prelude::*;
use kensui::*;

use totsu_core::solver::{Cone, Operator};

type La = FloatGeneric<f64>;

type ASolver = Solver<La>;

//

fn dense_op<O: Operator<La>>(op: &O) -> Vec<f64>
{
    let (m, n) = op.size();
    let mut mat = vec![0.; m * n];
    let mut e = vec![0.; n];
    let mut col = vec![0.; m];

    for c in 0..n {
        e[c] = 1.;
        op.op(1., &e, 0., &mut col);
        e[c] = 0.;
        for r in 0..m {
            mat[r * n + c] = col[r];
        }
    }

    mat
}

//

#[test]
fn test_form_data()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((0., 0.), (1.5, -0.5), 3, 2.5).unwrap();

    let mut prob = ProbCatenary::<La>::new(&chain);
    let (op_c, op_a, op_b, _cone, _w) = prob.problem();

    assert_eq!(op_c.size(), (6, 1));
    assert_eq!(op_a.size(), (10, 6));
    assert_eq!(op_b.size(), (10, 1));

    // minimize the sum of the node heights
    let vec_f = vec![
        0., 0., 0.,
        1., 1., 1.,
    ];
    assert_float_eq!(dense_op(&op_c), vec_f, abs_all <= 1e-12);

    // one second-order cone of [segment share; node differences] per segment,
    // then the four pinned boundary coordinates
    let mat_a = vec![
        0., 0., 0., 0., 0., 0.,
        1., -1., 0., 0., 0., 0.,
        0., 0., 0., 1., -1., 0.,
        0., 0., 0., 0., 0., 0.,
        0., 1., -1., 0., 0., 0.,
        0., 0., 0., 0., 1., -1.,
        1., 0., 0., 0., 0., 0.,
        0., 0., 1., 0., 0., 0.,
        0., 0., 0., 1., 0., 0.,
        0., 0., 0., 0., 0., 1.,
    ];
    assert_float_eq!(dense_op(&op_a), mat_a, abs_all <= 1e-12);

    let h = chain.seg();
    let vec_b = vec![
        h, 0., 0.,
        h, 0., 0.,
        0., 1.5, 0., -0.5,
    ];
    assert_float_eq!(dense_op(&op_b), vec_b, abs_all <= 1e-12);
}

//

#[test]
fn test_form_match()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((-0.5, 1.), (2., 0.), 7, 4.).unwrap();

    let mut socp = make_socp::<La>(&chain);
    let mut prob = ProbCatenary::<La>::new(&chain);

    {
        let (socp_c, socp_a, socp_b, _, _) = socp.problem();
        let (cat_c, cat_a, cat_b, _, _) = prob.problem();

        assert_eq!(cat_c.size(), socp_c.size());
        assert_eq!(cat_a.size(), socp_a.size());
        assert_eq!(cat_b.size(), socp_b.size());

        assert_float_eq!(dense_op(&cat_c), dense_op(&socp_c), abs_all <= 1e-12);
        assert_float_eq!(dense_op(&cat_a), dense_op(&socp_a), abs_all <= 1e-12);
        assert_float_eq!(dense_op(&cat_b), dense_op(&socp_b), abs_all <= 1e-12);
    }

    // the cones project identically
    let rows = 3 * 6 + 4;
    let mut v = vec![0.; rows];
    for (i, vi) in v.iter_mut().enumerate() {
        *vi = (i * 7 % 11) as f64 - 5.;
    }

    for dual_cone in [false, true] {
        let mut v_socp = v.clone();
        let mut v_cat = v.clone();

        let (_, _, _, mut socp_cone, _) = socp.problem();
        socp_cone.proj(dual_cone, &mut v_socp).unwrap();
        let (_, _, _, mut cat_cone, _) = prob.problem();
        cat_cone.proj(dual_cone, &mut v_cat).unwrap();

        assert_float_eq!(v_cat, v_socp, abs_all <= 1e-12);
    }
}

//

#[test]
fn test_form_solve()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Chain::new((0., 0.), (1., 0.), 11, 2.).unwrap();

    let s = ASolver::new().par(|p| {
        p.max_iter = Some(1_000_000);
        p.eps_acc = 1e-4;
    });
    let mut prob = ProbCatenary::<La>::new(&chain);
    let rslt = s.solve(prob.problem()).unwrap();

    let (x, y) = rslt.0.split_at(11);
    assert_float_eq!(x[0], 0., abs <= 1e-2);
    assert_float_eq!(y[0], 0., abs <= 1e-2);
    assert_float_eq!(x[10], 1., abs <= 1e-2);
    assert_float_eq!(y[10], 0., abs <= 1e-2);
    assert!(y[5] < -0.5);
}
