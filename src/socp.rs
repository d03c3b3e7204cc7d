use std::prelude::v1::*;
use core::fmt::{Debug, LowerExp};
use num_traits::{Zero, One};
use totsu::{MatBuild, ProbSOCP};
use totsu_core::solver::Solver;
use totsu_core::{LinAlgEx, MatType};
use crate::{Chain, CatenaryError, diff_mat};

//

/// Discretized catenary as a second-order cone program.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Returns a [`ProbSOCP`] instance representing
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \sum_i y_i \\\\
/// {\rm subject \ to} & (x_{k+1} - x_k)^2 + (y_{k+1} - y_k)^2 \le h^2 \quad (k = 0, \ldots, N - 2) \\\\
/// & x_0 = {\rm begin}_x, \quad x_{N-1} = {\rm end}_x, \quad y_0 = {\rm begin}_y, \quad y_{N-1} = {\rm end}_y,
/// \end{array}
/// \\]
/// where
/// - variables \\( x, y \in \mathbb{R}^N \\), stacked as \\( z = [x; y] \in \mathbb{R}^{2N} \\)
/// - \\( h = L / (N - 1) \\) is the segment length budget of [`Chain::seg`].
///
/// In standard form the objective is \\( f = [0_N; 1_N] \\),
/// each segment bound becomes the second-order cone constraint
/// \\( \\| G_k z \\|_2 \le h \\) with \\( G_k \in \mathbb{R}^{2 \times 2N} \\)
/// carrying row \\(k\\) of the difference operator [`diff_mat`] against
/// the \\(x\\)-block and the \\(y\\)-block,
/// and the boundary equalities form \\( A z = b \\) with four selector rows.
/// The norm bound relaxes the fixed segment length;
/// gravity keeps every slack segment taut.
pub fn make_socp<L: LinAlgEx>(chain: &Chain<L::F>) -> ProbSOCP<L>
{
    let f0 = L::F::zero();
    let f1 = L::F::one();

    let n = chain.nodes();
    let m = n - 1; // segments
    let nv = n * 2; // x,y stacked
    let p = 4; // boundary equalities

    let vec_f = MatBuild::new(MatType::General(nv, 1))
                .by_fn(|r, _| if r < n {f0} else {f1});

    let mat_d = diff_mat::<L>(n);

    let mut mats_g = vec![MatBuild::new(MatType::General(2, nv)); m];
    for k in 0.. m {
        mats_g[k][(0, k)] = mat_d[(k, k)];
        mats_g[k][(0, k + 1)] = mat_d[(k, k + 1)];
        mats_g[k][(1, n + k)] = mat_d[(k, k)];
        mats_g[k][(1, n + k + 1)] = mat_d[(k, k + 1)];
    }

    let vecs_h = vec![MatBuild::new(MatType::General(2, 1)); m];

    let vecs_c = vec![MatBuild::new(MatType::General(nv, 1)); m];

    let scls_d = vec![chain.seg(); m];

    let mut mat_a = MatBuild::new(MatType::General(p, nv));
    mat_a[(0, 0)] = f1;
    mat_a[(1, n - 1)] = f1;
    mat_a[(2, n)] = f1;
    mat_a[(3, nv - 1)] = f1;

    let vec_b = MatBuild::new(MatType::General(p, 1))
                .iter_colmaj(&[
                    chain.begin().0, chain.end().0,
                    chain.begin().1, chain.end().1,
                ]);

    log::debug!("catenary SOCP: {} nodes, {} segment cones", n, m);

    ProbSOCP::new(vec_f, mats_g, vecs_h, vecs_c, scls_d, mat_a, vec_b)
}

//

/// Formulates and solves the hanging chain described by `chain`.
///
/// Returns the solved node coordinate sequences `(x, y)`,
/// each of length [`Chain::nodes`].
/// A solver failure is wrapped as [`CatenaryError::Solver`] and propagated
/// as-is: no retry, no fallback values.
/// The discrete solution is not guaranteed to converge to the continuous
/// catenary as the node count grows; see the crate documentation.
/// * `solver` is consumed by the solve;
///   adjust [`totsu_core::solver::SolverParam`] via [`Solver::par`] beforehand.
/// * `chain` is the validated problem instance.
pub fn solve_catenary<L: LinAlgEx>(solver: Solver<L>, chain: &Chain<L::F>) -> Result<(Vec<L::F>, Vec<L::F>), CatenaryError>
where L::F: Debug + LowerExp
{
    let n = chain.nodes();

    log::info!("solving catenary: {} nodes", n);

    let mut socp = make_socp(chain);
    let rslt = solver.solve(socp.problem())?;

    let (node_x, node_y) = rslt.0.split_at(n);
    Ok((node_x.to_vec(), node_y.to_vec()))
}
