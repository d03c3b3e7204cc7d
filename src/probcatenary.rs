use std::prelude::v1::*;
use core::marker::PhantomData;
use num_traits::{Zero, One, cast};
use totsu::MatBuild;
use totsu_core::solver::{Solver, SliceLike, Operator, Cone};
use totsu_core::{LinAlgEx, MatOp, MatType, ConeSOC, ConeZero, splitm, splitm_mut};
use crate::Chain;

//

pub struct ProbCatenaryOpC<'a, L: LinAlgEx>
{
    one: MatOp<'a, L>,
}

impl<'a, L: LinAlgEx> Operator<L> for ProbCatenaryOpC<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        let (n, one) = self.one.size();
        assert_eq!(one, 1);

        (n * 2, 1)
    }

    fn op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let (n, _) = self.one.size();

        splitm_mut!(y, (y_x; n), (y_y; n));

        // y_x = b*y_x
        L::scale(beta, &mut y_x);

        // y_y = a*1*x + b*y_y
        self.one.op(alpha, x, beta, &mut y_y);
    }

    fn trans_op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let (n, _) = self.one.size();

        splitm!(x, (_x_x; n), (x_y; n));

        // y = a*1^T*x_y + b*y
        self.one.trans_op(alpha, &x_y, beta, y);
    }

    fn absadd_cols(&self, tau: &mut L::Sl)
    {
        self.one.absadd_cols(tau);
    }

    fn absadd_rows(&self, sigma: &mut L::Sl)
    {
        let (n, _) = self.one.size();

        splitm_mut!(sigma, (_sigma_x; n), (sigma_y; n));

        self.one.absadd_rows(&mut sigma_y);
    }
}

//

pub struct ProbCatenaryOpA<L: LinAlgEx>
{
    n: usize,
    ph_l: PhantomData<L>,
}

impl<L: LinAlgEx> ProbCatenaryOpA<L>
{
    fn bound_cols(&self) -> [usize; 4]
    {
        [0, self.n - 1, self.n, self.n * 2 - 1]
    }
}

impl<L: LinAlgEx> Operator<L> for ProbCatenaryOpA<L>
{
    fn size(&self) -> (usize, usize)
    {
        ((self.n - 1) * 3 + 4, self.n * 2)
    }

    fn op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let n = self.n;
        let m = n - 1;

        for k in 0.. m {
            // cone top rows have no variable coefficient
            let val_t = beta * y.get(k * 3);
            y.set(k * 3, val_t);

            // negated difference rows, x-block then y-block
            let val_dx = alpha * (x.get(k) - x.get(k + 1)) + beta * y.get(k * 3 + 1);
            y.set(k * 3 + 1, val_dx);

            let val_dy = alpha * (x.get(n + k) - x.get(n + k + 1)) + beta * y.get(k * 3 + 2);
            y.set(k * 3 + 2, val_dy);
        }

        // boundary selector rows
        for (i, col) in self.bound_cols().into_iter().enumerate() {
            let val_p = alpha * x.get(col) + beta * y.get(m * 3 + i);
            y.set(m * 3 + i, val_p);
        }
    }

    fn trans_op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let n = self.n;
        let m = n - 1;

        // y = b*y + ...
        L::scale(beta, y);

        for k in 0.. m {
            let val_dx = alpha * x.get(k * 3 + 1);
            let val_y = y.get(k) + val_dx;
            y.set(k, val_y);
            let val_y = y.get(k + 1) - val_dx;
            y.set(k + 1, val_y);

            let val_dy = alpha * x.get(k * 3 + 2);
            let val_y = y.get(n + k) + val_dy;
            y.set(n + k, val_y);
            let val_y = y.get(n + k + 1) - val_dy;
            y.set(n + k + 1, val_y);
        }

        for (i, col) in self.bound_cols().into_iter().enumerate() {
            let val_y = y.get(col) + alpha * x.get(m * 3 + i);
            y.set(col, val_y);
        }
    }

    fn absadd_cols(&self, tau: &mut L::Sl)
    {
        let f1 = L::F::one();

        // each column holds two unit-magnitude nonzeros:
        // interior nodes join two difference rows, end nodes join one
        // difference row and one boundary row
        L::adds(f1 + f1, tau);
    }

    fn absadd_rows(&self, sigma: &mut L::Sl)
    {
        let f1 = L::F::one();
        let f2 = f1 + f1;
        let m = self.n - 1;

        for k in 0.. m {
            let val_dx = sigma.get(k * 3 + 1) + f2;
            sigma.set(k * 3 + 1, val_dx);

            let val_dy = sigma.get(k * 3 + 2) + f2;
            sigma.set(k * 3 + 2, val_dy);
        }

        splitm_mut!(sigma, (_sigma_soc; m * 3), (sigma_p; 4));

        L::adds(f1, &mut sigma_p);
    }
}

//

pub struct ProbCatenaryOpB<'a, L: LinAlgEx>
{
    segs: usize,
    seg: L::F,
    abssum_segs: L::F,
    vec_b: MatOp<'a, L>,
}

impl<'a, L: LinAlgEx> Operator<L> for ProbCatenaryOpB<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        let (p, one) = self.vec_b.size();
        assert_eq!(one, 1);

        (self.segs * 3 + p, 1)
    }

    fn op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let (p, _) = self.vec_b.size();

        let alpha_seg_x = alpha * self.seg * x.get(0);

        for k in 0.. self.segs {
            // cone top entries carry the segment length budget
            let val_t = alpha_seg_x + beta * y.get(k * 3);
            y.set(k * 3, val_t);

            let val_dx = beta * y.get(k * 3 + 1);
            y.set(k * 3 + 1, val_dx);

            let val_dy = beta * y.get(k * 3 + 2);
            y.set(k * 3 + 2, val_dy);
        }

        splitm_mut!(y, (_y_soc; self.segs * 3), (y_p; p));

        // y_p = a*vec_b*x + b*y_p
        self.vec_b.op(alpha, x, beta, &mut y_p);
    }

    fn trans_op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let (p, _) = self.vec_b.size();

        let f1 = L::F::one();

        let mut sum_t = L::F::zero();
        for k in 0.. self.segs {
            sum_t = sum_t + x.get(k * 3);
        }

        // y = a*seg*(sum of cone top entries) + b*y
        let val_y = alpha * self.seg * sum_t + beta * y.get(0);
        y.set(0, val_y);

        splitm!(x, (_x_soc; self.segs * 3), (x_p; p));

        // y = ... + a*vec_b^T*x_p
        self.vec_b.trans_op(alpha, &x_p, f1, y);
    }

    fn absadd_cols(&self, tau: &mut L::Sl)
    {
        let val_tau = tau.get(0) + self.abssum_segs;
        tau.set(0, val_tau);

        self.vec_b.absadd_cols(tau);
    }

    fn absadd_rows(&self, sigma: &mut L::Sl)
    {
        let (p, _) = self.vec_b.size();

        for k in 0.. self.segs {
            let val_sigma = sigma.get(k * 3) + self.seg;
            sigma.set(k * 3, val_sigma);
        }

        splitm_mut!(sigma, (_sigma_soc; self.segs * 3), (sigma_p; p));

        self.vec_b.absadd_rows(&mut sigma_p);
    }
}

//

pub struct ProbCatenaryCone<L: LinAlgEx>
{
    segs: usize,
    cone_soc: ConeSOC<L>,
    cone_zero: ConeZero<L>,
}

impl<L: LinAlgEx> Cone<L> for ProbCatenaryCone<L>
{
    fn proj(&mut self, dual_cone: bool, x: &mut L::Sl) -> Result<(), ()>
    {
        let mut done = 0;

        for _ in 0.. self.segs {
            splitm_mut!(x, (_x_done; done), (x_q; 3));
            done += 3;

            self.cone_soc.proj(dual_cone, &mut x_q)?;
        }

        splitm_mut!(x, (_x_done; done), (x_p; 4));

        self.cone_zero.proj(dual_cone, &mut x_p)?;
        Ok(())
    }

    fn product_group<G: Fn(&mut L::Sl) + Copy>(&self, dp_tau: &mut L::Sl, group: G)
    {
        let mut done = 0;

        for _ in 0.. self.segs {
            splitm_mut!(dp_tau, (_t_done; done), (t_q; 3));
            done += 3;

            self.cone_soc.product_group(&mut t_q, group);
        }

        splitm_mut!(dp_tau, (_t_done; done), (t_p; 4));

        self.cone_zero.product_group(&mut t_p, group);
    }
}

//

/// Discretized catenary as a conic linear program with matrix-free operators
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// The problem is the same as the one [`crate::make_socp`] builds.
/// Its representation as a conic linear program is
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & [0_N; 1_N]^T z \\\\
/// {\rm subject \ to} &
///   \left[ \begin{array}{c}
///   0 \\\\ -G_0 \\\\
///   \vdots \\\\
///   0 \\\\ -G_{N - 2} \\\\
///   A
///   \end{array} \right]
///   z + s =
///   \left[ \begin{array}{c}
///   h \\\\ 0 \\\\
///   \vdots \\\\
///   h \\\\ 0 \\\\
///   b
///   \end{array} \right] \\\\
/// & s \in (\mathcal{Q}^3)^{N - 1} \times \lbrace 0 \rbrace^4,
/// \end{array}
/// \\]
/// where each \\(G_k\\) holds row \\(k\\) of the difference operator against
/// the \\(x\\)- and \\(y\\)-block of \\(z = [x; y]\\) and \\(A\\) holds the four
/// boundary selector rows.
///
/// The operators apply this structure on the fly instead of materializing
/// \\(G_k\\) and \\(A\\). Only the objective ones-vector and the four-element
/// right-hand side \\(b\\) are stored, so the setup cost stays flat as the
/// node count grows, while `ProbSOCP` would build and ship
/// \\(N - 1\\) matrices of \\(2 \times 2N\\) each.
pub struct ProbCatenary<L: LinAlgEx>
{
    n: usize,
    seg: L::F,
    one: MatBuild<L>,
    vec_b: MatBuild<L>,

    w_solver: Vec<L::F>,
}

impl<L: LinAlgEx> ProbCatenary<L>
{
    /// Creates a problem instance from a chain.
    ///
    /// Returns the [`ProbCatenary`] instance.
    /// * `chain` is the validated problem to solve.
    pub fn new(chain: &Chain<L::F>) -> Self
    {
        let n = chain.nodes();

        ProbCatenary {
            n,
            seg: chain.seg(),
            one: MatBuild::new(MatType::General(n, 1))
                 .by_fn(|_, _| L::F::one()),
            vec_b: MatBuild::new(MatType::General(4, 1))
                   .iter_colmaj(&[
                       chain.begin().0, chain.end().0,
                       chain.begin().1, chain.end().1,
                   ]),
            w_solver: Vec::new(),
        }
    }

    /// Generates the problem data structures to be fed to [`Solver::solve`].
    ///
    /// Returns a tuple of operators, a cone and a work slice.
    pub fn problem(&mut self) -> (ProbCatenaryOpC<L>, ProbCatenaryOpA<L>, ProbCatenaryOpB<L>, ProbCatenaryCone<L>, &mut[L::F])
    {
        let op_c = ProbCatenaryOpC {
            one: self.one.as_op(),
        };
        let op_a = ProbCatenaryOpA {
            n: self.n,
            ph_l: PhantomData,
        };
        let op_b = ProbCatenaryOpB {
            segs: self.n - 1,
            seg: self.seg,
            abssum_segs: self.seg * cast(self.n - 1).unwrap(),
            vec_b: self.vec_b.as_op(),
        };

        let cone = ProbCatenaryCone {
            segs: self.n - 1,
            cone_soc: ConeSOC::new(),
            cone_zero: ConeZero::new(),
        };

        self.w_solver.resize(Solver::<L>::query_worklen(op_a.size()), L::F::zero());

        (op_c, op_a, op_b, cone, self.w_solver.as_mut())
    }
}

//

#[cfg(test)]
use totsu_core::FloatGeneric;

#[cfg(test)]
fn dense_op(size: (usize, usize), op: impl Fn(&[f64], &mut[f64])) -> Vec<f64>
{
    let mut mat = vec![0.; size.0 * size.1];
    let mut unit = vec![0.; size.1];
    let mut col = vec![0.; size.0];

    for c in 0.. size.1 {
        unit[c] = 1.;
        op(&unit, &mut col);
        unit[c] = 0.;

        for r in 0.. size.0 {
            mat[r * size.1 + c] = col[r];
        }
    }

    mat
}

#[cfg(test)]
fn assert_operator<O: Operator<FloatGeneric<f64>>>(op: &O)
{
    use float_eq::assert_float_eq;

    let (nr, nc) = op.size();

    let mat = dense_op((nr, nc), |x, y| op.op(1., x, 0., y));

    // trans_op is the adjoint of op
    let mat_t = dense_op((nc, nr), |x, y| op.trans_op(1., x, 0., y));
    for r in 0.. nr {
        for c in 0.. nc {
            assert_float_eq!(mat[r * nc + c], mat_t[c * nr + r], abs <= 1e-12);
        }
    }

    // absadd_cols/absadd_rows accumulate absolute sums
    let mut tau = vec![0.25; nc];
    op.absadd_cols(&mut tau);
    for c in 0.. nc {
        let sum_c: f64 = (0.. nr).map(|r| mat[r * nc + c].abs()).sum();
        assert_float_eq!(tau[c], 0.25 + sum_c, abs <= 1e-12);
    }

    let mut sigma = vec![0.25; nr];
    op.absadd_rows(&mut sigma);
    for r in 0.. nr {
        let sum_r: f64 = (0.. nc).map(|c| mat[r * nc + c].abs()).sum();
        assert_float_eq!(sigma[r], 0.25 + sum_r, abs <= 1e-12);
    }

    // alpha and beta scaling
    let x: Vec<f64> = (0.. nc).map(|i| ((i * 7 % 5) as f64) - 2.).collect();
    let y0: Vec<f64> = (0.. nr).map(|i| ((i * 3 % 7) as f64) - 3.).collect();

    let mut y = y0.clone();
    op.op(2., &x, -0.5, &mut y);
    for r in 0.. nr {
        let kx: f64 = (0.. nc).map(|c| mat[r * nc + c] * x[c]).sum();
        assert_float_eq!(y[r], 2. * kx - 0.5 * y0[r], abs <= 1e-12);
    }

    let xt: Vec<f64> = (0.. nr).map(|i| ((i * 5 % 9) as f64) - 4.).collect();
    let yt0: Vec<f64> = (0.. nc).map(|i| ((i * 2 % 5) as f64) - 1.).collect();

    let mut yt = yt0.clone();
    op.trans_op(2., &xt, -0.5, &mut yt);
    for c in 0.. nc {
        let ktx: f64 = (0.. nr).map(|r| mat[r * nc + c] * xt[r]).sum();
        assert_float_eq!(yt[c], 2. * ktx - 0.5 * yt0[c], abs <= 1e-12);
    }
}

#[test]
fn test_op_c()
{
    type La = FloatGeneric<f64>;

    let chain = Chain::new((0., 0.), (1.5, -0.5), 7, 3.).unwrap();
    let mut prob = ProbCatenary::<La>::new(&chain);
    let (op_c, _op_a, _op_b, _cone, _work) = prob.problem();

    assert_eq!(op_c.size(), (14, 1));
    assert_operator(&op_c);
}

#[test]
fn test_op_a()
{
    type La = FloatGeneric<f64>;

    let chain = Chain::new((0., 0.), (1.5, -0.5), 7, 3.).unwrap();
    let mut prob = ProbCatenary::<La>::new(&chain);
    let (_op_c, op_a, _op_b, _cone, _work) = prob.problem();

    assert_eq!(op_a.size(), (22, 14));
    assert_operator(&op_a);
}

#[test]
fn test_op_b()
{
    type La = FloatGeneric<f64>;

    let chain = Chain::new((0., 0.), (1.5, -0.5), 7, 3.).unwrap();
    let mut prob = ProbCatenary::<La>::new(&chain);
    let (_op_c, _op_a, op_b, _cone, _work) = prob.problem();

    assert_eq!(op_b.size(), (22, 1));
    assert_operator(&op_b);
}
