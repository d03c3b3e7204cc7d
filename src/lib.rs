/*!
Kensui ([懸垂](http://www.decodeunicode.org/en/u+61F8) in Japanese) means hanging.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust finds **the catenary curve of a hanging chain**
by solving a second-order cone program with [`totsu`].

# Formulation

A chain of length \\(L\\) hangs between two fixed points
\\((b_x, b_y)\\) and \\((e_x, e_y)\\).
It is discretized into \\(N\\) nodes joined by \\(N - 1\\) segments,
each of length \\(L \over N - 1\\).
At rest the chain minimizes its potential energy,
which for a uniform chain is proportional to the sum of the node heights.
Relaxing each segment's length from an equality into a norm bound
makes the problem the convex SOCP
\\[
\begin{array}{ll}
{\rm minimize} & \sum_k y_k \\\\
{\rm subject \ to} & \left\| \left[ \begin{array}{c} (Dx)_k \\\\ (Dy)_k \end{array} \right] \right\|_2 \le {L \over N - 1} \quad (k = 0, \ldots, N - 2) \\\\
& x_0 = b_x, \quad x_{N - 1} = e_x, \quad y_0 = b_y, \quad y_{N - 1} = e_y,
\end{array}
\\]
where \\(D\\) is the \\((N - 1) \times N\\) forward difference matrix
(see [`diff_mat`]).
Gravity pulls every slack segment taut,
so the relaxation does not change the solution.

# General usage

1. Describe the hanging chain by [`Chain::new`]: endpoints, number of nodes and length.
   The constructor rejects chains that cannot hang (see [`CatenaryError`]).
1. Choose a [`totsu_core::LinAlgEx`] implementation to use,
   such as [`prelude::FloatGeneric`].
1. Create a [`prelude::Solver`] instance and optionally set its parameters.
1. Invoke [`solve_catenary`] to get the node coordinates.
   Alternatively form the problem yourself with [`make_socp`]
   or the matrix-free [`ProbCatenary`]
   and feed it to [`prelude::Solver::solve`].

# Examples

```
use float_eq::assert_float_eq;
use kensui::prelude::*;
use kensui::*;

//env_logger::init(); // Use any logger crate as `kensui` uses `log` crate.

type La = FloatGeneric<f64>;
type ASolver = Solver<La>;

let chain = Chain::new((0., 0.), (1., 0.), 11, 2.).unwrap();

let s = ASolver::new().par(|p| {
    p.max_iter = Some(200_000);
    p.eps_acc = 1e-4;
});
let (x, y) = solve_catenary(s, &chain).unwrap();

// the ends stay fixed and the middle sags
assert_float_eq!(x[0], 0., abs <= 1e-2);
assert_float_eq!(y[0], 0., abs <= 1e-2);
assert_float_eq!(x[10], 1., abs <= 1e-2);
assert_float_eq!(y[10], 0., abs <= 1e-2);
assert!(y[5] < -0.5);
```

# Behavior over N

Finer discretization does not come for free.
As \\(N\\) grows the SOCP gets larger and worse conditioned,
and the first-order solver needs disproportionately more iterations,
eventually stopping at [`prelude::SolverError::ExcessIter`].
No retry or reformulation is attempted:
the solver's result, converged or not, is what the caller gets.
Keep \\(N\\) moderate, or raise `max_iter` and relax `eps_acc`
at the expense of run time and accuracy.

The continuous curve itself is available in closed form as [`ClosedForm`],
which the discretized solutions can be checked against.

## Other examples

You can find [tests](https://github.com/convexbrain/Kensui/tree/master/tests) of the problems.
A plotting demo is also available in
[demos](https://github.com/convexbrain/Kensui/tree/master/demos).
*/

mod chain;

pub use chain::*;

//

mod error;

pub use error::*;

//

mod diff;

pub use diff::*;

//

mod socp;

pub use socp::*;

//

mod probcatenary;

pub use probcatenary::*;

//

mod analytic;

pub use analytic::*;

//

/// Prelude
pub mod prelude
{
    pub use totsu_core::solver::{Solver, SolverError, SolverParam};
    pub use totsu_core::{FloatGeneric, MatType};
}
