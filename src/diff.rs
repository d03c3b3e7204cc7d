use num_traits::{Zero, One};
use totsu::MatBuild;
use totsu_core::{LinAlgEx, MatType};

//

/// Finite-difference operator.
///
/// Returns the `(n - 1) x n` [`MatBuild`] matrix `D` such that
/// `(D x)[k] = x[k + 1] - x[k]`:
/// each row `k` holds `-1` at column `k`, `+1` at column `k + 1` and `0` elsewhere.
/// * `n` is the number of nodes, at least 2.
pub fn diff_mat<L: LinAlgEx>(n: usize) -> MatBuild<L>
{
    assert!(n >= 2);

    MatBuild::new(MatType::General(n - 1, n))
    .by_fn(|r, c| {
        if c == r {
            -L::F::one()
        }
        else if c == r + 1 {
            L::F::one()
        }
        else {
            L::F::zero()
        }
    })
}

//

#[test]
fn test_diff_mat1()
{
    use totsu_core::FloatGeneric;

    type La = FloatGeneric<f64>;

    let d = diff_mat::<La>(4);

    assert_eq!(d.size(), (3, 4));

    let expect = [
        [-1., 1., 0., 0.],
        [0., -1., 1., 0.],
        [0., 0., -1., 1.],
    ];
    for r in 0.. 3 {
        for c in 0.. 4 {
            assert_eq!(d[(r, c)], expect[r][c]);
        }
    }
}

#[test]
fn test_diff_mat2()
{
    use totsu_core::FloatGeneric;

    type La = FloatGeneric<f64>;

    let d = diff_mat::<La>(2);

    assert_eq!(d.size(), (1, 2));
    assert_eq!(d[(0, 0)], -1.);
    assert_eq!(d[(0, 1)], 1.);
}
