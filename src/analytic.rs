use num_traits::Float;
use crate::Chain;

//

/// Closed-form catenary through the endpoints of a chain
///
/// The curve `y(x) = c + a*cosh((x - x0)/a)` fitted so that it passes
/// both endpoints of a [`Chain`] with the chain's arc length.
/// Serves as the reference the discretized solutions can be compared to.
#[derive(Debug, Clone, Copy)]
pub struct ClosedForm<F: Float>
{
    a: F,
    x0: F,
    c: F,
}

impl<F: Float> ClosedForm<F>
{
    /// Fits the curve to a chain.
    ///
    /// Returns the [`ClosedForm`] instance, or `None` when no cosh form
    /// exists: vertical chains (equal endpoint x) and taut chains
    /// (length equal to the endpoint distance) have none.
    /// * `chain` is the validated problem instance.
    pub fn fit(chain: &Chain<F>) -> Option<Self>
    {
        let f1 = F::one();
        let f2 = f1 + f1;

        let ((x1, y1), (x2, y2)) = if chain.begin().0 <= chain.end().0 {
            (chain.begin(), chain.end())
        }
        else {
            (chain.end(), chain.begin())
        };

        let dx = x2 - x1;
        let dy = y2 - y1;
        let length = chain.length();

        if dx <= F::zero() {
            return None;
        }

        // the half-angle t satisfies sinh(t)/t = sqrt(L^2 - dy^2)/dx,
        // which has a positive root only for a slack chain
        let ratio = (length * length - dy * dy).sqrt() / dx;
        if !(ratio > f1) {
            return None;
        }

        let mut lo = F::zero();
        let mut hi = f1;
        while hi.sinh() / hi < ratio {
            hi = hi + hi;
        }

        for _ in 0.. 200 {
            let mid = (lo + hi) / f2;
            if mid.sinh() / mid < ratio {
                lo = mid;
            }
            else {
                hi = mid;
            }

            if hi - lo <= hi * F::epsilon() {
                break;
            }
        }

        let t = (lo + hi) / f2;
        let a = dx / (f2 * t);

        // vertex offset from the endpoint midpoint
        let sb = (dy / (f2 * a * t.sinh())).asinh();
        let x0 = (x1 + x2) / f2 - a * sb;
        let c = y1 - a * ((x1 - x0) / a).cosh();

        Some(ClosedForm {
            a,
            x0,
            c,
        })
    }

    /// Curve height at `x`.
    pub fn y(&self, x: F) -> F
    {
        self.c + self.a * ((x - self.x0) / self.a).cosh()
    }

    /// Curvature parameter `a`.
    pub fn a(&self) -> F
    {
        self.a
    }

    /// Lowest point of the curve.
    pub fn vertex(&self) -> (F, F)
    {
        (self.x0, self.c + self.a)
    }

    /// Arc length along the curve between two x positions.
    pub fn arclen(&self, x_lo: F, x_hi: F) -> F
    {
        self.a * (((x_hi - self.x0) / self.a).sinh() - ((x_lo - self.x0) / self.a).sinh())
    }
}

//

#[test]
fn test_closed_form1()
{
    use float_eq::assert_float_eq;

    let chain = Chain::new((0., 0.), (1., 0.), 51, 2.).unwrap();
    let cf = ClosedForm::fit(&chain).unwrap();

    // passes both endpoints with the requested arc length
    assert_float_eq!(cf.y(0.), 0., abs <= 1e-9);
    assert_float_eq!(cf.y(1.), 0., abs <= 1e-9);
    assert_float_eq!(cf.arclen(0., 1.), 2., abs <= 1e-9);

    // symmetric case sags at the middle
    let (vx, vy) = cf.vertex();
    assert_float_eq!(vx, 0.5, abs <= 1e-9);
    assert_float_eq!(vy, -0.7964, abs <= 1e-3);
}

#[test]
fn test_closed_form2()
{
    use float_eq::assert_float_eq;

    let chain = Chain::new((1., 0.5), (-1., 0.), 11, 3.).unwrap();
    let cf = ClosedForm::fit(&chain).unwrap();

    assert_float_eq!(cf.y(1.), 0.5, abs <= 1e-9);
    assert_float_eq!(cf.y(-1.), 0., abs <= 1e-9);
    assert_float_eq!(cf.arclen(-1., 1.), 3., abs <= 1e-9);
}

#[test]
fn test_closed_form_none()
{
    // vertical chain
    let chain = Chain::new((0., 0.), (0., -0.5), 11, 1.).unwrap();
    assert!(ClosedForm::fit(&chain).is_none());

    // taut chain
    let chain = Chain::new((0., 0.), (1., 0.), 11, 1.).unwrap();
    assert!(ClosedForm::fit(&chain).is_none());
}
