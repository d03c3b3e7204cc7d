use num_traits::Float;
use crate::CatenaryError;

//

/// Hanging chain to be solved for.
///
/// Holds the validated inputs of the problem: two fixed endpoints,
/// the number of discretization nodes and the total chain length.
/// Instances can only be created through [`Chain::new`], so every
/// [`Chain`] describes a feasible problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chain<F: Float>
{
    begin: (F, F),
    end: (F, F),
    nodes: usize,
    length: F,
}

impl<F: Float> Chain<F>
{
    /// Creates a validated instance.
    ///
    /// Returns the [`Chain`] instance, or a [`CatenaryError`] when the inputs
    /// cannot form a solvable chain. No problem is built from rejected inputs.
    /// * `begin` is the coordinate the first node is fixed at.
    /// * `end` is the coordinate the last node is fixed at.
    /// * `nodes` is the number of discretization nodes, at least 2.
    /// * `length` is the total curve length,
    ///   at least the Euclidean distance between `begin` and `end`.
    pub fn new(begin: (F, F), end: (F, F), nodes: usize, length: F) -> Result<Self, CatenaryError>
    {
        if nodes < 2 {
            log::error!("nodes {} must be >= 2", nodes);
            return Err(CatenaryError::TooFewNodes);
        }

        if !(begin.0.is_finite() && begin.1.is_finite() && end.0.is_finite() && end.1.is_finite()) {
            log::error!("begin/end coordinates must be finite");
            return Err(CatenaryError::BadBounds);
        }

        if !length.is_finite() || length <= F::zero() {
            log::error!("length must be positive and finite");
            return Err(CatenaryError::BadLength);
        }

        // NaN coordinates would pass this comparison, hence the check above
        let span = (end.0 - begin.0).hypot(end.1 - begin.1);
        if length < span {
            log::error!("length must be >= distance between endpoints");
            return Err(CatenaryError::TooShort);
        }

        Ok(Chain {
            begin,
            end,
            nodes,
            length,
        })
    }

    /// Coordinate of the first node.
    pub fn begin(&self) -> (F, F)
    {
        self.begin
    }

    /// Coordinate of the last node.
    pub fn end(&self) -> (F, F)
    {
        self.end
    }

    /// Number of discretization nodes.
    pub fn nodes(&self) -> usize
    {
        self.nodes
    }

    /// Total curve length.
    pub fn length(&self) -> F
    {
        self.length
    }

    /// Segment length budget.
    ///
    /// Returns `h = length / (nodes - 1)`,
    /// the maximum Euclidean length of each of the `nodes - 1` segments.
    pub fn seg(&self) -> F
    {
        self.length / F::from(self.nodes - 1).unwrap()
    }

    /// Euclidean distance between the endpoints.
    pub fn span(&self) -> F
    {
        (self.end.0 - self.begin.0).hypot(self.end.1 - self.begin.1)
    }
}

//

#[test]
fn test_chain1()
{
    use float_eq::assert_float_eq;

    let chain = Chain::new((0., 0.), (1., 0.5), 5, 2.).unwrap();

    assert_eq!(chain.nodes(), 5);
    assert_float_eq!(chain.seg(), 0.5, abs <= f64::EPSILON);
    assert_float_eq!(chain.span(), 1.25_f64.sqrt(), abs <= f64::EPSILON);
}

#[test]
fn test_chain_reject()
{
    assert_eq!(Chain::new((0., 0.), (1., 0.), 1, 2.), Err(CatenaryError::TooFewNodes));
    assert_eq!(Chain::new((0., 0.), (1., 0.), 5, 0.5), Err(CatenaryError::TooShort));
    assert_eq!(Chain::new((0., 0.), (1., 0.), 5, 0.), Err(CatenaryError::BadLength));
    assert_eq!(Chain::new((0., 0.), (1., 0.), 5, -1.), Err(CatenaryError::BadLength));
    assert_eq!(Chain::new((0., 0.), (1., 0.), 5, f64::NAN), Err(CatenaryError::BadLength));
    assert_eq!(Chain::new((0., 0.), (1., 0.), 5, f64::INFINITY), Err(CatenaryError::BadLength));
    assert_eq!(Chain::new((0., f64::NAN), (1., 0.), 5, 2.), Err(CatenaryError::BadBounds));

    // taut chain is feasible
    assert!(Chain::new((0., 0.), (1., 0.), 5, 1.).is_ok());
    // coincident endpoints are feasible
    assert!(Chain::new((1., 1.), (1., 1.), 5, 1.).is_ok());
}
