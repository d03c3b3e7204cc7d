use totsu_core::solver::SolverError;

/// Catenary problem errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatenaryError
{
    /// Fewer than two nodes requested.
    TooFewNodes,
    /// Chain length that is not positive and finite.
    BadLength,
    /// Endpoint coordinate that is not finite.
    BadBounds,
    /// Chain length shorter than the endpoint distance.
    TooShort,

    /// Failure reported by [`totsu_core::solver::Solver`].
    Solver(SolverError),
}

impl core::fmt::Display for CatenaryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            CatenaryError::TooFewNodes => write!(f, "TooFewNodes: at least two nodes are required"),
            CatenaryError::BadLength   => write!(f, "BadLength: chain length must be positive and finite"),
            CatenaryError::BadBounds   => write!(f, "BadBounds: endpoint coordinates must be finite"),
            CatenaryError::TooShort    => write!(f, "TooShort: chain length is shorter than the endpoint distance"),
            CatenaryError::Solver(e)   => write!(f, "Solver: {}", e),
        }
    }
}

//

impl From<SolverError> for CatenaryError
{
    fn from(err: SolverError) -> Self
    {
        CatenaryError::Solver(err)
    }
}

//

impl std::error::Error for CatenaryError {}
