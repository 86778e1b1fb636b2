use crate::{config::Config, problem::Problem, solution::Solution};

/// Malformed input or configuration, detected before any pivoting.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NoVariables,
    ConstraintWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    RhsLength {
        expected: usize,
        found: usize,
    },
    NegativeRhs {
        row: usize,
        value: f64,
    },
    NonFinite {
        row: usize,
        col: usize,
    },
    ZeroIterationBound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::NoVariables => write!(f, "objective has no variables"),
            ConfigError::ConstraintWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "constraint {} has {} coefficients, expected {}",
                row + 1,
                found,
                expected
            ),
            ConfigError::RhsLength { expected, found } => write!(
                f,
                "{} right-hand side values for {} constraints",
                found, expected
            ),
            ConfigError::NegativeRhs { row, value } => write!(
                f,
                "constraint {} has negative right-hand side {}",
                row + 1,
                value
            ),
            ConfigError::NonFinite { row, col } => {
                write!(f, "non-finite value at row {}, column {}", row + 1, col + 1)
            }
            ConfigError::ZeroIterationBound => write!(f, "iteration bound must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Configuration(ConfigError),
    /// The pivot cell was zero when the row reduction was attempted.
    DegeneratePivot { row: usize, col: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Configuration(err) => write!(f, "invalid configuration: {}", err),
            Error::DegeneratePivot { row, col } => {
                write!(f, "zero pivot at row {}, column {}", row + 1, col + 1)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Configuration(err) => Some(err),
            Error::DegeneratePivot { .. } => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Configuration(err)
    }
}

pub trait SolverTryNew<T> {
    fn try_new(problem: &Problem, config: Config) -> Result<T, Error>;
}

pub trait Solver {
    fn solve(&mut self) -> Result<Solution, Error>;
}
