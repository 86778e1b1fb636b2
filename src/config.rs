use rand::Rng;

use crate::{problem::OptimizationDirection, solver::ConfigError};

pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Upper bound (exclusive) of the seeds drawn when none is given.
const SEED_RANGE: u64 = 1 << 23;

/// Solver settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// The core always minimizes; `Maximize` negates the objective on the way in.
    pub direction: OptimizationDirection,
    pub max_iterations: usize,
    /// Seed of the random source breaking ties in the ratio test.
    pub seed: u64,
    /// Dump the tableau through the logger on every iteration.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            direction: OptimizationDirection::Minimize,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: rand::thread_rng().gen_range(0..SEED_RANGE),
            verbose: true,
        }
    }
}

impl Config {
    pub fn with_direction(mut self, direction: OptimizationDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterationBound);
        }
        Ok(())
    }
}
