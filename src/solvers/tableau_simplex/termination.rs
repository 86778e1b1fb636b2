#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Iterating,
    Solved,
    Unbounded,
    MaxIterationsReached,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        *self != Status::Iterating
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let msg = match self {
            Status::Iterating => "iterating",
            Status::Solved => "solved",
            Status::Unbounded => "unbounded",
            Status::MaxIterationsReached => "iteration limit reached",
        };
        msg.fmt(f)
    }
}

/// Decides at the top of each round whether the loop halts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TerminationChecker {
    max_iterations: usize,
}

impl TerminationChecker {
    pub fn new(max_iterations: usize) -> Self {
        TerminationChecker { max_iterations }
    }

    /// The iteration bound wins over `solved`, which wins over `unbounded`.
    pub fn check(&self, iteration: usize, solved: bool, unbounded: bool) -> Status {
        match () {
            _ if iteration > self.max_iterations => Status::MaxIterationsReached,
            _ if solved => Status::Solved,
            _ if unbounded => Status::Unbounded,
            _ => Status::Iterating,
        }
    }
}
