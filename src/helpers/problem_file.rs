//! Plain-text problem definitions.
//!
//! The first non-blank line holds the objective coefficients. Every following non-blank
//! line is one `<=` constraint: its coefficients followed by the right-hand side.
//!
//! ```text
//! -3 -5
//! 1 0 4
//! 0 2 12
//! 3 2 18
//! ```

use std::io::BufRead;

use log::debug;

use crate::problem::Problem;

#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    /// A token on the given (1-based) line is not a number.
    BadNumber { line: usize, token: String },
    MissingObjective,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "failed to read problem: {}", err),
            ParseError::BadNumber { line, token } => {
                write!(f, "line {}: '{}' is not a number", line, token)
            }
            ParseError::MissingObjective => write!(f, "no objective function line"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err)
    }
}

#[derive(Debug)]
pub struct ProblemFile {
    pub problem: Problem,
}

impl ProblemFile {
    /// Reads a problem. Dimensions are not checked here, see [`Problem::validate`].
    pub fn parse<R: BufRead>(input: R) -> Result<ProblemFile, ParseError> {
        let mut objective = None;
        let mut constraints = vec![];
        let mut rhs = vec![];

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let values = parse_line(&line, idx + 1)?;
            if values.is_empty() {
                continue;
            }

            if objective.is_none() {
                objective = Some(values);
            } else if let Some((&b, coeffs)) = values.split_last() {
                constraints.push(coeffs.to_vec());
                rhs.push(b);
            }
        }

        let objective = objective.ok_or(ParseError::MissingObjective)?;
        debug!(
            "parsed problem: vars: {}, constraints: {}",
            objective.len(),
            constraints.len()
        );

        Ok(ProblemFile {
            problem: Problem {
                objective,
                constraints,
                rhs,
            },
        })
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<Vec<f64>, ParseError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| ParseError::BadNumber {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}
