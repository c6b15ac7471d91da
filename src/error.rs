//! Input validation errors.
//!
//! Construction heuristics never fail: every problem that passes
//! [`Problem::new`](crate::models::Problem::new) can be solved. All failure
//! modes are therefore detected up front, before any route is built.

use thiserror::Error;

/// Failure to parse a coordinate column of the form `(x,y)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointParseError {
    /// The text is not wrapped in `(` and `)`.
    #[error("coordinate `{0}` must be wrapped in parentheses")]
    MissingParentheses(String),
    /// The text does not contain exactly two comma-separated components.
    #[error("coordinate `{0}` must have exactly two components")]
    WrongArity(String),
    /// A component is not a valid floating point number.
    #[error("coordinate component `{0}` is not a number")]
    InvalidNumber(String),
}

/// A load set that cannot be handed to the construction heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The problem contains no loads.
    #[error("problem contains no loads")]
    Empty,
    /// Two loads share the same id.
    #[error("load id {id} appears more than once")]
    DuplicateId {
        /// The repeated id.
        id: usize,
    },
    /// A load uses id 0, which is reserved for the depot.
    #[error("load id 0 is reserved for the depot")]
    ReservedId,
    /// A pickup or dropoff coordinate is NaN or infinite.
    #[error("load {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending load.
        id: usize,
    },
    /// A coordinate column could not be parsed.
    #[error(transparent)]
    MalformedPoint(#[from] PointParseError),
}
