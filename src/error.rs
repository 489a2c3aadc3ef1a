use std::backtrace::Backtrace;

use crate::solver::engine::{ConstraintId, VariableId};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("a variable's initial domain must be non-empty")]
    EmptyDomain,
    #[error("value {value} is outside the initial domain of ?{variable}")]
    ValueOutsideDomain { variable: VariableId, value: String },
    #[error("unknown constraint id {0}")]
    UnknownConstraint(ConstraintId),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
