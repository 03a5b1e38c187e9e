use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("functional dependency has an empty left-hand side")]
    EmptyLhs,
    #[error("functional dependency has an empty right-hand side")]
    EmptyRhs,
    #[error("functional dependency {0} is trivial: every right-hand attribute already appears on the left")]
    Trivial(String),
}
