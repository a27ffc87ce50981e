use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors produced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Failed to check a connection out of the pool.
    #[error("database connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The underlying Diesel query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored value violated a domain type constraint.
    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),
    /// The bounded id-probe loop ran out of attempts.
    #[error("could not allocate an identifier for {table} after {attempts} attempts")]
    AllocationExhausted { table: &'static str, attempts: u32 },
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
