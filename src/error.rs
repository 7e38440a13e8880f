use thiserror::Error;

#[derive(Error, Debug)]
pub enum PercolationError
{
    /// Lattice that is not a non-empty rectangular 0/1 grid, or a bad probability.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("parameter error: {0}")]
    Parameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PercolationResult<T> = Result<T, PercolationError>;
