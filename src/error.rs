use thiserror::Error;

use crate::batch::BatchError;
use crate::config::ConfigError;
use crate::matrix::MatrixError;

/// Any failure of a full run, from settings to written matrix.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
