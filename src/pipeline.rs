//! The full run: settings → batches → matrix on the output stream.

use std::io::Write;

use crate::batch::plan_batches;
use crate::config::MatrixSettings;
use crate::error::Error;
use crate::matrix::{
    Matrix,
    ResourceMapping,
    print_matrix,
};

/// Batches the configured locales and writes the job matrix to `out`.
///
/// Nothing is written unless every step succeeds.
///
/// # Errors
/// Any [`BatchError`](crate::batch::BatchError) or
/// [`MatrixError`](crate::matrix::MatrixError), wrapped in [`Error`].
pub fn emit_matrix<W: Write>(
    settings: &MatrixSettings,
    resources: &ResourceMapping,
    out: W,
) -> Result<Matrix, Error> {
    let plan = plan_batches(
        settings.batch_size,
        settings.max_parallel,
        settings.flat_locales(),
        &settings.tiers,
    )?;
    tracing::info!(
        batches = plan.batches.len(),
        max_parallel = plan.max_parallel,
        "Batch plan ready"
    );

    Ok(print_matrix(&plan.batches, resources, out)?)
}
