//! Builds the `{"include": [...]}` document and writes it out.

use std::collections::HashSet;
use std::io::Write;

use super::{
    Matrix,
    MatrixEntry,
    MatrixError,
    ResourceIndex,
    ResourceMapping,
};
use crate::batch::Batch;
use crate::locale::split_locales;

/// Maps every batch to the resources of its locales.
///
/// Entries follow the batch order. Resources are de-duplicated per batch and listed in
/// the order they are first seen.
///
/// # Errors
/// Returns [`MatrixError::MissingResource`] for the first locale the index cannot resolve.
pub fn build_matrix(batches: &[Batch], index: &ResourceIndex) -> Result<Matrix, MatrixError> {
    let include = batches
        .iter()
        .map(|batch| build_entry(batch, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Matrix { include })
}

/// Resolves the resources of a single batch.
fn build_entry(batch: &Batch, index: &ResourceIndex) -> Result<MatrixEntry, MatrixError> {
    let mut seen = HashSet::new();
    let mut resources = Vec::new();

    for locale in split_locales(&batch.locales) {
        let names = index.lookup(locale).ok_or_else(|| MatrixError::MissingResource {
            batch: batch.name.clone(),
            locale: locale.to_string(),
        })?;
        for name in names {
            if seen.insert(name.as_str()) {
                resources.push(name.as_str());
            }
        }
    }

    tracing::debug!(batch = %batch.name, resources = resources.len(), "Resolved batch resources");

    Ok(MatrixEntry {
        id: batch.id,
        name: batch.name.clone(),
        locales: batch.locales.clone(),
        resources: resources.join(","),
    })
}

/// Writes `matrix` as compact JSON followed by a newline, and nothing else.
///
/// # Errors
/// Serialization or I/O failure.
pub fn write_matrix<W: Write>(matrix: &Matrix, mut out: W) -> Result<(), MatrixError> {
    let mut document = serde_json::to_vec(matrix)?;
    document.push(b'\n');
    out.write_all(&document)?;
    out.flush()?;
    Ok(())
}

/// Builds the matrix for `batches` and writes it to `out`.
///
/// The matrix is complete before the first byte is written, so a lookup failure leaves
/// `out` untouched. The written document is also returned for further use.
///
/// # Errors
/// - a mapping key is ambiguous or a batched locale has no resources
/// - serialization or I/O failure
pub fn print_matrix<W: Write>(
    batches: &[Batch],
    resources: &ResourceMapping,
    out: W,
) -> Result<Matrix, MatrixError> {
    let index = ResourceIndex::new(resources)?;
    let matrix = build_matrix(batches, &index)?;
    write_matrix(&matrix, out)?;

    tracing::debug!(entries = matrix.include.len(), "Matrix written");
    Ok(matrix)
}
