//! CI job matrix emission.
mod emitter;
mod error;
mod index;
mod types;

pub use emitter::{
    build_matrix,
    print_matrix,
    write_matrix,
};
pub use error::MatrixError;
pub use index::ResourceIndex;
pub use types::{
    Matrix,
    MatrixEntry,
    ResourceMapping,
    ResourceNames,
};
