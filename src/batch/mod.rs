//! Batch generation: splits an ordered locale set into fixed-size batches.
mod error;
mod generator;
mod types;

pub use error::BatchError;
pub use generator::{
    generate_batches,
    generate_tiered_batches,
    plan_batches,
};
pub use types::{
    Batch,
    BatchPlan,
};
