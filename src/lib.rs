//! i18n-matrix
//!
//! ロケールを優先度順のバッチに分割し、CI のジョブマトリクス (JSON) を生成する

pub mod batch;
pub mod config;
pub mod error;
pub mod locale;
pub mod matrix;
pub mod pipeline;
pub mod tiers;

mod test_utils;

pub use batch::{
    Batch,
    BatchError,
    BatchPlan,
    generate_batches,
    generate_tiered_batches,
    plan_batches,
};
pub use error::Error;
pub use locale::LocaleId;
pub use matrix::{
    Matrix,
    MatrixEntry,
    MatrixError,
    ResourceIndex,
    ResourceMapping,
    ResourceNames,
    build_matrix,
    print_matrix,
};
pub use pipeline::emit_matrix;
pub use tiers::{
    PriorityTiers,
    Tier,
};
