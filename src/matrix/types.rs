use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::LocaleId;

/// Locale identifier to the resources synchronized for it.
pub type ResourceMapping = BTreeMap<LocaleId, ResourceNames>;

/// One resource name or several, as written in the mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResourceNames {
    One(String),
    Many(Vec<String>),
}

impl ResourceNames {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        };
        names.iter().map(String::as_str)
    }
}

impl From<&str> for ResourceNames {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<Vec<String>> for ResourceNames {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

/// The document consumed by the CI job-matrix feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub include: Vec<MatrixEntry>,
}

/// One job variant. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub id: usize,
    pub name: String,
    /// Comma-joined locale identifiers, copied from the batch unchanged.
    pub locales: String,
    /// Comma-joined, de-duplicated resource names.
    pub resources: String,
}
