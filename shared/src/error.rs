use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpinError {
    #[error("wheel has no items")]
    EmptyWheel,
    #[error("item `{id}` has invalid weight {weight}")]
    InvalidWeight { id: String, weight: f64 },
    #[error("duplicate item id `{0}`")]
    DuplicateItem(String),
    #[error("slot {index} is out of range for a wheel with {count} slots")]
    InvalidSlot { index: usize, count: usize },
    #[error("unknown wheel `{0}`")]
    UnknownWheel(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("stored session could not be read: {0}")]
    CorruptState(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}
