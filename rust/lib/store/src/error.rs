use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// One message per failed rule, collected in form order. The
    /// triggering mutation is aborted with no state change.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Snapshot could not be read or written.
    #[error("persistence error: {0}")]
    Persist(String),

    /// Snapshot (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Export/report rendering failure.
    #[error("export error: {0}")]
    Export(String),
}
