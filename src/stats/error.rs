use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("section {0} has never been accessed")]
    SectionNotFound(String),
    #[error("section {0} needs at least two accesses before a rate exists")]
    InsufficientData(String),
    #[error("no section can be derived from url {0}")]
    MalformedUrl(String),
}
