use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Feature at index {0} has an empty title")]
    EmptyTitle(usize),

    #[error("Feature at index {0} has an empty description")]
    EmptyDescription(usize),
}
