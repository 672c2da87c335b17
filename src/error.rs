use thiserror::Error;

use crate::category::Category;

/// Failure to observe an element through the host's intersection primitive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewportError {
    #[error("intersection observer is not available in this environment")]
    Unsupported,
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

/// The embedded content catalog is malformed.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} bundle has an empty title")]
    EmptyTitle(Category),
    #[error("{0} bundle has no metrics")]
    NoMetrics(Category),
    #[error("{category} metric '{label}' is {percentage}%, expected 0-100")]
    PercentageOutOfRange {
        category: Category,
        label: String,
        percentage: u8,
    },
    #[error("{0} bundle must not list pathways")]
    UnexpectedPathways(Category),
    #[error("{0} bundle is missing its pathways")]
    MissingPathways(Category),
    #[error("protocol has no steps")]
    NoProtocolSteps,
}
