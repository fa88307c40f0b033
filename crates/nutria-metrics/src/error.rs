use thiserror::Error;

/// Failures loading a [`RecordVocabulary`](crate::vocabulary::RecordVocabulary).
/// The metric functions themselves never fail.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid vocabulary: {0}")]
    Vocabulary(#[from] serde_json::Error),

    #[error("vocabulary is not a JSON object")]
    NotAnObject,

    #[error("vocabulary config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
