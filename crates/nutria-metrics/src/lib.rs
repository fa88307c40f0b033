//! nutria-metrics
//!
//! Clinical indices derived from a parsed [`PatientRecord`]: BMI and its
//! class, screening-score band, nutrient goal vs intake, plus the panels the
//! dashboard charts. Pure functions over a borrowed record; nothing here
//! fails or mutates the record. Missing inputs yield `None` or zero.
//!
//! Which sections and fields are read is described by a
//! [`RecordVocabulary`].

pub mod anthropometry;
pub mod biochemistry;
pub mod bmi;
pub mod derived;
pub mod error;
pub mod nutrients;
pub mod patient;
pub mod prescription;
pub mod screening;
pub mod summary;
pub mod vocabulary;

pub use derived::DerivedMetrics;
pub use error::MetricsError;
pub use nutria_core::PatientRecord;
pub use summary::AssessmentSummary;
pub use vocabulary::RecordVocabulary;
