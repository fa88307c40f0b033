//! nutria-core
//!
//! Typed model of a nutritional assessment record and the parser that
//! builds it from section-delimited text. Pure, no I/O.

pub mod error;
pub mod models;
pub mod parser;

pub use error::ParseError;
pub use models::record::PatientRecord;
pub use models::section::Section;
pub use models::value::Value;
