use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The uploaded bytes are not UTF-8 text. The only hard parse failure.
    #[error("record is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),
}
