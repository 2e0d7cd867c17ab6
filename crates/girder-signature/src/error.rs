use thiserror::Error;

pub type Result<T> = std::result::Result<T, SignatureError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("malformed signature `{input}` at offset {offset}")]
    Malformed { input: String, offset: usize },
    #[error("trailing characters after signature `{input}` at offset {offset}")]
    Trailing { input: String, offset: usize },
}
