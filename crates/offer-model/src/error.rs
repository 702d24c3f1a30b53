use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown cleaning profile: {0} (expected `standard` or `canonical`)")]
    UnknownProfile(String),
    #[error("boolean token `{0}` is listed as both true and false")]
    ConflictingToken(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
