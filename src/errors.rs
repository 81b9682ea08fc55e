use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackIndexError>;

#[derive(Error, Debug)]
pub enum PackIndexError {
    /// Missing, unreadable or truncated file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pack index: {0}")]
    InvalidFormat(String),

    #[error("Unsupported pack index version: {0}")]
    UnsupportedVersion(u32),

    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("Malformed object ID {input:?}: {reason}")]
    MalformedIdentifier { input: String, reason: String },
}
