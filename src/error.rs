use thiserror::Error;

/// Unified error type for tagbump operations
///
/// The bump workflow discriminates errors by variant, never by message
/// text: `NoVersionTagsFound` triggers the first-release bootstrap path,
/// every other variant is terminal.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("version string '{0}' does not match the v<major>.<minor>.<bugfix> format")]
    VersionFormat(String),

    #[error("remote '{0}' has no references")]
    NoTagsFound(String),

    #[error("no tags with the expected version format were found")]
    NoVersionTagsFound,

    #[error("pass either --minor or --major, not both")]
    CannotIncrementMajAndMin,

    #[error("invalid version number: {0}")]
    VersionNumber(#[from] std::num::ParseIntError),

    #[error("cannot resolve head: {0}")]
    Head(String),

    #[error("tag operation failed: {0}")]
    Tag(String),

    #[error("remote operation failed: {0}")]
    Remote(String),

    #[error("push failed ({push}); rollback of the local tag also failed ({rollback}), manual cleanup may be required")]
    RollbackFailed { push: String, rollback: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagbump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a head-resolution error with context
    pub fn head(msg: impl Into<String>) -> Self {
        BumpError::Head(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        BumpError::Remote(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }
}
