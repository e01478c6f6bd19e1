//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! the bump workflow needs, allowing for a real implementation backed by
//! the `git2` crate and a mock implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result<T>]; implementations map underlying errors (like
/// `git2::Error`) to the appropriate [crate::error::BumpError] variant so
/// the workflow can report which step failed.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): real implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): test implementation for mocking git operations
pub trait Repository: Send + Sync {
    /// Get the OID of the commit at the current HEAD.
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the head commit
    /// * `Err` - If HEAD is unborn, detached without a target, or unreadable
    fn head_oid(&self) -> Result<Oid>;

    /// List the short names of every reference the remote advertises.
    ///
    /// Returns refs of all kinds (branches included), exactly as the
    /// remote reports them. An empty repository yields an empty list.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    fn list_remote_refs(&self, remote: &str) -> Result<Vec<String>>;

    /// Create a lightweight tag at the given OID.
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `oid` - Object ID of the commit to tag
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists locally or the OID is unknown
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Delete a local tag.
    ///
    /// Used to roll back a freshly created tag when the push fails.
    fn delete_tag(&self, name: &str) -> Result<()>;

    /// Push all local tags to the remote.
    ///
    /// Every local tag maps to an identically-named remote tag
    /// (`refs/tags/*:refs/tags/*` semantics).
    ///
    /// # Arguments
    /// * `remote` - Name of the remote to push to (e.g., "origin")
    fn push_tags(&self, remote: &str) -> Result<()>;
}
