//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! release-sync needs, allowing for multiple implementations including
//! real repositories and a mock for testing.
//!
//! The core never touches git directly; it sees the downstream repository
//! only through the [Repository] trait. Concrete implementations:
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! Most code should depend on the trait rather than a concrete type.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result], mapping underlying errors (like `git2::Error`)
/// to [crate::error::ReleaseSyncError] variants.
pub trait Repository: Send + Sync {
    /// Get all tag names in the repository
    ///
    /// Returns raw tag names as they appear in the tag refs; callers
    /// decide which of them parse as versions.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the commit that newly created tags should point at
    ///
    /// A tag always targets a real commit object; the target is resolved
    /// once and passed explicitly to [Repository::create_tag].
    fn head_oid(&self) -> Result<Oid>;

    /// Create an annotated tag at the given commit
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `target` - Object ID of the commit to tag
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, the target doesn't exist, or
    ///   a git error occurs
    fn create_tag(&self, name: &str, target: Oid) -> Result<()>;
}
