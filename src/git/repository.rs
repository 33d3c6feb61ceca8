use crate::config::TaggerConfig;
use crate::error::{ReleaseSyncError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    tagger: TaggerConfig,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P, tagger: TaggerConfig) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo, tagger })
    }

    /// Clone a remote repository into the given directory
    ///
    /// The checkout only exists to read tag refs and create new ones;
    /// callers typically point this at a temporary directory.
    pub fn clone_from<P: AsRef<Path>>(url: &str, into: P, tagger: TaggerConfig) -> Result<Self> {
        let repo = Git2Repo::clone(url, into)
            .map_err(|e| ReleaseSyncError::remote(format!("Cannot clone '{}': {}", url, e)))?;

        Ok(Git2Repository { repo, tagger })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, tagger: TaggerConfig) -> Self {
        Git2Repository { repo, tagger }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| ReleaseSyncError::tag("HEAD does not point at a commit"))
    }

    fn create_tag(&self, name: &str, target: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(target, None)
            .map_err(|e| ReleaseSyncError::tag(format!("Cannot find target object: {}", e)))?;

        let tagger = git2::Signature::now(&self.tagger.name, &self.tagger.email)?;

        self.repo
            .tag(name, &object, &tagger, name, false)
            .map_err(|e| ReleaseSyncError::tag(format!("Cannot create tag: {}", e)))?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// libgit2 is thread-safe for the read/tag operations used here.
unsafe impl Sync for Git2Repository {}
