use crate::error::{ReleaseSyncError, Result};
use crate::git::Repository;
use git2::Oid;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Records created tags and can be armed to fail on a specific tag name,
/// which exercises the orchestrator's fail-fast path.
pub struct MockRepository {
    tags: Vec<String>,
    head: Oid,
    created: Mutex<Vec<(String, Oid)>>,
    fail_on: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            head: Oid::zero(),
            created: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Create a mock with the given existing tag names
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = MockRepository::new();
        repo.tags = tags.into_iter().map(Into::into).collect();
        repo
    }

    /// Set the OID that new tags point at
    pub fn set_head(&mut self, oid: Oid) {
        self.head = oid;
    }

    /// Make create_tag fail when asked to create this tag name
    pub fn fail_on_tag(&mut self, name: impl Into<String>) {
        self.fail_on = Some(name.into());
    }

    /// Tags created through this mock, in creation order
    pub fn created_tags(&self) -> Vec<(String, Oid)> {
        self.created.lock().unwrap().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn head_oid(&self) -> Result<Oid> {
        Ok(self.head)
    }

    fn create_tag(&self, name: &str, target: Oid) -> Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(ReleaseSyncError::tag("simulated creation failure"));
        }

        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), target));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_list_tags() {
        let repo = MockRepository::with_tags(["v1.0.0", "v2.0.0"]);

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&"v1.0.0".to_string()));
        assert!(tags.contains(&"v2.0.0".to_string()));
    }

    #[test]
    fn test_mock_repository_records_created_tags() {
        let repo = MockRepository::new();
        let oid = Oid::from_bytes(&[7; 20]).unwrap();

        repo.create_tag("v1.1.0", oid).unwrap();

        let created = repo.created_tags();
        assert_eq!(created, vec![("v1.1.0".to_string(), oid)]);
    }

    #[test]
    fn test_mock_repository_head() {
        let mut repo = MockRepository::new();
        let oid = Oid::from_bytes(&[3; 20]).unwrap();
        repo.set_head(oid);

        assert_eq!(repo.head_oid().unwrap(), oid);
    }

    #[test]
    fn test_mock_repository_armed_failure() {
        let mut repo = MockRepository::new();
        repo.fail_on_tag("v2.0.0");

        assert!(repo.create_tag("v1.0.0", Oid::zero()).is_ok());
        assert!(repo.create_tag("v2.0.0", Oid::zero()).is_err());
        assert_eq!(repo.created_tags().len(), 1);
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
        assert!(repo.created_tags().is_empty());
    }
}
