// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_release_sync_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-sync", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-sync"));
    assert!(stdout.contains("--minimal-version"));
    assert!(stdout.contains("--existing-tags"));
    assert!(stdout.contains("--dry-run"));
}

#[cfg(test)]
mod git_operations_tests {
    use git2::Repository;
    use release_sync::cli::{ReleaseOrchestrator, SyncOutcome};
    use release_sync::config::TaggerConfig;
    use release_sync::domain::tag::TagPattern;
    use release_sync::git::{Git2Repository, Repository as _};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Helper function to setup a temporary git repo with one commit and
    // an existing release tag
    fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().expect("Could not create temp dir");

        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        let content_path = temp_dir.path().join("README.md");
        fs::write(&content_path, b"Initial content\n").expect("Could not write initial file");

        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let commit_id = repo
            .commit(
                Some("HEAD"),
                &repo.signature().expect("Could not get sig"),
                &repo.signature().expect("Could not get sig"),
                "Initial commit",
                &tree,
                &[],
            )
            .expect("Could not create commit");

        repo.tag_lightweight(
            "v1.2.1",
            &repo.find_object(commit_id, None).unwrap(),
            false,
        )
        .expect("Could not create tag");

        temp_dir
    }

    #[test]
    fn test_list_tags_and_head() {
        let temp_dir = setup_test_repo();
        let repo =
            Git2Repository::open(temp_dir.path(), TaggerConfig::default()).expect("open repo");

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags, vec!["v1.2.1".to_string()]);

        let head = repo.head_oid().unwrap();
        assert!(!head.is_zero());
    }

    #[test]
    fn test_live_sync_creates_annotated_tags() {
        let temp_dir = setup_test_repo();
        let tagger = TaggerConfig {
            name: "Product Maintainers".to_string(),
            email: "maintainers@example.com".to_string(),
        };
        let repo = Git2Repository::open(temp_dir.path(), tagger).expect("open repo");

        let orchestrator =
            ReleaseOrchestrator::new("v1.0", TagPattern::default(), false).unwrap();
        let outcome = orchestrator.run(&repo, "v1.2.0,v1.2.1,v1.3.0").unwrap();

        assert_eq!(outcome, SyncOutcome::Created(vec!["v1.3.0".to_string()]));

        // The new tag is an annotated tag pointing at HEAD, carrying the
        // configured tagger identity
        let raw = Repository::open(temp_dir.path()).unwrap();
        let reference = raw.find_reference("refs/tags/v1.3.0").expect("tag exists");
        let tag = reference.peel_to_tag().expect("annotated tag");
        assert_eq!(tag.tagger().unwrap().name(), Some("Product Maintainers"));

        let head = raw.head().unwrap().target().unwrap();
        assert_eq!(tag.target_id(), head);
    }

    #[test]
    fn test_rerun_after_sync_is_up_to_date() {
        let temp_dir = setup_test_repo();
        let repo =
            Git2Repository::open(temp_dir.path(), TaggerConfig::default()).expect("open repo");

        let orchestrator =
            ReleaseOrchestrator::new("v1.0", TagPattern::default(), false).unwrap();

        let first = orchestrator.run(&repo, "v1.2.1,v1.3.0").unwrap();
        assert_eq!(first, SyncOutcome::Created(vec!["v1.3.0".to_string()]));

        let second = orchestrator.run(&repo, "v1.2.1,v1.3.0").unwrap();
        assert_eq!(second, SyncOutcome::UpToDate);
    }

    #[test]
    fn test_dry_run_leaves_repository_untouched() {
        let temp_dir = setup_test_repo();
        let repo =
            Git2Repository::open(temp_dir.path(), TaggerConfig::default()).expect("open repo");

        let orchestrator =
            ReleaseOrchestrator::new("v1.0", TagPattern::default(), true).unwrap();
        let outcome = orchestrator.run(&repo, "v1.3.0").unwrap();

        assert_eq!(outcome, SyncOutcome::Planned(vec!["v1.3.0".to_string()]));
        assert_eq!(repo.list_tags().unwrap(), vec!["v1.2.1".to_string()]);
    }
}
