// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_tagbump_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "tagbump", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tagbump"));
    assert!(stdout.contains("Increment the remote version tag"));
}

#[cfg(test)]
mod git_operations_tests {
    use git2::Repository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use tagbump::domain::Version;
    use tagbump::git::Git2Repository;
    use tagbump::{workflow, BumpError};

    // Helper function to setup a temporary git repo for testing
    fn setup_test_repo() -> (TempDir, Repository) {
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

        {
            let tree = repo.find_tree(tree_id).expect("Could not find tree");
            let sig = repo.signature().expect("Could not create signature");
            repo.commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
                .expect("Could not create initial commit");
        }

        (temp_dir, repo)
    }

    // Creates a bare repository and registers it as "origin"
    fn add_bare_origin(repo: &Repository) -> TempDir {
        let origin_dir = TempDir::new().expect("Could not create origin dir");
        Repository::init_bare(origin_dir.path()).expect("Could not init bare origin");
        repo.remote("origin", origin_dir.path().to_str().unwrap())
            .expect("Could not add origin remote");
        origin_dir
    }

    // Pushes the current branch so the origin advertises at least one ref
    fn push_current_branch(repo: &Repository) {
        let head = repo.head().expect("Could not resolve head");
        let name = head.name().expect("head has no name").to_string();
        let mut remote = repo.find_remote("origin").expect("Could not find origin");
        let refspec = format!("{}:{}", name, name);
        remote
            .push(&[refspec.as_str()], None)
            .expect("Could not push branch to origin");
    }

    fn local_tag_exists(path: &Path, name: &str) -> bool {
        let repo = Repository::open(path).expect("Could not reopen repo");
        let exists = repo.find_reference(&format!("refs/tags/{}", name)).is_ok();
        exists
    }

    fn origin_tag_exists(origin: &Path, name: &str) -> bool {
        let repo = Repository::open_bare(origin).expect("Could not open bare origin");
        let exists = repo.find_reference(&format!("refs/tags/{}", name)).is_ok();
        exists
    }

    #[test]
    fn test_bootstrap_then_increment() {
        let (work_dir, repo) = setup_test_repo();
        let origin_dir = add_bare_origin(&repo);
        push_current_branch(&repo);

        let tagger = Git2Repository::from_git2(repo);

        // First run: no version tags anywhere, so v0.0.0 is published.
        let plan = workflow::run(&tagger, "origin", false, false).unwrap();
        assert!(plan.is_bootstrap());
        assert_eq!(plan.next, Version::default());
        assert!(local_tag_exists(work_dir.path(), "v0.0.0"));
        assert!(origin_tag_exists(origin_dir.path(), "v0.0.0"));

        // Second run: the remote now advertises v0.0.0.
        let plan = workflow::run(&tagger, "origin", false, false).unwrap();
        assert_eq!(plan.previous, Some(Version::default()));
        assert_eq!(plan.next, Version::new(0, 0, 1));
        assert!(origin_tag_exists(origin_dir.path(), "v0.0.1"));

        // Major bump on top of the published history.
        let plan = workflow::run(&tagger, "origin", true, false).unwrap();
        assert_eq!(plan.previous, Some(Version::new(0, 0, 1)));
        assert_eq!(plan.next, Version::new(1, 0, 0));
        assert!(origin_tag_exists(origin_dir.path(), "v1.0.0"));
    }

    #[test]
    fn test_empty_remote_reports_no_tags() {
        let (_work_dir, repo) = setup_test_repo();
        let _origin_dir = add_bare_origin(&repo);

        let tagger = Git2Repository::from_git2(repo);

        let err = workflow::run(&tagger, "origin", false, false).unwrap_err();
        assert!(matches!(err, BumpError::NoTagsFound(_)));
    }

    #[test]
    fn test_push_failure_rolls_back_local_tag() {
        let (work_dir, repo) = setup_test_repo();
        // The origin points at a path that does not exist, so the push
        // fails after the local tag has been created.
        let origin_dir = TempDir::new().unwrap();
        let missing = origin_dir.path().join("missing");
        repo.remote("origin", missing.to_str().unwrap()).unwrap();

        let tagger = Git2Repository::from_git2(repo);

        let err = workflow::publish(&tagger, "origin", &Version::new(9, 9, 9)).unwrap_err();
        assert!(matches!(err, BumpError::Remote(_)));
        assert!(!local_tag_exists(work_dir.path(), "v9.9.9"));
    }

    #[test]
    fn test_existing_local_tag_fails_publish() {
        let (work_dir, repo) = setup_test_repo();
        let _origin_dir = add_bare_origin(&repo);
        push_current_branch(&repo);

        let tagger = Git2Repository::from_git2(repo);

        workflow::publish(&tagger, "origin", &Version::new(2, 0, 0)).unwrap();
        let err = workflow::publish(&tagger, "origin", &Version::new(2, 0, 0)).unwrap_err();

        assert!(matches!(err, BumpError::Tag(_)));
        // The tag from the first publish is untouched.
        assert!(local_tag_exists(work_dir.path(), "v2.0.0"));
    }

    #[test]
    fn test_remote_refs_are_advertised_with_short_names() {
        use tagbump::git::Repository as _;

        let (_work_dir, repo) = setup_test_repo();
        let _origin_dir = add_bare_origin(&repo);
        push_current_branch(&repo);

        let tagger = Git2Repository::from_git2(repo);
        let refs = tagger.list_remote_refs("origin").unwrap();

        assert!(!refs.is_empty());
        assert!(refs.iter().all(|name| !name.starts_with("refs/")));
    }
}
