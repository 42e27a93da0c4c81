use std::fs;

use tempfile::TempDir;
use winthrop::error::Error;
use winthrop::workspace::{GitWorkspace, Workspace};

fn configure_identity(root: &std::path::Path) {
    let repo = git2::Repository::open(root).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();
}

#[test]
fn test_create_root_rejects_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir(&root).unwrap();

    let mut workspace = GitWorkspace::new(&root);
    match workspace.create_root() {
        Err(Error::ProjectDirectoryExists(_)) => {}
        other => panic!("Expected ProjectDirectoryExists, got {:?}", other.err()),
    }
}

#[test]
fn test_create_root_and_init() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");

    let mut workspace = GitWorkspace::new(&root);
    workspace.create_root().unwrap();
    workspace.init_repo().unwrap();

    assert!(root.is_dir());
    assert!(root.join(".git").is_dir());
}

#[test]
fn test_operations_require_initialized_repository() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");

    let mut workspace = GitWorkspace::new(&root);
    workspace.create_root().unwrap();

    assert!(matches!(
        workspace.commit_all("nope"),
        Err(Error::RepositoryNotInitialized)
    ));
    assert!(matches!(
        workspace.identity_value("user.name"),
        Err(Error::RepositoryNotInitialized)
    ));
}

#[test]
fn test_write_file_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");

    let mut workspace = GitWorkspace::new(&root);
    workspace.create_root().unwrap();
    workspace.write_file("lib/demo.js", "").unwrap();

    assert!(root.join("lib/demo.js").is_file());
}

#[cfg(unix)]
#[test]
fn test_make_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");

    let mut workspace = GitWorkspace::new(&root);
    workspace.create_root().unwrap();
    workspace.write_file("prepublish.sh", "#!/usr/bin/env bash\n").unwrap();
    workspace.make_executable("prepublish.sh").unwrap();

    let mode = fs::metadata(root.join("prepublish.sh")).unwrap().permissions().mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn test_identity_value_reads_repository_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");

    let mut workspace = GitWorkspace::new(&root);
    workspace.create_root().unwrap();
    workspace.init_repo().unwrap();
    configure_identity(&root);

    assert_eq!(workspace.identity_value("user.name").unwrap(), "Test User");
    assert_eq!(workspace.identity_value("user.email").unwrap(), "test@example.com");
}

#[test]
fn test_commit_orphan_and_checkout_flow() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");

    let mut workspace = GitWorkspace::new(&root);
    workspace.create_root().unwrap();
    workspace.init_repo().unwrap();
    configure_identity(&root);

    workspace.write_file(".gitignore", "node_modules/\n").unwrap();
    workspace.write_file("lib/proj.js", "").unwrap();
    workspace.commit_all("initial").unwrap();

    let repo = git2::Repository::open(&root).unwrap();
    let main_branch = workspace.current_branch().unwrap();

    // Dotfiles are staged too.
    let head_tree = repo.head().unwrap().peel_to_tree().unwrap();
    assert!(head_tree.get_name(".gitignore").is_some());
    assert!(head_tree.get_name("lib").is_some());

    workspace.create_orphan_branch("gh-pages").unwrap();
    workspace.remove_tracked().unwrap();

    // Working tree is empty apart from the repository metadata, and the
    // emptied directories are pruned.
    let leftovers: Vec<_> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name() != ".git")
        .collect();
    assert!(leftovers.is_empty(), "unexpected leftovers: {:?}", leftovers);

    workspace.write_file("index.html", "<html></html>\n").unwrap();
    workspace.commit_all("site").unwrap();

    // The site branch history starts from scratch.
    let site_commit = repo
        .find_branch("gh-pages", git2::BranchType::Local)
        .unwrap()
        .get()
        .peel_to_commit()
        .unwrap();
    assert_eq!(site_commit.parent_count(), 0);
    assert!(site_commit.tree().unwrap().get_name("index.html").is_some());

    workspace.checkout(&main_branch).unwrap();

    assert!(root.join("lib/proj.js").is_file());
    assert!(!root.join("index.html").exists());
}
