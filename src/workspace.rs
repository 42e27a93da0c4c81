//! Process/filesystem gateway for the scaffolding pipeline.
//! Exposes the small set of typed operations the pipeline is allowed to
//! perform, with a git2-backed implementation. Keeping the operations behind
//! a trait lets tests observe the exact sequence without touching a real
//! repository.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{build::CheckoutBuilder, IndexAddOption, Repository};
use log::debug;

use crate::error::{Error, Result};

/// The operations the pipeline may perform against the project under
/// construction. Every filesystem path is relative to the project root.
pub trait Workspace {
    /// Project root directory.
    fn root(&self) -> &Path;

    /// Creates the project root. Fails if the directory already exists.
    fn create_root(&mut self) -> Result<()>;

    /// Initializes a git repository at the project root.
    fn init_repo(&mut self) -> Result<()>;

    /// Looks up an identity value (`user.name`, `user.email`) from the
    /// local environment.
    fn identity_value(&self, key: &str) -> Result<String>;

    /// Name of the branch HEAD currently points at.
    fn current_branch(&self) -> Result<String>;

    fn create_dir(&mut self, rel: &str) -> Result<()>;

    fn write_file(&mut self, rel: &str, content: &str) -> Result<()>;

    fn make_executable(&mut self, rel: &str) -> Result<()>;

    /// Stages every change, tracked and untracked, and commits to HEAD.
    fn commit_all(&mut self, message: &str) -> Result<()>;

    /// Points HEAD at a new history-less branch.
    fn create_orphan_branch(&mut self, name: &str) -> Result<()>;

    /// Deletes all tracked content from the working tree and the index.
    fn remove_tracked(&mut self) -> Result<()>;

    /// Force-checkouts an existing branch, restoring its working tree.
    fn checkout(&mut self, branch: &str) -> Result<()>;
}

/// `Workspace` implementation over `std::fs` and libgit2.
pub struct GitWorkspace {
    root: PathBuf,
    repo: Option<Repository>,
}

impl GitWorkspace {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into(), repo: None }
    }

    fn repo(&self) -> Result<&Repository> {
        self.repo.as_ref().ok_or(Error::RepositoryNotInitialized)
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

impl Workspace for GitWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_root(&mut self) -> Result<()> {
        if self.root.exists() {
            return Err(Error::ProjectDirectoryExists(self.root.display().to_string()));
        }
        debug!("Creating project directory '{}'", self.root.display());
        fs::create_dir_all(&self.root).map_err(Error::IoError)
    }

    fn init_repo(&mut self) -> Result<()> {
        debug!("Initializing repository in '{}'", self.root.display());
        self.repo = Some(Repository::init(&self.root)?);
        Ok(())
    }

    fn identity_value(&self, key: &str) -> Result<String> {
        // The repository config snapshot includes the global git config.
        let config = self.repo()?.config()?.snapshot()?;
        config.get_string(key).map_err(|_| Error::IdentityNotConfigured(key.to_string()))
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo()?.head()?;
        Ok(head.shorthand().unwrap_or("master").to_string())
    }

    fn create_dir(&mut self, rel: &str) -> Result<()> {
        fs::create_dir_all(self.resolve(rel)).map_err(Error::IoError)
    }

    fn write_file(&mut self, rel: &str, content: &str) -> Result<()> {
        let path = self.resolve(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        debug!("Writing '{}'", path.display());
        fs::write(path, content).map_err(Error::IoError)
    }

    fn make_executable(&mut self, rel: &str) -> Result<()> {
        let path = self.resolve(rel);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(perms.mode() | 0o111);
            fs::set_permissions(&path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }

    fn commit_all(&mut self, message: &str) -> Result<()> {
        let repo = self.repo()?;
        let mut index = repo.index()?;
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        let signature = repo.signature()?;

        // HEAD is unborn for the first commit on a branch; such commits
        // have no parents.
        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        debug!("Committing: {}", message);
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        Ok(())
    }

    fn create_orphan_branch(&mut self, name: &str) -> Result<()> {
        debug!("Creating orphan branch '{}'", name);
        self.repo()?.set_head(&format!("refs/heads/{}", name))?;
        Ok(())
    }

    fn remove_tracked(&mut self) -> Result<()> {
        let repo = self.repo()?;
        let mut index = repo.index()?;

        let tracked: Vec<PathBuf> = index
            .iter()
            .filter_map(|entry| {
                std::str::from_utf8(&entry.path).ok().map(PathBuf::from)
            })
            .collect();

        debug!("Removing {} tracked entries from the working tree", tracked.len());
        let mut parents: Vec<PathBuf> = Vec::new();
        for rel in &tracked {
            let path = self.root.join(rel);
            if path.is_file() {
                fs::remove_file(&path)?;
            }
            let mut dir = rel.parent();
            while let Some(d) = dir {
                if !d.as_os_str().is_empty() && !parents.contains(&d.to_path_buf()) {
                    parents.push(d.to_path_buf());
                }
                dir = d.parent();
            }
        }

        // Deepest directories first, so empty chains collapse fully.
        parents.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for dir in parents {
            let _ = fs::remove_dir(self.root.join(dir));
        }

        index.clear()?;
        index.write()?;
        Ok(())
    }

    fn checkout(&mut self, branch: &str) -> Result<()> {
        debug!("Checking out branch '{}'", branch);
        let repo = self.repo()?;
        repo.set_head(&format!("refs/heads/{}", branch))?;
        let mut options = CheckoutBuilder::new();
        options.force();
        repo.checkout_head(Some(&mut options))?;
        Ok(())
    }
}
