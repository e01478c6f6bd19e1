use crate::error::{BumpError, Result};
use git2::{Direction, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Credential callbacks shared by the remote list and push calls.
    ///
    /// Tries SSH keys from ~/.ssh in order of preference, then the SSH
    /// agent, then default credentials.
    fn credential_callbacks() -> git2::RemoteCallbacks<'static> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });
        callbacks
    }
}

/// Strip the well-known ref namespaces so "refs/tags/v1.2.3" becomes
/// "v1.2.3" and "refs/heads/main" becomes "main".
fn short_ref_name(name: &str) -> String {
    name.strip_prefix("refs/tags/")
        .or_else(|| name.strip_prefix("refs/heads/"))
        .or_else(|| name.strip_prefix("refs/remotes/"))
        .unwrap_or(name)
        .to_string()
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| BumpError::head(e.to_string()))?;

        head.target()
            .ok_or_else(|| BumpError::head("HEAD is not a direct reference"))
    }

    fn list_remote_refs(&self, remote: &str) -> Result<Vec<String>> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| BumpError::remote(format!("cannot find remote '{}': {}", remote, e)))?;

        let connection = remote
            .connect_auth(Direction::Fetch, Some(Self::credential_callbacks()), None)
            .map_err(|e| BumpError::remote(format!("cannot connect to remote: {}", e)))?;

        let names = connection
            .list()
            .map_err(|e| BumpError::remote(format!("cannot list references from remote: {}", e)))?
            .iter()
            .map(|head| short_ref_name(head.name()))
            .collect();

        Ok(names)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| BumpError::tag(format!("cannot find commit to tag: {}", e)))?;

        self.repo.tag_lightweight(name, &object, false).map_err(|e| {
            BumpError::tag(format!(
                "cannot create tag '{}' (it may already exist locally): {}",
                name, e
            ))
        })?;

        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.repo
            .tag_delete(name)
            .map_err(|e| BumpError::tag(format!("cannot delete tag '{}': {}", name, e)))
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| BumpError::remote(format!("cannot find remote '{}': {}", remote, e)))?;

        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| BumpError::tag(format!("cannot list local tags: {}", e)))?;

        let refspecs: Vec<String> = tags
            .iter()
            .flatten()
            .flatten()
            .map(|tag| format!("refs/tags/{}:refs/tags/{}", tag, tag))
            .collect();

        let refspec_strs: Vec<&str> = refspecs.iter().map(|s| s.as_str()).collect();

        let mut callbacks = Self::credential_callbacks();
        callbacks.push_update_reference(|refname, status| {
            // The remote can reject an individual ref even when the
            // transport call itself succeeds.
            if let Some(status) = status {
                Err(git2::Error::from_str(&format!(
                    "push rejected for {}: {}",
                    refname, status
                )))
            } else {
                Ok(())
            }
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        remote
            .push(&refspec_strs, Some(&mut push_options))
            .map_err(|e| BumpError::remote(format!("cannot push tags to remote: {}", e)))?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's
// thread-safe design.
unsafe impl Sync for Git2Repository {}
