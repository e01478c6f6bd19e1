//! Bump workflow orchestration
//!
//! Decoupled from clap and from the concrete repository implementation so
//! the whole flow runs against [crate::git::MockRepository] in tests.

use crate::domain::{latest_version, BumpKind, Version};
use crate::error::{BumpError, Result};
use crate::git::Repository;

/// Outcome of planning a bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpPlan {
    /// Latest version found at the remote, if any ref matched the format.
    pub previous: Option<Version>,

    /// The version to publish.
    pub next: Version,
}

impl BumpPlan {
    /// True when no existing ref matched the version format and the
    /// initial v0.0.0 tag is being published.
    pub fn is_bootstrap(&self) -> bool {
        self.previous.is_none()
    }
}

/// Determine which version to publish, without touching the repository.
///
/// Lists the remote's references, selects the latest version tag and
/// applies the increment selected by the flags. A remote with references
/// but no version tags is the first release: the plan is v0.0.0 with no
/// previous version, and the incrementer (including its flag validation)
/// is skipped. A remote with no references at all is a `NoTagsFound`
/// error.
pub fn plan<R: Repository>(repo: &R, remote: &str, major: bool, minor: bool) -> Result<BumpPlan> {
    let refs = repo.list_remote_refs(remote)?;
    if refs.is_empty() {
        return Err(BumpError::NoTagsFound(remote.to_string()));
    }

    let previous = match latest_version(&refs) {
        Ok(version) => version,
        Err(BumpError::NoVersionTagsFound) => {
            return Ok(BumpPlan {
                previous: None,
                next: Version::default(),
            });
        }
        Err(e) => return Err(e),
    };

    let kind = BumpKind::from_flags(major, minor)?;

    Ok(BumpPlan {
        previous: Some(previous),
        next: previous.bump(kind),
    })
}

/// Create the tag for `version` at the current head and push all tags.
///
/// If the push fails, the freshly created local tag is deleted again; a
/// failure of that rollback surfaces as a combined error, otherwise only
/// the push failure is reported.
pub fn publish<R: Repository>(repo: &R, remote: &str, version: &Version) -> Result<()> {
    let head = repo.head_oid()?;
    let tag_name = version.to_string();

    repo.create_tag(&tag_name, head)?;

    if let Err(push_err) = repo.push_tags(remote) {
        return match repo.delete_tag(&tag_name) {
            Ok(()) => Err(push_err),
            Err(rollback_err) => Err(BumpError::RollbackFailed {
                push: push_err.to_string(),
                rollback: rollback_err.to_string(),
            }),
        };
    }

    Ok(())
}

/// Plan and publish in one step.
pub fn run<R: Repository>(repo: &R, remote: &str, major: bool, minor: bool) -> Result<BumpPlan> {
    let plan = plan(repo, remote, major, minor)?;
    publish(repo, remote, &plan.next)?;
    Ok(plan)
}
