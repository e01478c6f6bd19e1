use crate::error::{BumpError, Result};
use crate::git::Repository;
use git2::Oid;
use std::sync::{Mutex, MutexGuard};

/// Mock repository for testing without actual git operations
///
/// State lives behind a mutex because the [Repository] trait takes
/// `&self` and requires `Send + Sync`. Push and delete can be scripted to
/// fail so the rollback paths are testable.
pub struct MockRepository {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    head: Option<Oid>,
    remote_refs: Vec<String>,
    tags: Vec<String>,
    fail_push: Option<String>,
    fail_delete: Option<String>,
    push_count: usize,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            state: Mutex::new(MockState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock repository state poisoned")
    }

    /// Set the head commit
    pub fn set_head(&self, oid: Oid) {
        self.state().head = Some(oid);
    }

    /// Add a reference the mock remote advertises
    pub fn add_remote_ref(&self, name: impl Into<String>) {
        self.state().remote_refs.push(name.into());
    }

    /// Make the next push calls fail with the given message
    pub fn fail_push_with(&self, message: impl Into<String>) {
        self.state().fail_push = Some(message.into());
    }

    /// Make the next delete calls fail with the given message
    pub fn fail_delete_with(&self, message: impl Into<String>) {
        self.state().fail_delete = Some(message.into());
    }

    /// Local tags currently present in the mock
    pub fn local_tags(&self) -> Vec<String> {
        self.state().tags.clone()
    }

    /// Number of successful pushes performed
    pub fn push_count(&self) -> usize {
        self.state().push_count
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.state()
            .head
            .ok_or_else(|| BumpError::head("no head set in mock repository"))
    }

    fn list_remote_refs(&self, _remote: &str) -> Result<Vec<String>> {
        Ok(self.state().remote_refs.clone())
    }

    fn create_tag(&self, name: &str, _oid: Oid) -> Result<()> {
        let mut state = self.state();
        if state.tags.iter().any(|t| t == name) {
            return Err(BumpError::tag(format!("tag '{}' already exists", name)));
        }
        state.tags.push(name.to_string());
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        let mut state = self.state();
        if let Some(message) = state.fail_delete.clone() {
            return Err(BumpError::tag(message));
        }
        match state.tags.iter().position(|t| t == name) {
            Some(index) => {
                state.tags.remove(index);
                Ok(())
            }
            None => Err(BumpError::tag(format!("tag '{}' not found", name))),
        }
    }

    fn push_tags(&self, _remote: &str) -> Result<()> {
        let mut state = self.state();
        if let Some(message) = state.fail_push.clone() {
            return Err(BumpError::remote(message));
        }
        state.push_count += 1;
        Ok(())
    }
}
