use simple_cicd_core::error::JobError;
use simple_cicd_core::parameter_keys::version_parameter_key;

use crate::adapters::parameter_store::ParameterStore;

/// Version-per-branch view over the Parameter Store.
///
/// Reads and writes are independent round trips with no caching and no
/// compare-and-swap: two concurrent bumps of the same `(repo, branch)` can
/// both read the same value and the last write wins.
pub struct VersionRepository<'a, S: ?Sized> {
    store: &'a S,
    root: &'a str,
}

impl<'a, S: ParameterStore + ?Sized> VersionRepository<'a, S> {
    pub fn new(store: &'a S, root: &'a str) -> Self {
        Self { store, root }
    }

    pub fn key(&self, repo: &str, branch: &str) -> String {
        version_parameter_key(self.root, repo, branch)
    }

    pub fn get(&self, repo: &str, branch: &str) -> Result<String, JobError> {
        Ok(self.store.get_parameter(&self.key(repo, branch))?)
    }

    pub fn set(&self, repo: &str, branch: &str, value: &str) -> Result<(), JobError> {
        self.store
            .put_parameter(&self.key(repo, branch), value, true)?;
        Ok(())
    }
}
