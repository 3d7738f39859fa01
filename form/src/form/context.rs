//! Host context the form reads from and writes to

use crate::models::error_map::ErrorMap;
use crate::models::record::DeployRecord;

/// The container hosting the form.
///
/// It owns the record and the published error map; the form replaces them
/// whole and never holds on to either between calls.
pub trait DeployEditContext {
    fn deploy(&self) -> &DeployRecord;

    fn set_deploy(&mut self, deploy: DeployRecord);

    fn errors(&self) -> &ErrorMap;

    fn set_errors(&mut self, errors: ErrorMap);
}

/// In-memory host context
#[derive(Debug, Clone, Default)]
pub struct MemoryContext {
    deploy: DeployRecord,
    errors: ErrorMap,
    deploy_writes: usize,
}

impl MemoryContext {
    pub fn new(deploy: DeployRecord) -> Self {
        Self {
            deploy,
            ..Default::default()
        }
    }

    /// Start with an error map already published by other parts of the host
    pub fn with_errors(mut self, errors: ErrorMap) -> Self {
        self.errors = errors;
        self
    }

    /// Number of times the record has been replaced
    pub fn deploy_writes(&self) -> usize {
        self.deploy_writes
    }

    pub fn into_parts(self) -> (DeployRecord, ErrorMap) {
        (self.deploy, self.errors)
    }
}

impl DeployEditContext for MemoryContext {
    fn deploy(&self) -> &DeployRecord {
        &self.deploy
    }

    fn set_deploy(&mut self, deploy: DeployRecord) {
        self.deploy = deploy;
        self.deploy_writes += 1;
    }

    fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }
}
