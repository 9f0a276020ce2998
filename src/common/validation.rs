// Common validation types and traits

use async_trait::async_trait;

use super::error::ApiError;
use crate::validation::lookup::CatalogLookup;
use crate::validation::models::{ActionType, ValidationFailure};

/// Ordered accumulator for field failures. Checks append; nothing aborts.
#[derive(Debug, Default)]
pub struct FailureList {
    failures: Vec<ValidationFailure>,
}

impl FailureList {
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    pub fn push(&mut self, failure: Option<ValidationFailure>) {
        if let Some(failure) = failure {
            self.failures.push(failure);
        }
    }

    pub fn into_vec(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

/// Per-entity composition of field validators.
#[async_trait]
pub trait EntityValidator<T: Sync>: Send + Sync {
    async fn validate(
        &self,
        data: &T,
        action: ActionType,
        lookup: &dyn CatalogLookup,
    ) -> Result<FailureList, ApiError>;
}
