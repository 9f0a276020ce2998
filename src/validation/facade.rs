// src/validation/facade.rs

use std::sync::Arc;
use tracing::{debug, info};

use super::lookup::CatalogLookup;
use super::models::{ActionType, EntityKind, ValidatableObject, ValidationOutcome};
use super::resolver::PolicyResolver;
use crate::common::ApiError;

/// Entry point used by the HTTP handlers.
///
/// Outcomes are returned unmodified; translating them into responses is the
/// caller's job. Only lookup failures come back as `Err`.
#[derive(Clone)]
pub struct ValidationFacade {
    resolver: PolicyResolver,
    lookup: Arc<dyn CatalogLookup>,
}

impl ValidationFacade {
    pub fn new(resolver: PolicyResolver, lookup: Arc<dyn CatalogLookup>) -> Self {
        Self { resolver, lookup }
    }

    pub async fn validate_for_action(
        &self,
        object: &ValidatableObject,
        action: ActionType,
        role: Option<&str>,
    ) -> Result<ValidationOutcome, ApiError> {
        let policy = self.resolver.resolve(role);
        let outcome = policy.validate(object, action, self.lookup.as_ref()).await?;

        log_outcome(object.kind(), object.id(), action, policy.role().as_str(), &outcome);
        Ok(outcome)
    }

    pub async fn validate_id_for_action(
        &self,
        kind: EntityKind,
        id: i64,
        action: ActionType,
        role: Option<&str>,
    ) -> Result<ValidationOutcome, ApiError> {
        let policy = self.resolver.resolve(role);
        let outcome = policy
            .validate_id(kind, id, action, self.lookup.as_ref())
            .await?;

        log_outcome(kind, id, action, policy.role().as_str(), &outcome);
        Ok(outcome)
    }
}

fn log_outcome(
    kind: EntityKind,
    id: i64,
    action: ActionType,
    role: &str,
    outcome: &ValidationOutcome,
) {
    match outcome {
        ValidationOutcome::Valid => {
            debug!(entity = ?kind, id, action = %action, role, "Validation passed");
        }
        ValidationOutcome::ActionInvalid(_) => {
            info!(entity = ?kind, id, action = %action, role, "Action rejected for role");
        }
        ValidationOutcome::Failed(failures) => {
            info!(
                entity = ?kind,
                id,
                action = %action,
                role,
                failures = failures.len(),
                "Validation failed"
            );
        }
        ValidationOutcome::NotFound { .. } => {
            info!(entity = ?kind, id, action = %action, role, "Subject not found");
        }
    }
}
