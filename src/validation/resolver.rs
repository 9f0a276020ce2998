// src/validation/resolver.rs

use tracing::debug;

use super::models::Role;
use super::policy::{ActionPolicy, ADMIN_POLICY, INSTRUCTOR_POLICY, STUDENT_POLICY};
use crate::common::config::ConfigError;

/// Maps role tokens to policies, with a configured fallback for absent or
/// unrecognized roles.
#[derive(Debug, Clone, Copy)]
pub struct PolicyResolver {
    default_role: Role,
}

impl PolicyResolver {
    /// Fails when the default role has no policy. That is a wiring bug, so
    /// it is reported at startup rather than per request.
    pub fn new(default_role: Role) -> Result<Self, ConfigError> {
        if policy_for(default_role).is_none() {
            return Err(ConfigError::UnresolvableDefaultRole(default_role.to_string()));
        }
        Ok(Self { default_role })
    }

    pub fn default_role(&self) -> Role {
        self.default_role
    }

    pub fn resolve(&self, token: Option<&str>) -> &'static dyn ActionPolicy {
        let role = Role::from_token(token);
        match policy_for(role) {
            Some(policy) => policy,
            None => {
                debug!(
                    token = ?token,
                    default_role = %self.default_role,
                    "Unrecognized role, using default policy"
                );
                self.default_policy()
            }
        }
    }

    fn default_policy(&self) -> &'static dyn ActionPolicy {
        // `new` guarantees the default role has a policy.
        policy_for(self.default_role).unwrap_or(&STUDENT_POLICY)
    }
}

impl Default for PolicyResolver {
    fn default() -> Self {
        Self {
            default_role: Role::Student,
        }
    }
}

fn policy_for(role: Role) -> Option<&'static dyn ActionPolicy> {
    match role {
        Role::Admin => Some(&ADMIN_POLICY),
        Role::Instructor => Some(&INSTRUCTOR_POLICY),
        Role::Student => Some(&STUDENT_POLICY),
        Role::Unknown => None,
    }
}
