use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use super::types::{Network, PolicyObject, PolicyObjectGroup};
use crate::rules::{FirewallRule, RuleSet};

/// Free-form creation payload: the input table's columns forwarded verbatim,
/// plus fields this tool adds (e.g. `groupIds`).
pub type CreateFields = serde_json::Map<String, serde_json::Value>;

/// Per-call error from the remote collaborator.
///
/// Every variant is non-fatal at the granularity of one object, one group, or
/// one network; callers log and move on. Nothing here is retried; rate-limit
/// backoff is the transport's job, not ours.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Remote dashboard operations this tool consumes.
///
/// Abstracted so the provisioning driver can be exercised against a mock;
/// the production implementation is [`super::HttpDashboard`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Dashboard: Send + Sync {
    async fn list_policy_objects(&self) -> Result<Vec<PolicyObject>, DashboardError>;

    async fn list_policy_object_groups(&self) -> Result<Vec<PolicyObjectGroup>, DashboardError>;

    async fn create_policy_object(
        &self,
        fields: CreateFields,
    ) -> Result<PolicyObject, DashboardError>;

    async fn create_policy_object_group(
        &self,
        fields: CreateFields,
    ) -> Result<PolicyObjectGroup, DashboardError>;

    async fn list_networks(&self) -> Result<Vec<Network>, DashboardError>;

    async fn get_l3_rules(&self, network_id: &str) -> Result<RuleSet, DashboardError>;

    async fn set_l3_rules(
        &self,
        network_id: &str,
        rules: &[FirewallRule],
    ) -> Result<(), DashboardError>;
}
