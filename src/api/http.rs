use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::dashboard::{CreateFields, Dashboard, DashboardError};
use super::types::{L3RuleContainer, Network, PolicyObject, PolicyObjectGroup};
use crate::rules::{FirewallRule, RuleSet};

/// List endpoints are asked for their maximum page size; catalogs larger than
/// one page are out of scope here.
const LIST_PAGE_SIZE: &str = "1000";

/// Production dashboard client over the platform's v1 REST API.
pub struct HttpDashboard {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    org_id: String,
}

impl HttpDashboard {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        org_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            org_id: org_id.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-2xx response into an `Api` error carrying the status code
    /// and whatever body the platform sent back.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, DashboardError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(DashboardError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .query(&[("perPage", LIST_PAGE_SIZE)])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &CreateFields,
    ) -> Result<T, DashboardError> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl Dashboard for HttpDashboard {
    async fn list_policy_objects(&self) -> Result<Vec<PolicyObject>, DashboardError> {
        self.get_list(&format!("/organizations/{}/policyObjects", self.org_id))
            .await
    }

    async fn list_policy_object_groups(&self) -> Result<Vec<PolicyObjectGroup>, DashboardError> {
        self.get_list(&format!(
            "/organizations/{}/policyObjects/groups",
            self.org_id
        ))
        .await
    }

    async fn create_policy_object(
        &self,
        fields: CreateFields,
    ) -> Result<PolicyObject, DashboardError> {
        self.post_json(
            &format!("/organizations/{}/policyObjects", self.org_id),
            &fields,
        )
        .await
    }

    async fn create_policy_object_group(
        &self,
        fields: CreateFields,
    ) -> Result<PolicyObjectGroup, DashboardError> {
        self.post_json(
            &format!("/organizations/{}/policyObjects/groups", self.org_id),
            &fields,
        )
        .await
    }

    async fn list_networks(&self) -> Result<Vec<Network>, DashboardError> {
        self.get_list(&format!("/organizations/{}/networks", self.org_id))
            .await
    }

    async fn get_l3_rules(&self, network_id: &str) -> Result<RuleSet, DashboardError> {
        let container: L3RuleContainer = self
            .get_json(&format!(
                "/networks/{network_id}/appliance/firewall/l3FirewallRules"
            ))
            .await?;
        Ok(container.rules)
    }

    async fn set_l3_rules(
        &self,
        network_id: &str,
        rules: &[FirewallRule],
    ) -> Result<(), DashboardError> {
        let body = L3RuleContainer {
            rules: rules.to_vec(),
        };
        let response = self
            .client
            .put(self.url(&format!(
                "/networks/{network_id}/appliance/firewall/l3FirewallRules"
            )))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
