use clap::ValueEnum;
use serde_json::Value;

use crate::api::{CreateFields, Dashboard, Network};
use crate::catalog::ReferenceIndex;
use crate::error::DashfwError;
use crate::input::ObjectRow;
use crate::rules::{FirewallRule, RuleSet, merge, translate};

/// Category assigned to groups this tool creates on behalf of object rows.
const GROUP_CATEGORY: &str = "NetworkObjectGroup";

/// How the final rule set is applied to every target network.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Fetch each network's current rules and append only new ones.
    Merge,
    /// Replace each network's rules with the authored table.
    Overwrite,
}

/// The one stateful layer: owns the remote collaborator and the reference
/// index, and walks the run strictly sequentially. Every remote failure past
/// bootstrap is per-item: logged, skipped, never retried, never rolled back.
pub struct Provisioner<D: Dashboard> {
    dashboard: D,
    index: ReferenceIndex,
    network_names: Vec<String>,
}

impl<D: Dashboard> Provisioner<D> {
    /// Enumerate the remote catalog and build the reference index.
    ///
    /// Runs before any remote mutation; a failure here is fatal because
    /// translation against a half-built index would silently mis-resolve
    /// names.
    pub async fn bootstrap(
        dashboard: D,
        network_names: Vec<String>,
    ) -> Result<Self, DashfwError> {
        let objects = dashboard
            .list_policy_objects()
            .await
            .map_err(|source| DashfwError::Bootstrap { source })?;
        let groups = dashboard
            .list_policy_object_groups()
            .await
            .map_err(|source| DashfwError::Bootstrap { source })?;

        let index = ReferenceIndex::from_catalog(&objects, &groups);
        log::info!(
            "Indexed {} policy objects and {} groups from the remote catalog",
            index.object_count(),
            index.group_count()
        );

        Ok(Self {
            dashboard,
            index,
            network_names,
        })
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    /// Create the objects (and any groups they name) from the definition
    /// table. Each success is registered into the index immediately so later
    /// rows and rule translation see it.
    pub async fn create_objects(&mut self, rows: Vec<ObjectRow>) {
        for row in rows {
            let mut fields = row.fields;

            if let Some(group_name) = &row.group_name {
                // No group, no object: an object cannot join a group that
                // failed to materialize.
                let Some(group_id) = self.ensure_group(group_name).await else {
                    continue;
                };
                fields.insert("groupIds".to_string(), Value::Array(vec![group_id.into()]));
            }

            match self.dashboard.create_policy_object(fields).await {
                Ok(created) => {
                    log::info!("Created policy object `{}` (id {})", created.name, created.id);
                    self.index.register_object(created.name, created.id);
                }
                Err(err) => {
                    log::error!("Failed to create policy object `{}`: {err}", row.name);
                }
            }
        }
    }

    /// Resolve a group name to its id, creating the group on first sight.
    /// Within one run a name is created at most once.
    async fn ensure_group(&mut self, name: &str) -> Option<String> {
        if let Some(id) = self.index.lookup_group(name) {
            return Some(id.to_string());
        }

        let mut fields = CreateFields::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert(
            "category".to_string(),
            Value::String(GROUP_CATEGORY.to_string()),
        );

        match self.dashboard.create_policy_object_group(fields).await {
            Ok(created) => {
                log::info!(
                    "Created policy object group `{}` (id {})",
                    created.name,
                    created.id
                );
                self.index
                    .register_group(created.name, created.id.clone());
                Some(created.id)
            }
            Err(err) => {
                log::error!("Failed to create policy object group `{name}`: {err}");
                None
            }
        }
    }

    /// Rewrite the src/dest address fields of every rule into the platform's
    /// reference syntax. Must run after object creation so fresh objects
    /// resolve.
    pub fn translate_rules(&self, rules: RuleSet) -> RuleSet {
        rules
            .into_iter()
            .map(|mut rule| {
                rule.src_cidr = translate(&self.index, &rule.src_cidr);
                rule.dest_cidr = translate(&self.index, &rule.dest_cidr);
                rule
            })
            .collect()
    }

    /// Push the translated rule table to every target appliance network.
    ///
    /// In merge mode each network is merged against the pristine translated
    /// table, never against another network's merge output. Per-network
    /// fetch/push failures skip that network only.
    pub async fn apply_to_networks(&self, rules: &[FirewallRule], mode: ApplyMode) {
        let networks = match self.dashboard.list_networks().await {
            Ok(networks) => networks,
            Err(err) => {
                log::error!("Failed to list organization networks: {err}");
                return;
            }
        };

        let targets: Vec<&Network> = networks.iter().filter(|n| self.is_target(n)).collect();
        log::info!(
            "Applying rules to {} networks: {:?}",
            targets.len(),
            targets.iter().map(|n| n.name.as_str()).collect::<Vec<_>>()
        );

        for network in targets {
            let final_rules = match mode {
                ApplyMode::Overwrite => rules.to_vec(),
                ApplyMode::Merge => match self.dashboard.get_l3_rules(&network.id).await {
                    Ok(existing) => merge(existing, rules.to_vec()),
                    Err(err) => {
                        log::error!(
                            "Failed to fetch existing rules for network `{}`: {err}",
                            network.name
                        );
                        continue;
                    }
                },
            };

            match self.dashboard.set_l3_rules(&network.id, &final_rules).await {
                Ok(()) => log::info!(
                    "Applied {} rules to network `{}`",
                    final_rules.len(),
                    network.name
                ),
                Err(err) => log::error!(
                    "Failed to apply rules to network `{}`: {err}",
                    network.name
                ),
            }
        }
    }

    fn is_target(&self, network: &Network) -> bool {
        network.is_appliance()
            && (self.network_names.is_empty()
                || self.network_names.iter().any(|name| name == &network.name))
    }
}
