use serde::{Deserialize, Deserializer, Serialize};

use crate::rules::FirewallRule;

/// A named reusable address definition stored by the platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyObject {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
}

/// A named collection of policy objects, referenced as a unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyObjectGroup {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_types: Vec<String>,
}

impl Network {
    /// L3 outbound rules only exist on networks with a security appliance.
    pub fn is_appliance(&self) -> bool {
        self.product_types.iter().any(|t| t == "appliance")
    }
}

/// Wire envelope for both the GET response and the PUT request body of the
/// L3 firewall rules endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L3RuleContainer {
    pub rules: Vec<FirewallRule>,
}

/// The platform serializes some identifiers as JSON numbers and others as
/// strings; fold both into `String`.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_both_deserialize() {
        let numeric: PolicyObject = serde_json::from_str(r#"{"id": 123, "name": "Web"}"#).unwrap();
        assert_eq!(numeric.id, "123");

        let string: Network =
            serde_json::from_str(r#"{"id": "L_646829496481099586", "name": "Branch-1"}"#).unwrap();
        assert_eq!(string.id, "L_646829496481099586");
    }

    #[test]
    fn appliance_detection() {
        let network: Network = serde_json::from_str(
            r#"{"id": "N_1", "name": "HQ", "productTypes": ["appliance", "switch"]}"#,
        )
        .unwrap();
        assert!(network.is_appliance());

        let wireless_only: Network =
            serde_json::from_str(r#"{"id": "N_2", "name": "Cafe", "productTypes": ["wireless"]}"#)
                .unwrap();
        assert!(!wireless_only.is_appliance());
    }

    #[test]
    fn rule_container_round_trips_rules_field() {
        let json = r#"{"rules": [{
            "policy": "allow",
            "protocol": "any",
            "srcCidr": "any",
            "destCidr": "any",
            "srcPort": "any",
            "destPort": "any",
            "comment": "Default rule"
        }]}"#;
        let container: L3RuleContainer = serde_json::from_str(json).unwrap();
        assert_eq!(container.rules.len(), 1);
        assert!(container.rules[0].key().is_default_allow());
    }
}
