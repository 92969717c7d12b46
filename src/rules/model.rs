use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One L3 outbound firewall rule.
///
/// The six fixed fields form the rule's identity; everything else (comment,
/// syslog flags, any column the input table carries beyond the six) travels
/// in `extras` and is forwarded to the platform untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    pub policy: String,
    pub protocol: String,
    pub src_cidr: String,
    pub dest_cidr: String,
    pub src_port: String,
    pub dest_port: String,
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

/// Ordered rule list; position matters, the consuming firewall is first-match-wins.
pub type RuleSet = Vec<FirewallRule>;

/// Case-insensitive identity key over the six fixed fields.
///
/// Two rules with equal keys are the same rule regardless of comment or any
/// other extra attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey([String; 6]);

const DEFAULT_ALLOW_KEY: [&str; 6] = ["allow", "any", "any", "any", "any", "any"];

impl RuleKey {
    /// Whether this key matches the platform's implicit trailing
    /// default-allow-any rule, which is never carried forward explicitly.
    pub fn is_default_allow(&self) -> bool {
        self.0.iter().map(String::as_str).eq(DEFAULT_ALLOW_KEY)
    }
}

impl FirewallRule {
    pub fn new(
        policy: impl Into<String>,
        protocol: impl Into<String>,
        src_cidr: impl Into<String>,
        dest_cidr: impl Into<String>,
        src_port: impl Into<String>,
        dest_port: impl Into<String>,
    ) -> Self {
        Self {
            policy: policy.into(),
            protocol: protocol.into(),
            src_cidr: src_cidr.into(),
            dest_cidr: dest_cidr.into(),
            src_port: src_port.into(),
            dest_port: dest_port.into(),
            extras: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> RuleKey {
        RuleKey([
            self.policy.to_lowercase(),
            self.protocol.to_lowercase(),
            self.src_cidr.to_lowercase(),
            self.dest_cidr.to_lowercase(),
            self.src_port.to_lowercase(),
            self.dest_port.to_lowercase(),
        ])
    }
}
