use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::DashfwError;
use crate::rules::{FirewallRule, RuleSet};

/// The six identity columns every rule table must carry, in wire spelling.
const IDENTITY_COLUMNS: [&str; 6] = [
    "policy", "protocol", "srcCidr", "destCidr", "srcPort", "destPort",
];

/// Read the L3 outbound rule table.
///
/// The header row must contain all six identity columns; any additional
/// column (e.g. `comment`) is carried through to the platform as-is. A
/// missing or malformed file is fatal and aborts the run before any remote
/// call.
pub fn read_rule_table(path: &Path) -> Result<RuleSet, DashfwError> {
    let table_err = |source| DashfwError::Table {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(table_err)?;
    let headers = reader.headers().map_err(table_err)?.clone();

    for column in IDENTITY_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashfwError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut rules = Vec::new();
    for record in reader.records() {
        let record = record.map_err(table_err)?;

        let mut identity: [&str; 6] = [""; 6];
        let mut extras = BTreeMap::new();

        for (header, cell) in headers.iter().zip(record.iter()) {
            match IDENTITY_COLUMNS.iter().position(|c| *c == header) {
                Some(slot) => identity[slot] = cell,
                None => {
                    extras.insert(header.to_string(), Value::String(cell.to_string()));
                }
            }
        }

        let [policy, protocol, src_cidr, dest_cidr, src_port, dest_port] = identity;
        let mut rule = FirewallRule::new(policy, protocol, src_cidr, dest_cidr, src_port, dest_port);
        rule.extras = extras;
        rules.push(rule);
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(content: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "{content}").unwrap();
        tmp
    }

    #[test]
    fn parses_identity_and_extra_columns() {
        let tmp = write_table(
            "policy,protocol,srcCidr,destCidr,srcPort,destPort,comment\n\
             allow,tcp,any,Web-Server,any,443,https to web\n\
             deny,any,192.168.0.0/16,any,any,any,\n",
        );

        let rules = read_rule_table(tmp.path()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].policy, "allow");
        assert_eq!(rules[0].dest_cidr, "Web-Server");
        assert_eq!(rules[0].extras["comment"], "https to web");
        assert_eq!(rules[1].extras["comment"], "");
    }

    #[test]
    fn column_order_does_not_matter() {
        let tmp = write_table(
            "destPort,policy,srcPort,protocol,destCidr,srcCidr\n\
             443,allow,any,tcp,10.0.0.0/8,any\n",
        );

        let rules = read_rule_table(tmp.path()).unwrap();
        assert_eq!(
            rules[0],
            FirewallRule::new("allow", "tcp", "any", "10.0.0.0/8", "any", "443")
        );
    }

    #[test]
    fn missing_identity_column_is_rejected() {
        let tmp = write_table("policy,protocol,srcCidr,destCidr,srcPort\nallow,tcp,any,any,any\n");

        let err = read_rule_table(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            DashfwError::MissingColumn { column, .. } if column == "destPort"
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_rule_table(Path::new("no-such-rules.csv")).unwrap_err();
        assert!(matches!(err, DashfwError::Table { .. }));
    }
}
