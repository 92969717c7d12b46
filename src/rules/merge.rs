use std::collections::HashSet;

use super::model::{RuleKey, RuleSet};

/// Combine an existing remote rule set with a newly authored one.
///
/// Existing rules keep their positions and win on duplicates; the platform's
/// implicit trailing default-allow-any rule is dropped (the platform appends
/// it again on its own). Incoming rules are appended in their original order
/// whenever their identity key has not been seen yet, which also
/// de-duplicates the incoming set against itself, first occurrence wins.
pub fn merge(existing: RuleSet, incoming: RuleSet) -> RuleSet {
    let mut seen: HashSet<RuleKey> = HashSet::new();
    let mut combined = Vec::with_capacity(existing.len() + incoming.len());

    for rule in existing {
        let key = rule.key();
        if key.is_default_allow() {
            continue;
        }
        seen.insert(key);
        combined.push(rule);
    }

    for rule in incoming {
        if seen.insert(rule.key()) {
            combined.push(rule);
        }
    }

    combined
}
