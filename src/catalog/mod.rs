use std::collections::HashMap;

use crate::api::types::{PolicyObject, PolicyObjectGroup};

/// Name-to-identifier index over the organization's policy objects and groups.
///
/// Built once per run from the remote catalog, then updated in place as the
/// run creates new entities, so later translations see them without another
/// fetch. Entries are never removed; nothing in this tool deletes objects.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    objects: HashMap<String, String>,
    groups: HashMap<String, String>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from the remote catalog listings.
    pub fn from_catalog(objects: &[PolicyObject], groups: &[PolicyObjectGroup]) -> Self {
        let mut index = Self::new();
        for object in objects {
            index.register_object(&object.name, &object.id);
        }
        for group in groups {
            index.register_group(&group.name, &group.id);
        }
        index
    }

    pub fn lookup_object(&self, name: &str) -> Option<&str> {
        self.objects.get(name).map(String::as_str)
    }

    pub fn lookup_group(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    /// Record a freshly created policy object. Call immediately after the
    /// remote creation succeeds.
    pub fn register_object(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.objects.insert(name.into(), id.into());
    }

    /// Record a freshly created policy object group. Call immediately after
    /// the remote creation succeeds.
    pub fn register_group(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.groups.insert(name.into(), id.into());
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_catalog_indexes_both_kinds() {
        let objects = vec![
            PolicyObject {
                id: "1".to_string(),
                name: "Web-Server".to_string(),
            },
            PolicyObject {
                id: "2".to_string(),
                name: "DB-Server".to_string(),
            },
        ];
        let groups = vec![PolicyObjectGroup {
            id: "10".to_string(),
            name: "Servers".to_string(),
        }];

        let index = ReferenceIndex::from_catalog(&objects, &groups);
        assert_eq!(index.lookup_object("Web-Server"), Some("1"));
        assert_eq!(index.lookup_object("DB-Server"), Some("2"));
        assert_eq!(index.lookup_group("Servers"), Some("10"));
        assert_eq!(index.lookup_object("Servers"), None);
        assert_eq!(index.lookup_group("Web-Server"), None);
    }

    #[test]
    fn registered_entries_are_immediately_visible() {
        let mut index = ReferenceIndex::new();
        assert_eq!(index.lookup_group("Branches"), None);

        index.register_group("Branches", "77");
        assert_eq!(index.lookup_group("Branches"), Some("77"));
    }

    #[test]
    fn a_name_maps_to_one_id() {
        let mut index = ReferenceIndex::new();
        index.register_object("Web-Server", "1");
        index.register_object("Web-Server", "2");
        assert_eq!(index.lookup_object("Web-Server"), Some("2"));
        assert_eq!(index.object_count(), 1);
    }
}
