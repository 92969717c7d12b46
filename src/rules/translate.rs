use std::fmt;

use crate::catalog::ReferenceIndex;

/// Outcome of resolving one address-field string against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressRef<'a> {
    /// The string names a known policy object.
    Object(&'a str),
    /// The string names a known policy object group.
    Group(&'a str),
    /// Anything else: a raw CIDR, `any`, or an unknown name, passed through.
    Literal(&'a str),
}

impl<'a> AddressRef<'a> {
    /// Resolve an address-field string.
    ///
    /// Objects are checked before groups: when an object and a group share a
    /// name, the object wins. That precedence is deliberate and load-bearing,
    /// not an accident of iteration order.
    pub fn resolve(index: &'a ReferenceIndex, address: &'a str) -> Self {
        if let Some(id) = index.lookup_object(address) {
            return Self::Object(id);
        }
        if let Some(id) = index.lookup_group(address) {
            return Self::Group(id);
        }
        Self::Literal(address)
    }
}

impl fmt::Display for AddressRef<'_> {
    /// Render in the platform's inline reference syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(id) => write!(f, "OBJ({id})"),
            Self::Group(id) => write!(f, "GRP({id})"),
            Self::Literal(s) => f.write_str(s),
        }
    }
}

/// Translate one address-field string into the platform's reference syntax,
/// or return it unchanged when it names nothing in the catalog.
pub fn translate(index: &ReferenceIndex, address: &str) -> String {
    AddressRef::resolve(index, address).to_string()
}
