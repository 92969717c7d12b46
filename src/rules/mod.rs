pub mod merge;
pub mod model;
pub mod translate;

pub use merge::merge;
pub use model::{FirewallRule, RuleKey, RuleSet};
pub use translate::{AddressRef, translate};
