pub mod objects;
pub mod rules;

pub use objects::{ObjectRow, read_object_table};
pub use rules::read_rule_table;
