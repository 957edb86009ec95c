mod persistence;

pub use persistence::{load_rules, load_rules_or_default, save_rules};
