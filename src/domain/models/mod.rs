pub mod pricing_rule;
pub mod resource;
pub mod schedule;
pub mod slot;
