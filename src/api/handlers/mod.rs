pub mod booking_page;
pub mod health;
pub mod pricing_rule;
pub mod resource;
pub mod schedule;
pub mod slot;
