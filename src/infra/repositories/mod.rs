pub mod sqlite_resource_repo;
pub mod sqlite_slot_repo;
pub mod sqlite_schedule_repo;
pub mod sqlite_pricing_rule_repo;

pub mod postgres_resource_repo;
pub mod postgres_slot_repo;
pub mod postgres_schedule_repo;
pub mod postgres_pricing_rule_repo;
