pub mod availability;
pub mod booking_page;
pub mod calendar;
pub mod pricing;
pub mod selection;
pub mod slot_matrix;
