pub mod calendar;
pub mod finance;
