pub mod aggregator;
pub mod filtering;
pub mod humidity;
