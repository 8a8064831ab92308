pub mod add;
pub mod aggregator;
pub mod calculator;
pub mod config;
pub mod punch;
pub mod store;

pub use aggregator::Aggregator;
pub use calculator::Rules;
pub use store::RecordStore;
