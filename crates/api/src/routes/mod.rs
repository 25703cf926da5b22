pub mod fields;
pub mod health;
pub mod metrics;
