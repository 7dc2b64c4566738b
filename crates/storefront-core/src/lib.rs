pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
