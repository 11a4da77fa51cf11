//! MongoDB connection lifecycle
//!
//! Owns a single connection handle and the fixed client settings applied to
//! every connection attempt.

mod driver;
mod events;
mod health;
mod lifecycle;
mod options;

pub use driver::{DriverFailure, MongoClientDriver, MongoDriver};
pub use events::{LifecycleEvents, TracingEvents};
pub use health::{check_health, check_health_detailed, HealthStatus};
pub use lifecycle::MongoLifecycle;
pub use options::ClientSettings;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
