//! Database library providing the MongoDB connection lifecycle.
//!
//! The entry point is [`mongodb::MongoLifecycle`], which owns the connection
//! handle and exposes `connect`/`disconnect` operations:
//!
//! ```ignore
//! use core_config::{mongodb::MongoConfig, FromEnv};
//! use database::mongodb::MongoLifecycle;
//!
//! let config = MongoConfig::from_env()?;
//! let mut lifecycle = MongoLifecycle::new(config);
//! lifecycle.connect().await?;
//! // ...
//! lifecycle.disconnect().await?;
//! ```

pub mod common;
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
