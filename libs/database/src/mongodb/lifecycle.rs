use core_config::mongodb::MongoConfig;

use super::driver::{DriverFailure, MongoClientDriver, MongoDriver};
use super::events::{LifecycleEvents, TracingEvents};
use super::options::ClientSettings;
use crate::common::{DatabaseError, DatabaseResult};

/// Connection lifecycle for a single MongoDB client.
///
/// Owns the driver seam and the fixed [`ClientSettings`], and applies the
/// error policy of the surrounding system: driver errors from the MongoDB
/// taxonomy are surfaced to the caller, while failures outside it are
/// reported through the event sink and absorbed. Callers that need certainty
/// after an absorbed failure should follow up with a health check.
pub struct MongoLifecycle<D, E = TracingEvents> {
    config: MongoConfig,
    settings: ClientSettings,
    driver: D,
    events: E,
}

impl MongoLifecycle<MongoClientDriver> {
    /// Lifecycle over the real MongoDB client, logging through `tracing`.
    pub fn new(config: MongoConfig) -> Self {
        Self::with_parts(config, MongoClientDriver::new(), TracingEvents)
    }
}

impl<D, E> MongoLifecycle<D, E>
where
    D: MongoDriver,
    E: LifecycleEvents,
{
    /// Lifecycle over caller-supplied driver and event sink.
    pub fn with_parts(config: MongoConfig, driver: D, events: E) -> Self {
        Self {
            config,
            settings: ClientSettings::default(),
            driver,
            events,
        }
    }

    /// Settings used for every connection attempt.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Establish the connection.
    ///
    /// Fails with [`DatabaseError::Config`] before any I/O when the
    /// connection string is empty. Driver errors propagate unchanged; an
    /// unexpected driver failure is reported through the event sink and the
    /// call returns `Ok(())`.
    pub async fn connect(&mut self) -> DatabaseResult<()> {
        if self.config.uri.trim().is_empty() {
            return Err(DatabaseError::Config(
                "connection string is not defined".to_string(),
            ));
        }

        match self.driver.connect(&self.config.uri, &self.settings).await {
            Ok(()) => {
                self.events.connected(&self.settings);
                Ok(())
            }
            Err(DriverFailure::Mongo(e)) => Err(DatabaseError::Mongo(e)),
            Err(DriverFailure::Unexpected(detail)) => {
                self.events.failure("connect", &detail);
                Ok(())
            }
        }
    }

    /// Tear down the connection.
    ///
    /// Unconditional: no connected-state guard, the driver decides what a
    /// disconnect without a prior connect means. Driver errors are rewrapped
    /// carrying only their message; an unexpected driver failure is reported
    /// through the event sink and the call returns `Ok(())`.
    pub async fn disconnect(&mut self) -> DatabaseResult<()> {
        match self.driver.disconnect().await {
            Ok(()) => {
                self.events.disconnected(&self.settings);
                Ok(())
            }
            Err(DriverFailure::Mongo(e)) => Err(DatabaseError::Disconnect(e.to_string())),
            Err(DriverFailure::Unexpected(detail)) => {
                self.events.failure("disconnect", &detail);
                Ok(())
            }
        }
    }
}

impl<E: LifecycleEvents> MongoLifecycle<MongoClientDriver, E> {
    /// The held connection handle, if connected.
    pub fn client(&self) -> Option<&mongodb::Client> {
        self.driver.client()
    }
}
