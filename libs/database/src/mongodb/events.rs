use tracing::{error, info};

use super::options::ClientSettings;

/// Sink for lifecycle outcomes.
///
/// Injected into [`super::MongoLifecycle`] so callers (and tests) can observe
/// connect/disconnect results without a real logging backend.
pub trait LifecycleEvents: Send + Sync {
    /// A connection was established with the given settings.
    fn connected(&self, settings: &ClientSettings);

    /// The connection was torn down with the given settings.
    fn disconnected(&self, settings: &ClientSettings);

    /// The driver reported a failure outside its error taxonomy.
    fn failure(&self, operation: &str, detail: &str);
}

/// Default sink that forwards lifecycle events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEvents;

impl LifecycleEvents for TracingEvents {
    fn connected(&self, settings: &ClientSettings) {
        info!(
            db_name = %settings.db_name,
            app_name = %settings.app_name,
            server_api_version = ?settings.server_api_version,
            strict = settings.strict,
            deprecation_errors = settings.deprecation_errors,
            "Connected to MongoDB"
        );
    }

    fn disconnected(&self, settings: &ClientSettings) {
        info!(
            db_name = %settings.db_name,
            app_name = %settings.app_name,
            server_api_version = ?settings.server_api_version,
            strict = settings.strict,
            deprecation_errors = settings.deprecation_errors,
            "Disconnected from MongoDB"
        );
    }

    fn failure(&self, operation: &str, detail: &str) {
        error!(operation, detail, "Unexpected MongoDB driver failure");
    }
}
