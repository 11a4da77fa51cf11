use async_trait::async_trait;
use mongodb::{options::ClientOptions, Client};
use tracing::debug;

use super::options::ClientSettings;

/// Failure reported by the underlying driver.
///
/// `Mongo` carries an error from the driver's own taxonomy; `Unexpected`
/// covers anything the driver surfaces outside of it.
#[derive(Debug, thiserror::Error)]
pub enum DriverFailure {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("{0}")]
    Unexpected(String),
}

/// Seam over the MongoDB client so the lifecycle can be exercised without a
/// live server.
#[async_trait]
pub trait MongoDriver: Send + Sync {
    /// Establish a connection to `uri` using the given settings.
    async fn connect(&mut self, uri: &str, settings: &ClientSettings) -> Result<(), DriverFailure>;

    /// Tear down the connection, if any.
    async fn disconnect(&mut self) -> Result<(), DriverFailure>;
}

/// Driver backed by the real MongoDB client. Owns the connection handle
/// between connect and disconnect.
#[derive(Default)]
pub struct MongoClientDriver {
    client: Option<Client>,
}

impl MongoClientDriver {
    pub fn new() -> Self {
        Self { client: None }
    }

    /// The held connection handle, if connected.
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

#[async_trait]
impl MongoDriver for MongoClientDriver {
    async fn connect(&mut self, uri: &str, settings: &ClientSettings) -> Result<(), DriverFailure> {
        let mut options = ClientOptions::parse(uri).await?;
        settings.apply(&mut options);

        let client = Client::with_options(options)?;

        // Client construction is lazy; a listDatabases round-trip forces the
        // handshake so failures surface here rather than on first use.
        client.list_database_names().await?;

        debug!("MongoDB handshake completed");
        self.client = Some(client);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), DriverFailure> {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            debug!("MongoDB client shut down");
        }
        Ok(())
    }
}
