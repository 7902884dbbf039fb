//! # ObjectWeaver Client
//!
//! Two ways to talk to the service:
//!
//! * **[`ObjectWeaverClient`]**: owns a [`ClientConfig`] and opens a fresh connection for
//!   every call, closing it when the call (or the returned stream) is done.
//! * **[`JsonSchemaClient`]**: the same operations over a tonic service you already have,
//!   e.g. a shared [`tonic::transport::Channel`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use objectweaver::client::{ClientConfig, ObjectWeaverClient};
//! use objectweaver::schema::{DataType, Definition};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ObjectWeaverClient::new(ClientConfig::new("localhost:2008", "my-api-key"));
//!
//! let definition = Definition::new(DataType::OBJECT)
//!     .with_instruction("A car for sale")
//!     .with_property("color", Definition::new(DataType::STRING).with_instruction("Its color"));
//!
//! let result = client.generate("Generate a car", &definition).await?;
//! println!("{:?} for ${}", result.data, result.usd_cost);
//!
//! client
//!     .stream_generate("Generate a car", &definition, |item| {
//!         println!("{}: {:?}", item.status, item.data);
//!         Ok::<_, std::io::Error>(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is retried. There is no cancellation handle besides dropping the future or the
//! stream; both deadlines (see [`ClientConfig`]) cover the whole call.
mod config;
mod service;
mod types;

pub use config::*;
pub use service::{GeneratedStream, JsonSchemaClient};
pub use types::*;

use crate::BoxError;
use crate::convert::StructuredValueError;
use crate::schema::Definition;
use std::time::Duration;
use tonic::metadata::errors::InvalidMetadataValue;
use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid URL '{0}': '{1}'")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("Failed to connect to '{0}': '{1}'")]
    Connect(String, #[source] tonic::transport::Error),
    #[error("API key is not a valid metadata value: '{0}'")]
    InvalidApiKey(#[source] InvalidMetadataValue),
    #[error("Failed to call {method}: '{status}'")]
    Call {
        method: &'static str,
        #[source]
        status: tonic::Status,
    },
    #[error("Error receiving from stream: '{0}'")]
    Receive(#[source] tonic::Status),
    #[error("Error converting response data: '{0}'")]
    Decode(#[from] StructuredValueError),
    #[error("Sink error: '{0}'")]
    Sink(#[source] BoxError),
    #[error("{method} did not complete within {timeout:?}")]
    DeadlineExceeded {
        method: &'static str,
        timeout: Duration,
    },
}

/// Connect-per-call client.
#[derive(Clone, Debug)]
pub struct ObjectWeaverClient {
    config: ClientConfig,
}

impl ObjectWeaverClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// See [`JsonSchemaClient::generate`].
    pub async fn generate(
        &self,
        prompt: impl Into<String>,
        definition: &Definition,
    ) -> Result<GenerateResult, GenerateError> {
        let (mut client, _connection) = self.connect().await?;
        client.generate(prompt, definition).await
    }

    /// See [`JsonSchemaClient::stream`]. The connection closes when the stream is dropped.
    pub async fn stream(
        &self,
        prompt: impl Into<String>,
        definition: &Definition,
    ) -> Result<GeneratedStream, GenerateError> {
        let (mut client, connection) = self.connect().await?;
        let stream = client.stream(prompt, definition).await?;
        Ok(stream.with_connection(connection))
    }

    /// See [`JsonSchemaClient::stream_generate`].
    pub async fn stream_generate<F, E>(
        &self,
        prompt: impl Into<String>,
        definition: &Definition,
        sink: F,
    ) -> Result<usize, GenerateError>
    where
        F: FnMut(StreamedResult) -> Result<(), E>,
        E: Into<BoxError>,
    {
        let (mut client, _connection) = self.connect().await?;
        client.stream_generate(prompt, definition, sink).await
    }

    async fn connect(&self) -> Result<(JsonSchemaClient<Channel>, Channel), GenerateError> {
        let uri = self.config.endpoint();
        let span = tracing::debug_span!("objectweaver_connect", uri = %uri);

        async move {
            let endpoint = Endpoint::from_shared(uri.clone())
                .map_err(|e| GenerateError::InvalidUrl(uri.clone(), e))?
                .connect_timeout(self.config.connect_timeout());

            let channel = endpoint
                .connect()
                .await
                .map_err(|e| GenerateError::Connect(uri, e))?;
            tracing::debug!("Connected");

            let client = JsonSchemaClient::new(channel.clone(), self.config.api_key())?
                .with_unary_timeout(self.config.unary_timeout())
                .with_stream_timeout(self.config.stream_timeout());

            Ok((client, channel))
        }
        .instrument(span)
        .await
    }
}
