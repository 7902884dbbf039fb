//! # Generic Service Client
//!
//! [`JsonSchemaClient`] drives the two `JSONSchemaService` methods over any tonic service:
//! a [`Channel`] in production, an in-process `JsonSchemaServiceServer` in tests.
//!
//! Every request carries the `x-api-key` metadata and a `grpc-timeout`. The deadline is
//! also enforced locally, so a server ignoring it cannot stall the caller.
use super::{
    DEFAULT_STREAM_TIMEOUT, DEFAULT_UNARY_TIMEOUT, GenerateError, GenerateResult, StreamedResult,
};
use crate::BoxError;
use crate::pb::{JsonSchemaServiceClient, RequestBody, StreamedResponseBody};
use crate::schema::Definition;
use futures_util::{Stream, StreamExt};
use http_body::Body as HttpBody;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{Instant, timeout_at};
use tonic::codec::Streaming;
use tonic::metadata::AsciiMetadataValue;
use tonic::{client::GrpcService, transport::Channel};

const API_KEY_HEADER: &str = "x-api-key";
const GENERATE_OBJECT: &str = "GenerateObject";
const STREAM_GENERATED_OBJECTS: &str = "StreamGeneratedObjects";

#[derive(Debug, Clone)]
pub struct JsonSchemaClient<S = Channel> {
    client: JsonSchemaServiceClient<S>,
    api_key: AsciiMetadataValue,
    unary_timeout: Duration,
    stream_timeout: Duration,
}

impl<S> JsonSchemaClient<S>
where
    S: GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Fails when the key is not visible ASCII, which gRPC metadata cannot carry.
    pub fn new(service: S, api_key: &str) -> Result<Self, GenerateError> {
        let api_key = AsciiMetadataValue::try_from(api_key).map_err(GenerateError::InvalidApiKey)?;

        Ok(Self {
            client: JsonSchemaServiceClient::new(service),
            api_key,
            unary_timeout: DEFAULT_UNARY_TIMEOUT,
            stream_timeout: DEFAULT_STREAM_TIMEOUT,
        })
    }

    pub fn with_unary_timeout(mut self, timeout: Duration) -> Self {
        self.unary_timeout = timeout;
        self
    }

    pub fn with_stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = timeout;
        self
    }

    /// Generates one object with `GenerateObject`.
    pub async fn generate(
        &mut self,
        prompt: impl Into<String>,
        definition: &Definition,
    ) -> Result<GenerateResult, GenerateError> {
        let timeout = self.unary_timeout;
        let deadline = Instant::now() + timeout;
        let request = self.build_request(prompt.into(), definition, timeout);

        tracing::debug!(method = GENERATE_OBJECT, ?timeout, "Calling service");

        let response = timeout_at(deadline, self.client.generate_object(request))
            .await
            .map_err(|_| GenerateError::DeadlineExceeded {
                method: GENERATE_OBJECT,
                timeout,
            })?
            .map_err(|status| GenerateError::Call {
                method: GENERATE_OBJECT,
                status,
            })?;

        let result = GenerateResult::try_from(response.into_inner())?;
        tracing::debug!(method = GENERATE_OBJECT, usd_cost = result.usd_cost, "Call completed");

        Ok(result)
    }

    /// Starts a `StreamGeneratedObjects` call.
    ///
    /// Resolves once the service accepted the call; items are then pulled lazily from the
    /// returned stream, in the order the service sent them. The stream ends after the first
    /// error. Dropping it cancels the call.
    pub async fn stream(
        &mut self,
        prompt: impl Into<String>,
        definition: &Definition,
    ) -> Result<GeneratedStream, GenerateError> {
        let timeout = self.stream_timeout;
        let deadline = Instant::now() + timeout;
        let request = self.build_request(prompt.into(), definition, timeout);

        tracing::debug!(method = STREAM_GENERATED_OBJECTS, ?timeout, "Calling service");

        let messages = timeout_at(deadline, self.client.stream_generated_objects(request))
            .await
            .map_err(|_| GenerateError::DeadlineExceeded {
                method: STREAM_GENERATED_OBJECTS,
                timeout,
            })?
            .map_err(|status| GenerateError::Call {
                method: STREAM_GENERATED_OBJECTS,
                status,
            })?
            .into_inner();

        Ok(GeneratedStream::new(messages, deadline, timeout))
    }

    /// Streams a generation into `sink`, one result at a time.
    ///
    /// Stops at the first error, including one returned by `sink`; the remaining items are
    /// discarded. Returns how many results were delivered.
    pub async fn stream_generate<F, E>(
        &mut self,
        prompt: impl Into<String>,
        definition: &Definition,
        mut sink: F,
    ) -> Result<usize, GenerateError>
    where
        F: FnMut(StreamedResult) -> Result<(), E>,
        E: Into<BoxError>,
    {
        let mut stream = self.stream(prompt, definition).await?;
        let mut delivered = 0;

        while let Some(result) = stream.next().await {
            sink(result?).map_err(|err| GenerateError::Sink(err.into()))?;
            delivered += 1;
        }

        Ok(delivered)
    }

    fn build_request(
        &self,
        prompt: String,
        definition: &Definition,
        timeout: Duration,
    ) -> tonic::Request<RequestBody> {
        let mut request = tonic::Request::new(RequestBody {
            prompt,
            definition: Some(definition.into()),
        });
        request
            .metadata_mut()
            .insert(API_KEY_HEADER, self.api_key.clone());
        request.set_timeout(timeout);
        request
    }
}

type ResultStream = Pin<Box<dyn Stream<Item = Result<StreamedResult, GenerateError>> + Send>>;

/// Results of a `StreamGeneratedObjects` call. See [`JsonSchemaClient::stream`].
pub struct GeneratedStream {
    inner: ResultStream,
    // Keeps a per-call connection open for as long as the stream lives.
    connection: Option<Channel>,
}

struct StreamState {
    messages: Streaming<StreamedResponseBody>,
    deadline: Instant,
    timeout: Duration,
    received: usize,
}

impl GeneratedStream {
    fn new(messages: Streaming<StreamedResponseBody>, deadline: Instant, timeout: Duration) -> Self {
        let state = StreamState {
            messages,
            deadline,
            timeout,
            received: 0,
        };

        let inner = futures_util::stream::unfold(Some(state), |state| async move {
            let mut state = state?;

            let item = match timeout_at(state.deadline, state.messages.message()).await {
                Err(_) => Err(GenerateError::DeadlineExceeded {
                    method: STREAM_GENERATED_OBJECTS,
                    timeout: state.timeout,
                }),
                Ok(Err(status)) => Err(GenerateError::Receive(status)),
                Ok(Ok(None)) => {
                    tracing::debug!(
                        method = STREAM_GENERATED_OBJECTS,
                        received = state.received,
                        "Stream completed"
                    );
                    return None;
                }
                Ok(Ok(Some(message))) => {
                    state.received += 1;
                    tracing::debug!(
                        method = STREAM_GENERATED_OBJECTS,
                        received = state.received,
                        status = %message.status,
                        "Received item"
                    );
                    StreamedResult::try_from(message).map_err(GenerateError::from)
                }
            };

            let next = item.is_ok().then_some(state);
            Some((item, next))
        });

        Self {
            inner: Box::pin(inner),
            connection: None,
        }
    }

    pub(crate) fn with_connection(mut self, connection: Channel) -> Self {
        self.connection = Some(connection);
        self
    }
}

impl Stream for GeneratedStream {
    type Item = Result<StreamedResult, GenerateError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for GeneratedStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedStream")
            .field("owns_connection", &self.connection.is_some())
            .finish_non_exhaustive()
    }
}
