//! # ObjectWeaver SDK
//!
//! Client library for the ObjectWeaver service, which generates structured objects with
//! language models. The caller describes the object to produce as a [`schema::Definition`]
//! tree and receives the generated object as JSON.
//!
//! ## Key Components
//!
//! * **[`schema`]:** The host data model: definitions, decision points, scoring, loops,
//!   media requests and model configuration. Everything is `serde` (de)serializable.
//! * **[`convert`]:** Translation between the host model and the protobuf messages.
//! * **[`client`]:** [`client::ObjectWeaverClient`] (connect per call) and
//!   [`client::JsonSchemaClient`] (over any tonic service), with unary and streamed
//!   generation.
//! * **[`pb`]:** The generated wire messages and `JSONSchemaService` stubs.
//!
//! ## Feature Flags (Internal use only)
//!
//! * `gen-proto`: Enables the binary regenerating the bindings under `src/pb`.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost`, `prost-types` and `tonic` to ensure that consumers
//! use compatible versions of these underlying dependencies.
pub mod client;
pub mod convert;
pub mod pb;
pub mod schema;

// Re-exports
pub use prost;
pub use prost_types;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
