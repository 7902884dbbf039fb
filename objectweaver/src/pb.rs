//! # Wire Bindings
//!
//! Protobuf messages and `JSONSchemaService` stubs generated from `proto/jsonSchema.proto`.
//!
//! The bindings are checked in; regenerate them with
//! `cargo run -p objectweaver-sdk --features gen-proto --bin generate-proto`.
#![allow(clippy::all, missing_docs)]

include!("pb/jsonSchema.rs");

pub use json_schema_service_client::JsonSchemaServiceClient;
pub use json_schema_service_server::{JsonSchemaService, JsonSchemaServiceServer};
