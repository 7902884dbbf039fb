//! # Host ⇄ Wire Conversion
//!
//! Every [`crate::schema`] type converts to its [`crate::pb`] message with `From<&T>` and
//! back with `From` or, when a `google.protobuf.Struct` is reachable from it, `TryFrom`
//! (see [`structured::StructuredValueError`]). Host to wire never fails and never mutates
//! its input.
//!
//! ## Lossy encodings
//!
//! Some host states have no distinct wire form:
//!
//! * `system_prompt` / `override_prompt`: `None` is sent as `""` and `""` is read as `None`,
//!   so `Some("")` comes back as `None`.
//! * `ModelConfig::seed`: `None` is sent as `0`, so `Some(0)` comes back as `None`.
//! * Integral numbers inside structured values are doubles on the wire (see [`structured`]).
//!
//! Counts are `u32` on the host and `int32` on the wire; they are cast, not checked.
mod decision;
mod definition;
mod media;
mod model_config;
mod scoring;
mod utility;

pub mod structured;
pub mod value;

pub use structured::StructuredValueError;

fn prompt_to_wire(prompt: Option<&str>) -> String {
    prompt.unwrap_or_default().to_string()
}

fn prompt_from_wire(prompt: String) -> Option<String> {
    (!prompt.is_empty()).then_some(prompt)
}
