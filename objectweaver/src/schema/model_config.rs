use crate::convert::structured;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Sampling parameters forwarded to the model provider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    pub max_completion_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub n: u32,
    pub stream: bool,
    pub stop: Vec<String>,
    pub presence_penalty: f32,
    /// `Some(0)` cannot be expressed on the wire and comes back as `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i32>,
    pub frequency_penalty: f32,
    pub logit_bias: HashMap<String, i32>,
    pub log_probs: bool,
    pub top_log_probs: u32,
    pub user: String,
    pub store: bool,
    pub reasoning_effort: String,
    pub metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_template_kwargs: Option<Map<String, Value>>,
}

impl ModelConfig {
    /// Sets `chat_template_kwargs` from any serializable value.
    ///
    /// Values that do not serialize to a JSON object leave the field unset.
    pub fn with_chat_template_kwargs<T: Serialize + ?Sized>(mut self, kwargs: &T) -> Self {
        self.chat_template_kwargs = match structured::to_map(kwargs) {
            Ok(map) => Some(map),
            Err(err) => {
                tracing::warn!(error = %err, "Leaving chat template kwargs unset");
                None
            }
        };
        self
    }
}
