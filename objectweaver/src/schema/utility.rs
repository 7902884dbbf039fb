use super::{Definition, HttpMethod};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Restricts which property keys of an object node the service may populate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choices {
    /// How many of the options get selected.
    pub number: u32,
    /// Property keys to choose from.
    pub options: Vec<String>,
}

/// Narrows the context sent with a generation request to a few fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Focus {
    pub prompt: String,
    /// Fields presented below the prompt, in this order.
    pub fields: Vec<String>,
    /// Keep the original prompt for list items, where it would otherwise be dropped.
    pub keep_original: bool,
}

/// Dynamic-keyed output: the service invents the keys and every value follows
/// `field_definition`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashMapDefinition {
    pub key_instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_definition: Option<Box<Definition>>,
}

/// Outbound HTTP request issued by the service while generating a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestFormat {
    pub url: String,
    pub method: HttpMethod,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authorization: String,
    #[serde(skip_serializing_if = "Vec::is_empty", alias = "requirFields")]
    pub require_fields: Vec<String>,
}
