use crate::convert::structured::{self, StructuredValueError};
use crate::pb;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Outcome of a unary generation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    /// The generated object. `None` when the service sent no payload.
    pub data: Option<Map<String, Value>>,
    pub usd_cost: f64,
}

impl GenerateResult {
    /// Deserializes the generated object into a caller type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        parse_data(self.data.as_ref())
    }
}

impl TryFrom<pb::ResponseBody> for GenerateResult {
    type Error = StructuredValueError;

    fn try_from(response: pb::ResponseBody) -> Result<Self, Self::Error> {
        Ok(Self {
            data: response.data.map(structured::struct_to_map).transpose()?,
            usd_cost: response.usd_cost,
        })
    }
}

/// One item of a streamed generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StreamedResult {
    pub data: Option<Map<String, Value>>,
    pub usd_cost: f64,
    pub status: String,
    /// Per-field generation details, as sent by the service.
    pub detailed_data: HashMap<String, pb::DetailedField>,
}

impl StreamedResult {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        parse_data(self.data.as_ref())
    }

    /// Values of every detailed field that carries one.
    pub fn detailed_values(&self) -> Result<HashMap<String, Map<String, Value>>, StructuredValueError> {
        self.detailed_data
            .iter()
            .filter_map(|(name, field)| match detailed_field_value(field) {
                Ok(Some(value)) => Some(Ok((name.clone(), value))),
                Ok(None) => None,
                Err(err) => Some(Err(err)),
            })
            .collect()
    }
}

impl TryFrom<pb::StreamedResponseBody> for StreamedResult {
    type Error = StructuredValueError;

    fn try_from(response: pb::StreamedResponseBody) -> Result<Self, Self::Error> {
        Ok(Self {
            data: response.data.map(structured::struct_to_map).transpose()?,
            usd_cost: response.usd_cost,
            status: response.status,
            detailed_data: response.detailed_data,
        })
    }
}

pub fn detailed_field_value(
    field: &pb::DetailedField,
) -> Result<Option<Map<String, Value>>, StructuredValueError> {
    field
        .value
        .clone()
        .map(structured::struct_to_map)
        .transpose()
}

pub fn field_metadata(field: &pb::DetailedField) -> Option<&pb::FieldMetadata> {
    field.metadata.as_ref()
}

pub fn choice_value(choice: &pb::Choice) -> Result<Option<Map<String, Value>>, StructuredValueError> {
    choice
        .value
        .clone()
        .map(structured::struct_to_map)
        .transpose()
}

fn parse_data<T: DeserializeOwned>(data: Option<&Map<String, Value>>) -> Result<T, serde_json::Error> {
    let value = data.cloned().map_or(Value::Null, Value::Object);
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_struct(value: Value) -> prost_types::Struct {
        structured::map_to_struct(value.as_object().unwrap())
    }

    #[test]
    fn unary_response_is_shaped_into_a_map() {
        let result = GenerateResult::try_from(pb::ResponseBody {
            data: Some(to_struct(json!({ "color": "red", "doors": 4 }))),
            usd_cost: 0.0012,
        })
        .unwrap();

        assert_eq!(result.usd_cost, 0.0012);
        assert_eq!(result.data.as_ref().unwrap()["doors"], json!(4));

        #[derive(Deserialize)]
        struct Car {
            color: String,
            doors: u8,
        }
        let car: Car = result.parse().unwrap();
        assert_eq!((car.color.as_str(), car.doors), ("red", 4));
    }

    #[test]
    fn missing_payload_is_unset() {
        let result = GenerateResult::try_from(pb::ResponseBody::default()).unwrap();
        assert_eq!(result.data, None);
    }

    #[test]
    fn detailed_fields_pass_through_and_decode_on_demand() {
        let field = pb::DetailedField {
            value: Some(to_struct(json!({ "value": "red" }))),
            metadata: Some(pb::FieldMetadata {
                tokens_used: 12,
                cost: 0.0001,
                model_used: "gpt-4o-mini".to_string(),
                choices: vec![pb::Choice {
                    score: 87,
                    confidence: 0.9,
                    value: Some(to_struct(json!({ "value": "crimson" }))),
                }],
            }),
        };
        let result = StreamedResult::try_from(pb::StreamedResponseBody {
            status: "processing".to_string(),
            detailed_data: HashMap::from([
                ("color".to_string(), field),
                ("pending".to_string(), pb::DetailedField::default()),
            ]),
            ..Default::default()
        })
        .unwrap();

        let values = result.detailed_values().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["color"]["value"], json!("red"));

        let metadata = field_metadata(&result.detailed_data["color"]).unwrap();
        assert_eq!(metadata.model_used, "gpt-4o-mini");
        let choice = choice_value(&metadata.choices[0]).unwrap().unwrap();
        assert_eq!(choice["value"], json!("crimson"));
    }
}
