use super::structured::{self, StructuredValueError};
use crate::pb;
use crate::schema::{Choices, Definition, Focus, HashMapDefinition, RequestFormat};

impl From<&Choices> for pb::Choices {
    fn from(choices: &Choices) -> Self {
        Self {
            number: choices.number as i32,
            options: choices.options.clone(),
        }
    }
}

impl From<pb::Choices> for Choices {
    fn from(choices: pb::Choices) -> Self {
        Self {
            number: choices.number as u32,
            options: choices.options,
        }
    }
}

impl From<&Focus> for pb::Focus {
    fn from(focus: &Focus) -> Self {
        Self {
            prompt: focus.prompt.clone(),
            fields: focus.fields.clone(),
            keep_original: focus.keep_original,
        }
    }
}

impl From<pb::Focus> for Focus {
    fn from(focus: pb::Focus) -> Self {
        Self {
            prompt: focus.prompt,
            fields: focus.fields,
            keep_original: focus.keep_original,
        }
    }
}

impl From<&HashMapDefinition> for pb::HashMap {
    fn from(map: &HashMapDefinition) -> Self {
        Self {
            key_instruction: map.key_instruction.clone(),
            field_definition: map
                .field_definition
                .as_deref()
                .map(|definition| Box::new(definition.into())),
        }
    }
}

impl TryFrom<pb::HashMap> for HashMapDefinition {
    type Error = StructuredValueError;

    fn try_from(map: pb::HashMap) -> Result<Self, Self::Error> {
        Ok(Self {
            key_instruction: map.key_instruction,
            field_definition: map
                .field_definition
                .map(|definition| Definition::try_from(*definition).map(Box::new))
                .transpose()?,
        })
    }
}

impl From<&RequestFormat> for pb::RequestFormat {
    fn from(req: &RequestFormat) -> Self {
        Self {
            url: req.url.clone(),
            method: req.method.to_string(),
            headers: req.headers.clone(),
            body: req.body.as_ref().map(structured::map_to_struct),
            authorization: req.authorization.clone(),
            require_fields: req.require_fields.clone(),
        }
    }
}

impl TryFrom<pb::RequestFormat> for RequestFormat {
    type Error = StructuredValueError;

    fn try_from(req: pb::RequestFormat) -> Result<Self, Self::Error> {
        Ok(Self {
            url: req.url,
            method: req.method.into(),
            headers: req.headers,
            body: req.body.map(structured::struct_to_map).transpose()?,
            authorization: req.authorization,
            require_fields: req.require_fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataType, HttpMethod};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn choices_keep_option_order() {
        let choices = Choices {
            number: 2,
            options: vec!["z".into(), "a".into(), "m".into()],
        };

        let wire = pb::Choices::from(&choices);
        assert_eq!(wire.options, ["z", "a", "m"]);
        assert_eq!(Choices::from(wire), choices);
    }

    #[test]
    fn hash_map_definition_recurses_into_the_field_definition() {
        let map = HashMapDefinition {
            key_instruction: "name".to_string(),
            field_definition: Some(Box::new(
                Definition::new(DataType::STRING).with_instruction("describe"),
            )),
        };

        let wire = pb::HashMap::from(&map);
        assert_eq!(wire.field_definition.as_ref().unwrap().r#type, "string");

        let back = HashMapDefinition::try_from(wire).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn request_format_carries_unknown_methods_and_a_json_body() {
        let req = RequestFormat {
            url: "https://example.com/lookup".to_string(),
            method: HttpMethod::new("QUERY"),
            headers: HashMap::from([("Accept".to_string(), "application/json".to_string())]),
            body: structured::to_map(&json!({ "ids": [1, 2, 3], "deep": { "flag": true } })).ok(),
            authorization: "Bearer t".to_string(),
            require_fields: vec!["car.color".to_string()],
        };

        let wire = pb::RequestFormat::from(&req);
        assert_eq!(wire.method, "QUERY");

        assert_eq!(RequestFormat::try_from(wire).unwrap(), req);
    }
}
