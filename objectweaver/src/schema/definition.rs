use super::{
    Choices, DataType, DecisionPoint, EpistemicValidation, Focus, HashMapDefinition, Image,
    ModelConfig, RecursiveLoop, RequestFormat, ScoringCriteria, SendImage, SpeechToText,
    TextToSpeech,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Values for [`Definition::priority`].
pub mod priority {
    /// Takes precedence over every other request.
    pub const URGENT: i32 = 2;
    pub const STANDARD: i32 = 1;
    pub const LOW: i32 = 0;
    /// Batch usage.
    pub const EVENTUAL: i32 = -1;
}

/// One node of the requested output, and through `properties` and `items`, the
/// whole output tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Definition {
    #[serde(rename = "type", skip_serializing_if = "DataType::is_empty")]
    pub data_type: DataType,

    /// What to generate at this node.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instruction: String,

    /// Child nodes of an [`DataType::OBJECT`] node, keyed by property name.
    pub properties: HashMap<String, Definition>,

    /// Element type of an [`DataType::ARRAY`] node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Definition>>,

    /// Exact model name as the provider knows it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,

    /// Properties generated before any other property of this node.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub processing_order: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Dotted absolute paths of already generated values to carry into this node,
    /// e.g. `car.color`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_fields: Vec<String>,

    #[serde(alias = "HashMap", skip_serializing_if = "Option::is_none")]
    pub hash_map: Option<HashMapDefinition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrow_focus: Option<Focus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub req: Option<RequestFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Choices>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_image: Option<SendImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_to_speech: Option<TextToSpeech>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_to_text: Option<SpeechToText>,

    #[serde(skip_serializing_if = "is_false")]
    pub stream: bool,

    #[serde(skip_serializing_if = "is_zero_f64")]
    pub temp: f64,

    #[serde(skip_serializing_if = "is_zero_i64")]
    pub seed: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_prompt: Option<String>,

    /// See [`priority`].
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub priority: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_point: Option<DecisionPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_criteria: Option<ScoringCriteria>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_loop: Option<RecursiveLoop>,

    pub epistemic: EpistemicValidation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_config: Option<ModelConfig>,
}

impl Definition {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            ..Default::default()
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.properties.insert(name.into(), definition);
        self
    }

    pub fn with_items(mut self, items: Definition) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Number of nodes in the tree rooted here, counting every nested definition.
    pub fn node_count(&self) -> usize {
        let branches = self
            .decision_point
            .iter()
            .chain(
                self.recursive_loop
                    .iter()
                    .filter_map(|l| l.termination_point.as_ref()),
            )
            .flat_map(|point| &point.branches)
            .map(|branch| {
                branch.then.node_count() + branch.logic.as_ref().map_or(0, |l| l.node_count())
            })
            .sum::<usize>();

        1 + self.properties.values().map(Definition::node_count).sum::<usize>()
            + self.items.as_ref().map_or(0, |items| items.node_count())
            + self
                .hash_map
                .as_ref()
                .and_then(|h| h.field_definition.as_ref())
                .map_or(0, |d| d.node_count())
            + branches
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ComparisonOperator, Condition, ConditionalBranch, RoutingStrategy};
    use serde_json::json;

    #[test]
    fn deserializes_service_documented_json() {
        let definition: Definition = serde_json::from_value(json!({
            "type": "object",
            "instruction": "Describe a car",
            "properties": {
                "color": { "type": "string", "instruction": "Pick a color" }
            },
            "processingOrder": ["color"],
            "systemPrompt": "You are a car dealer",
            "HashMap": { "keyInstruction": "name" },
            "priority": 2
        }))
        .unwrap();

        assert_eq!(definition.data_type, DataType::OBJECT);
        assert_eq!(definition.properties["color"].data_type, DataType::STRING);
        assert_eq!(definition.processing_order, ["color"]);
        assert_eq!(definition.system_prompt.as_deref(), Some("You are a car dealer"));
        assert_eq!(definition.hash_map.unwrap().key_instruction, "name");
        assert_eq!(definition.priority, priority::URGENT);
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let value = serde_json::to_value(Definition::new(DataType::STRING)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "string",
                "properties": {},
                "epistemic": { "active": false, "judges": 0 }
            })
        );
    }

    #[test]
    fn node_count_walks_every_nested_definition() {
        let nested = Definition::new(DataType::STRING).with_instruction("rewrite");
        let definition = Definition {
            decision_point: Some(DecisionPoint {
                strategy: RoutingStrategy::SCORE,
                branches: vec![ConditionalBranch {
                    conditions: vec![Condition::new("depth", ComparisonOperator::LESS_THAN, 60)],
                    then: Box::new(nested.clone()),
                    logic: Some(Box::new(nested.clone())),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Definition::new(DataType::OBJECT)
                .with_property("a", nested.clone())
                .with_property("b", Definition::new(DataType::ARRAY).with_items(nested))
        };

        // root, a, b, b.items, then, logic
        assert_eq!(definition.node_count(), 6);
    }
}
