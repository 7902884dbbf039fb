use super::structured::StructuredValueError;
use super::{prompt_from_wire, prompt_to_wire};
use crate::pb;
use crate::schema::{
    DecisionPoint, Definition, HashMapDefinition, ModelConfig, RecursiveLoop, RequestFormat,
    SpeechToText,
};

impl From<&Definition> for pb::Definition {
    fn from(definition: &Definition) -> Self {
        Self {
            r#type: definition.data_type.to_string(),
            instruction: definition.instruction.clone(),
            properties: definition
                .properties
                .iter()
                .map(|(name, child)| (name.clone(), pb::Definition::from(child)))
                .collect(),
            items: definition
                .items
                .as_deref()
                .map(|items| Box::new(items.into())),
            model: definition.model.clone(),
            processing_order: definition.processing_order.clone(),
            system_prompt: prompt_to_wire(definition.system_prompt.as_deref()),
            select_fields: definition.select_fields.clone(),
            hash_map: definition
                .hash_map
                .as_ref()
                .map(|map| Box::new(map.into())),
            narrow_focus: definition.narrow_focus.as_ref().map(Into::into),
            req: definition.req.as_ref().map(Into::into),
            choices: definition.choices.as_ref().map(Into::into),
            speech_to_text: definition.speech_to_text.as_ref().map(Into::into),
            text_to_speech: definition.text_to_speech.as_ref().map(Into::into),
            image: definition.image.as_ref().map(Into::into),
            send_image: definition.send_image.as_ref().map(Into::into),
            stream: definition.stream,
            temp: definition.temp,
            override_prompt: prompt_to_wire(definition.override_prompt.as_deref()),
            priority: definition.priority,
            decision_point: definition.decision_point.as_ref().map(Into::into),
            scoring_criteria: definition.scoring_criteria.as_ref().map(Into::into),
            recursive_loop: definition.recursive_loop.as_ref().map(Into::into),
            epistemic: Some((&definition.epistemic).into()),
            model_config: definition.model_config.as_ref().map(Into::into),
            seed: definition.seed,
        }
    }
}

impl TryFrom<pb::Definition> for Definition {
    type Error = StructuredValueError;

    fn try_from(definition: pb::Definition) -> Result<Self, Self::Error> {
        Ok(Self {
            data_type: definition.r#type.into(),
            instruction: definition.instruction,
            properties: definition
                .properties
                .into_iter()
                .map(|(name, child)| Ok((name, Definition::try_from(child)?)))
                .collect::<Result<_, StructuredValueError>>()?,
            items: definition
                .items
                .map(|items| Definition::try_from(*items).map(Box::new))
                .transpose()?,
            model: definition.model,
            processing_order: definition.processing_order,
            system_prompt: prompt_from_wire(definition.system_prompt),
            select_fields: definition.select_fields,
            hash_map: definition
                .hash_map
                .map(|map| HashMapDefinition::try_from(*map))
                .transpose()?,
            narrow_focus: definition.narrow_focus.map(Into::into),
            req: definition.req.map(RequestFormat::try_from).transpose()?,
            choices: definition.choices.map(Into::into),
            send_image: definition.send_image.map(Into::into),
            image: definition.image.map(Into::into),
            text_to_speech: definition.text_to_speech.map(Into::into),
            speech_to_text: definition
                .speech_to_text
                .map(SpeechToText::try_from)
                .transpose()?,
            stream: definition.stream,
            temp: definition.temp,
            seed: definition.seed,
            override_prompt: prompt_from_wire(definition.override_prompt),
            priority: definition.priority,
            decision_point: definition
                .decision_point
                .map(DecisionPoint::try_from)
                .transpose()?,
            scoring_criteria: definition.scoring_criteria.map(Into::into),
            recursive_loop: definition
                .recursive_loop
                .map(RecursiveLoop::try_from)
                .transpose()?,
            epistemic: definition.epistemic.map(Into::into).unwrap_or_default(),
            model_config: definition
                .model_config
                .map(ModelConfig::try_from)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        AggregationMethod, Choices, ComparisonOperator, Condition, ConditionValue,
        ConditionalBranch, DataType, EpistemicValidation, Focus, HttpMethod, Image,
        RoutingStrategy, ScoreScale, ScoreType, ScoringCriteria, ScoringDimension,
        SelectionStrategy, TextToSpeech, priority,
    };
    use serde_json::json;
    use std::collections::HashMap;

    fn round_trip(definition: &Definition) -> Definition {
        Definition::try_from(pb::Definition::from(definition)).unwrap()
    }

    fn string(instruction: &str) -> Definition {
        Definition::new(DataType::STRING).with_instruction(instruction)
    }

    fn quality_gate(then: Definition) -> DecisionPoint {
        DecisionPoint {
            name: "QualityGate".to_string(),
            evaluation_prompt: "Rate the draft".to_string(),
            strategy: RoutingStrategy::SCORE,
            branches: vec![
                ConditionalBranch {
                    name: "Rewrite".to_string(),
                    conditions: vec![Condition::new(
                        "quality",
                        ComparisonOperator::LESS_THAN,
                        60,
                    )],
                    then: Box::new(then),
                    priority: 10,
                    ..Default::default()
                },
                ConditionalBranch {
                    name: "Accept".to_string(),
                    conditions: vec![Condition::new(
                        "quality",
                        ComparisonOperator::GREATER_THAN_OR_EQUAL,
                        60,
                    )],
                    logic: Some(Box::new(string("Explain why it passed"))),
                    then: Box::new(string("Summarize")),
                    ..Default::default()
                },
            ],
        }
    }

    /// A definition touching every attribute.
    fn kitchen_sink() -> Definition {
        Definition {
            instruction: "Write an article".to_string(),
            model: "gpt-4o".to_string(),
            processing_order: vec!["title".into(), "body".into(), "tags".into()],
            system_prompt: Some("You are an editor".to_string()),
            select_fields: vec!["topic.name".into(), "topic.audience".into()],
            hash_map: Some(HashMapDefinition {
                key_instruction: "section name".to_string(),
                field_definition: Some(Box::new(string("section text"))),
            }),
            narrow_focus: Some(Focus {
                prompt: "Focus on".to_string(),
                fields: vec!["title".into()],
                keep_original: true,
            }),
            req: Some(RequestFormat {
                url: "https://example.com".to_string(),
                method: HttpMethod::POST,
                body: Some(
                    json!({ "q": "rust", "limit": 5 })
                        .as_object()
                        .cloned()
                        .unwrap(),
                ),
                ..Default::default()
            }),
            choices: Some(Choices {
                number: 1,
                options: vec!["title".into(), "body".into()],
            }),
            image: Some(Image {
                model: "dall-e-3".to_string(),
                size: "1024x1024".to_string(),
            }),
            text_to_speech: Some(TextToSpeech {
                model: "tts-1".to_string(),
                voice: "alloy".to_string(),
                ..Default::default()
            }),
            stream: true,
            temp: 0.3,
            seed: 1234,
            override_prompt: Some("Only output JSON".to_string()),
            priority: priority::URGENT,
            decision_point: Some(quality_gate(string("Rewrite it"))),
            scoring_criteria: Some(ScoringCriteria {
                dimensions: HashMap::from([(
                    "quality".to_string(),
                    ScoringDimension {
                        description: "Overall".to_string(),
                        scale: Some(ScoreScale::new(1, 100)),
                        score_type: ScoreType::NUMERIC,
                        weight: 1.0,
                    },
                )]),
                aggregation_method: AggregationMethod::MINIMUM,
                ..Default::default()
            }),
            recursive_loop: Some(RecursiveLoop {
                max_iterations: 4,
                selection: SelectionStrategy::new("median"),
                termination_point: Some(quality_gate(string("Stop"))),
                ..Default::default()
            }),
            epistemic: EpistemicValidation {
                active: true,
                judges: 3,
            },
            model_config: Some(ModelConfig {
                seed: Some(7),
                temperature: 0.2,
                ..Default::default()
            }),
            ..Definition::new(DataType::OBJECT)
                .with_property("title", string("A title"))
                .with_property("body", string("The body"))
                .with_property(
                    "tags",
                    Definition::new(DataType::ARRAY).with_items(string("A tag")),
                )
        }
    }

    #[test]
    fn every_attribute_survives_a_round_trip() {
        let definition = kitchen_sink();
        assert_eq!(round_trip(&definition), definition);
    }

    #[test]
    fn conversion_does_not_touch_the_input() {
        let definition = kitchen_sink();
        let before = definition.clone();

        let _ = pb::Definition::from(&definition);

        assert_eq!(definition, before);
    }

    #[test]
    fn empty_object_round_trips() {
        let definition = Definition::new(DataType::OBJECT);

        let back = round_trip(&definition);

        assert_eq!(back.data_type, DataType::OBJECT);
        assert!(back.properties.is_empty());
        assert_eq!(back, definition);
    }

    #[test]
    fn nested_decision_trees_keep_both_levels() {
        let inner = Definition {
            decision_point: Some(quality_gate(string("Inner rewrite"))),
            ..string("Inner")
        };
        let definition = Definition {
            decision_point: Some(quality_gate(inner)),
            ..Definition::new(DataType::OBJECT)
        };

        let back = round_trip(&definition);

        let outer = back.decision_point.as_ref().unwrap();
        let nested = outer.branches[0].then.decision_point.as_ref().unwrap();
        assert_eq!(nested.branches[0].then.instruction, "Inner rewrite");
        assert_eq!(
            nested.branches[1].conditions[0].value,
            Some(ConditionValue::Number(60.0))
        );
        assert_eq!(back, definition);
    }

    #[test]
    fn hash_map_field_definition_is_recursive() {
        let definition = Definition {
            hash_map: Some(HashMapDefinition {
                key_instruction: "name".to_string(),
                field_definition: Some(Box::new(string("describe"))),
            }),
            ..Definition::new(DataType::MAP)
        };

        let back = round_trip(&definition);

        let field = back.hash_map.unwrap().field_definition.unwrap();
        assert_eq!(field.data_type, DataType::STRING);
        assert_eq!(field.instruction, "describe");
    }

    #[test]
    fn prompts_use_empty_strings_for_unset() {
        let unset = Definition::new(DataType::STRING);
        let wire = pb::Definition::from(&unset);
        assert_eq!(wire.system_prompt, "");
        assert_eq!(round_trip(&unset).system_prompt, None);

        let set = Definition {
            system_prompt: Some("Be brief".to_string()),
            ..unset.clone()
        };
        assert_eq!(round_trip(&set).system_prompt.as_deref(), Some("Be brief"));

        let empty = Definition {
            system_prompt: Some(String::new()),
            override_prompt: Some(String::new()),
            ..unset
        };
        let back = round_trip(&empty);
        assert_eq!(back.system_prompt, None);
        assert_eq!(back.override_prompt, None);
    }

    #[test]
    fn epistemic_is_always_sent_and_defaults_when_missing() {
        let wire = pb::Definition::from(&Definition::default());
        assert_eq!(
            wire.epistemic,
            Some(pb::EpistemicValidation {
                active: false,
                judges: 0
            })
        );

        let back = Definition::try_from(pb::Definition {
            epistemic: None,
            ..wire
        })
        .unwrap();
        assert_eq!(back.epistemic, EpistemicValidation::default());
    }

    #[test]
    fn unset_sub_entities_stay_unset_on_the_wire() {
        let wire = pb::Definition::from(&Definition::new(DataType::STRING));

        assert_eq!(wire.items, None);
        assert_eq!(wire.hash_map, None);
        assert_eq!(wire.decision_point, None);
        assert_eq!(wire.model_config, None);
        assert_eq!(wire.req, None);
    }

    #[test]
    fn property_keys_are_preserved() {
        let definition = kitchen_sink();

        let back = round_trip(&definition);

        let mut keys: Vec<_> = back.properties.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["body", "tags", "title"]);
        assert_eq!(back.properties["tags"], definition.properties["tags"]);
    }

    #[test]
    fn deep_trees_convert_every_node() {
        let mut definition = string("leaf");
        for depth in 0..64 {
            definition = Definition::new(DataType::OBJECT)
                .with_property(format!("level{depth}"), definition)
                .with_property("sibling", string("sibling"));
        }

        let back = round_trip(&definition);

        assert_eq!(back.node_count(), definition.node_count());
        assert_eq!(back, definition);
    }

    #[test]
    fn chat_template_kwargs_round_trip_through_the_definition() {
        let definition = Definition {
            model_config: Some(ModelConfig::default().with_chat_template_kwargs(&json!({
                "enable_thinking": true,
                "options": { "style": "formal", "depth": 2 }
            }))),
            ..Definition::new(DataType::STRING)
        };

        let back = round_trip(&definition);

        assert_eq!(
            back.model_config.unwrap().chat_template_kwargs,
            definition.model_config.unwrap().chat_template_kwargs
        );
    }
}
