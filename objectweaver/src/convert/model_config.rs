use super::structured::{self, StructuredValueError};
use crate::pb;
use crate::schema::ModelConfig;

impl From<&ModelConfig> for pb::ModelConfig {
    fn from(config: &ModelConfig) -> Self {
        Self {
            max_completion_tokens: config.max_completion_tokens as i32,
            temperature: config.temperature,
            top_p: config.top_p,
            n: config.n as i32,
            stream: config.stream,
            stop: config.stop.clone(),
            presence_penalty: config.presence_penalty,
            seed: config.seed.unwrap_or_default(),
            frequency_penalty: config.frequency_penalty,
            logit_bias: config.logit_bias.clone(),
            log_probs: config.log_probs,
            top_log_probs: config.top_log_probs as i32,
            user: config.user.clone(),
            store: config.store,
            reasoning_effort: config.reasoning_effort.clone(),
            metadata: config.metadata.clone(),
            chat_template_kwargs: config
                .chat_template_kwargs
                .as_ref()
                .map(structured::map_to_struct),
        }
    }
}

impl TryFrom<pb::ModelConfig> for ModelConfig {
    type Error = StructuredValueError;

    fn try_from(config: pb::ModelConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            max_completion_tokens: config.max_completion_tokens as u32,
            temperature: config.temperature,
            top_p: config.top_p,
            n: config.n as u32,
            stream: config.stream,
            stop: config.stop,
            presence_penalty: config.presence_penalty,
            // Zero is how an unset seed is encoded.
            seed: (config.seed != 0).then_some(config.seed),
            frequency_penalty: config.frequency_penalty,
            logit_bias: config.logit_bias,
            log_probs: config.log_probs,
            top_log_probs: config.top_log_probs as u32,
            user: config.user,
            store: config.store,
            reasoning_effort: config.reasoning_effort,
            metadata: config.metadata,
            chat_template_kwargs: config
                .chat_template_kwargs
                .map(structured::struct_to_map)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    fn round_trip(config: &ModelConfig) -> ModelConfig {
        ModelConfig::try_from(pb::ModelConfig::from(config)).unwrap()
    }

    #[test]
    fn full_config_round_trips() {
        let config = ModelConfig {
            max_completion_tokens: 512,
            temperature: 0.5,
            top_p: 0.9,
            n: 1,
            stop: vec!["\n\n".to_string(), "END".to_string()],
            seed: Some(42),
            logit_bias: HashMap::from([("50256".to_string(), -100)]),
            top_log_probs: 2,
            log_probs: true,
            user: "user-1".to_string(),
            reasoning_effort: "low".to_string(),
            metadata: HashMap::from([("team".to_string(), "search".to_string())]),
            ..Default::default()
        }
        .with_chat_template_kwargs(&json!({
            "enable_thinking": false,
            "template": { "name": "chatml", "version": 2 }
        }));

        assert_eq!(round_trip(&config), config);
    }

    #[test]
    fn unset_seed_is_sent_as_zero() {
        let wire = pb::ModelConfig::from(&ModelConfig::default());
        assert_eq!(wire.seed, 0);
        assert_eq!(wire.chat_template_kwargs, None);
    }

    #[test]
    fn zero_seed_comes_back_unset() {
        let config = ModelConfig {
            seed: Some(0),
            ..Default::default()
        };

        assert_eq!(round_trip(&config).seed, None);
    }

    #[test]
    fn inexpressible_kwargs_come_back_unset() {
        let mut kwargs = BTreeMap::new();
        kwargs.insert(vec![1u8], "bytes as key");

        let config = ModelConfig::default().with_chat_template_kwargs(&kwargs);

        assert_eq!(pb::ModelConfig::from(&config).chat_template_kwargs, None);
        assert_eq!(round_trip(&config).chat_template_kwargs, None);
    }
}
