use super::{AggregationMethod, DecisionPoint, ScoreType, SelectionStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the service judges a generated field, one score per dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringCriteria {
    pub dimensions: HashMap<String, ScoringDimension>,
    /// Model used for scoring. Empty means the service default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub evaluation_model: String,
    #[serde(skip_serializing_if = "AggregationMethod::is_empty")]
    pub aggregation_method: AggregationMethod,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringDimension {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScoreScale>,
    #[serde(rename = "type", skip_serializing_if = "ScoreType::is_empty")]
    pub score_type: ScoreType,
    /// Influence on the aggregate score, within `[0, 1]`. Sent as given.
    #[serde(skip_serializing_if = "is_zero")]
    pub weight: f64,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreScale {
    pub min: i32,
    pub max: i32,
}

impl ScoreScale {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Regenerates a field several times and keeps one result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecursiveLoop {
    pub max_iterations: u32,
    pub selection: SelectionStrategy,
    /// Stops iterating as soon as any branch matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_point: Option<DecisionPoint>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub feedback_prompt: String,
    pub include_previous_attempts: bool,
}

/// Asks several judges to validate what was generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EpistemicValidation {
    pub active: bool,
    pub judges: u32,
}
