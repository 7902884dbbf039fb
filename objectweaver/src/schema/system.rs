//! Hierarchical supervision of a generation run.
//!
//! A [`ComplexSystem`] wraps a root [`Definition`] with a supervising "main thread",
//! memory retrieval and self-configuration policies. The service interprets all of
//! it; these types only describe it.
use super::{
    ActionType, Condition, Definition, DeploymentMode, MonitoringStrategy, RefinementStrategy,
    SearchStrategy, TriggerType,
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplexSystem {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Inherited by every model call in the tree unless a node sets its own system prompt.
    pub primary_system_prompt: String,
    pub root_schema: Definition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_thread: Option<MainThreadConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy_config: Option<LazyConfigMode>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// Supervisor watching decision points and scores, able to intervene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainThreadConfig {
    pub monitoring_strategy: MonitoringStrategy,
    pub intervention_rules: Vec<InterventionRule>,
    /// Levels of nested decision trees to supervise: 0 none, 1 direct children, -1 all.
    #[serde(skip_serializing_if = "is_zero")]
    pub hierarchical_depth: i32,
    /// A supervisor of this supervisor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_thread: Option<Box<MainThreadConfig>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub aggregation_prompt: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,
}

impl MainThreadConfig {
    /// Rules in evaluation order: highest priority first, declaration order among ties.
    pub fn rules_by_priority(&self) -> Vec<&InterventionRule> {
        let mut ordered: Vec<_> = self.intervention_rules.iter().collect();
        ordered.sort_by_key(|rule| Reverse(rule.priority));
        ordered
    }

    /// Number of supervisors in the chain, this one included.
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |thread| thread.parent_thread.as_deref()).count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterventionRule {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub trigger: InterventionTrigger,
    pub action: InterventionAction,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterventionTrigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    /// Score name to threshold, e.g. `quality: 50.0` fires below 50 for `low_score`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub score_thresholds: HashMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_depth: Option<i32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_condition: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterventionAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_prompt: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub fetch_memory: bool,
    /// Name of a previously saved checkpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_to_checkpoint: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_handler: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_definition: Option<Box<Definition>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryConfig {
    pub enabled: bool,
    pub search_strategy: SearchStrategy,
    /// Upper bound on retrieved context, in tokens or characters.
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub max_context_size: u32,
    pub retrieval_triggers: Vec<MemoryTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<KnowledgeGraphConfig>,
    /// e.g. `vector_db`, `sql`, `file`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_backend: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryTrigger {
    /// Decision point name; empty applies to all of them.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub decision_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<Condition>,
    #[serde(skip_serializing_if = "is_false")]
    pub always_fetch: bool,
    /// May reference generated values as `{field_name}`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query_template: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KnowledgeGraphConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub node_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relationship_types: Vec<String>,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub traversal_depth: u32,
}

/// Lets the service pick or build decision structures by itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LazyConfigMode {
    pub enabled: bool,
    pub pattern_library: Option<PatternLibraryConfig>,
    pub creation_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_improvement: Option<SelfImprovementConfig>,
    #[serde(skip_serializing_if = "DeploymentMode::is_empty")]
    pub deployment_mode: DeploymentMode,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub max_complexity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternLibraryConfig {
    #[serde(rename = "sourceUrl")]
    pub source_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub selection_model: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_patterns: Vec<DecisionPattern>,
}

/// Reusable decision tree template.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// A `ComplexSystem` or a `Definition`, kept as raw JSON.
    pub schema: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub performance_metrics: HashMap<String, f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfImprovementConfig {
    pub enabled: bool,
    pub save_successful_patterns: bool,
    /// Minimum aggregate score for a pattern to be saved.
    pub success_threshold: f64,
    #[serde(skip_serializing_if = "RefinementStrategy::is_empty")]
    pub refinement_strategy: RefinementStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_mechanisms: Option<SafetyConfig>,
    /// Within `[0, 1]`.
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub learning_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetyConfig {
    pub require_approval: bool,
    pub rollback_on_failure: bool,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub performance_baseline: HashMap<String, f64>,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub max_complexity: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation_set: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}
