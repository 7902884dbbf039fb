//! Host-side description of an object to generate.
//!
//! A [`Definition`] is a tree: object nodes hold `properties`, array nodes hold
//! `items`, and decision points, loops and map definitions nest further definitions.
//! Every type here serializes to the camelCase JSON documented by the service, so a
//! definition can be loaded from a file with `serde_json` as well as built in code.
//!
//! Enumerated fields use open string types (see [`DataType`]) rather than Rust enums:
//! the service adds values over time and unknown ones must pass through untouched.

mod decision;
mod definition;
mod enums;
mod media;
mod model_config;
mod scoring;
mod system;
mod utility;

pub use decision::{Condition, ConditionValue, ConditionalBranch, DecisionPoint};
pub use definition::{Definition, priority};
pub use enums::{
    ActionType, AggregationMethod, ComparisonOperator, DataType, DeploymentMode, HttpMethod,
    MonitoringStrategy, RefinementStrategy, RoutingStrategy, ScoreType, SearchStrategy,
    SelectionStrategy, TriggerType,
};
pub use media::{Image, SendImage, SpeechToText, TextToSpeech, caption_format, image_size};
pub use model_config::ModelConfig;
pub use scoring::{EpistemicValidation, RecursiveLoop, ScoreScale, ScoringCriteria, ScoringDimension};
pub use system::{
    ComplexSystem, DecisionPattern, InterventionAction, InterventionRule, InterventionTrigger,
    KnowledgeGraphConfig, LazyConfigMode, MainThreadConfig, MemoryConfig, MemoryTrigger,
    PatternLibraryConfig, SafetyConfig, SelfImprovementConfig,
};
pub use utility::{Choices, Focus, HashMapDefinition, RequestFormat};
