use super::{ComparisonOperator, Definition, RoutingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Routes generation to another [`Definition`] once the current field is generated.
///
/// The service evaluates the branches; the SDK only describes them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionPoint {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Guides the model scoring the current generation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub evaluation_prompt: String,
    pub branches: Vec<ConditionalBranch>,
    #[serde(skip_serializing_if = "RoutingStrategy::is_empty")]
    pub strategy: RoutingStrategy,
}

impl DecisionPoint {
    /// Branches in the order the service evaluates them: highest priority first,
    /// declaration order among equal priorities.
    pub fn branches_by_priority(&self) -> Vec<&ConditionalBranch> {
        let mut ordered: Vec<_> = self.branches.iter().collect();
        ordered.sort_by_key(|branch| Reverse(branch.priority));
        ordered
    }
}

/// An if/then rule. Every condition must hold for the branch to be taken.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionalBranch {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub conditions: Vec<Condition>,
    /// Instructions on how to evaluate the content generated so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<Box<Definition>>,
    /// Generated when all conditions match. May carry its own decision point.
    pub then: Box<Definition>,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: i32,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// A single comparison against a score or a previously generated field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Condition {
    /// Score dimension name, or the last segment of a selected field path.
    pub field: String,
    pub operator: ComparisonOperator,
    pub value: Option<ConditionValue>,
    /// Full dotted path for nested fields, e.g. `requirements.is_technical`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field_path: String,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Some(value.into()),
            field_path: String::new(),
        }
    }

    pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
        self.field_path = field_path.into();
        self
    }
}

/// Right-hand side of a [`Condition`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(f64),
    String(String),
    Bool(bool),
}

impl ConditionValue {
    /// Narrows an arbitrary JSON value.
    ///
    /// `null` yields no value. Arrays and objects have no dedicated variant and are
    /// carried as their JSON text.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Self::Bool(b)),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(number) => Some(Self::Number(number)),
                None => Some(Self::String(n.to_string())),
            },
            serde_json::Value::String(s) => Some(Self::String(s)),
            other => Some(Self::String(other.to_string())),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! number_into_condition_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ConditionValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

number_into_condition_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn branch(name: &str, priority: i32) -> ConditionalBranch {
        ConditionalBranch {
            name: name.to_string(),
            priority,
            ..Default::default()
        }
    }

    #[test]
    fn branches_are_ordered_by_descending_priority_with_stable_ties() {
        let point = DecisionPoint {
            branches: vec![
                branch("a", 0),
                branch("b", 5),
                branch("c", 0),
                branch("d", 5),
                branch("e", -1),
            ],
            ..Default::default()
        };

        let names: Vec<_> = point
            .branches_by_priority()
            .into_iter()
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(names, ["b", "d", "a", "c", "e"]);
        // The stored order is untouched.
        assert_eq!(point.branches[0].name, "a");
    }

    #[test]
    fn integers_widen_to_numbers() {
        assert_eq!(ConditionValue::from(80), ConditionValue::Number(80.0));
        assert_eq!(ConditionValue::from(7u64), ConditionValue::Number(7.0));
        assert_eq!(ConditionValue::from(0.5f32), ConditionValue::Number(0.5));
    }

    #[test]
    fn json_values_outside_the_three_variants_become_text() {
        assert_eq!(ConditionValue::from_json(json!(null)), None);
        assert_eq!(
            ConditionValue::from_json(json!(true)),
            Some(ConditionValue::Bool(true))
        );
        assert_eq!(
            ConditionValue::from_json(json!(12)),
            Some(ConditionValue::Number(12.0))
        );
        assert_eq!(
            ConditionValue::from_json(json!(["a", "b"])),
            Some(ConditionValue::String("[\"a\",\"b\"]".to_string()))
        );
    }

    #[test]
    fn condition_value_deserializes_untagged() {
        let condition: Condition = serde_json::from_value(json!({
            "field": "is_technical",
            "operator": "eq",
            "value": true,
            "fieldPath": "requirements.is_technical"
        }))
        .unwrap();

        assert_eq!(condition.operator, ComparisonOperator::EQUAL);
        assert_eq!(condition.value, Some(ConditionValue::Bool(true)));
        assert_eq!(condition.field_path, "requirements.is_technical");
    }
}
