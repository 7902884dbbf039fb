//! Open string enumerations.
//!
//! Each type wraps a string so values the SDK does not know about yet travel to the
//! service and back unchanged. The associated constants are the values the service
//! documents today.
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self(Cow::Borrowed($value));
            )+

            /// Every value documented by the service, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($value),+];

            /// Wraps an arbitrary value, known or not.
            pub fn new(value: impl Into<String>) -> Self {
                Self(Cow::Owned(value.into()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Whether the value is one of the documented constants.
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(&self.as_str())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Cow::Borrowed(""))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(Cow::Owned(value.to_owned()))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.into_owned()
            }
        }

        impl From<&$name> for String {
            fn from(value: &$name) -> Self {
                value.0.to_string()
            }
        }
    };
}

open_enum! {
    /// Output type of a [`super::Definition`] node.
    DataType {
        OBJECT = "object",
        NUMBER = "number",
        INTEGER = "integer",
        STRING = "string",
        ARRAY = "array",
        NULL = "null",
        BOOLEAN = "boolean",
        /// Dynamic-keyed properties, see [`super::HashMapDefinition`].
        MAP = "map",
        /// Media output. Pair it with either an image or a text-to-speech request.
        BYTE = "byte",
        /// Embedding output.
        VECTOR = "vector",
    }
}

open_enum! {
    HttpMethod {
        GET = "GET",
        POST = "POST",
        PUT = "PUT",
        DELETE = "DELETE",
        PATCH = "PATCH",
    }
}

open_enum! {
    /// Comparison applied by a [`super::Condition`].
    ComparisonOperator {
        EQUAL = "eq",
        NOT_EQUAL = "neq",
        GREATER_THAN = "gt",
        LESS_THAN = "lt",
        GREATER_THAN_OR_EQUAL = "gte",
        LESS_THAN_OR_EQUAL = "lte",
        /// Value is in a list.
        IN = "in",
        /// Value is not in a list.
        NOT_IN = "nin",
        /// String contains substring.
        CONTAINS = "contains",
    }
}

open_enum! {
    /// How a [`super::DecisionPoint`] evaluates its conditions.
    RoutingStrategy {
        /// Scores produced by the node's scoring criteria.
        SCORE = "score",
        /// Values of previously generated fields.
        FIELD = "field",
        /// Both scores and field values.
        HYBRID = "hybrid",
    }
}

open_enum! {
    ScoreType {
        NUMERIC = "numeric",
        BOOLEAN = "boolean",
        CATEGORICAL = "categorical",
    }
}

open_enum! {
    /// How dimension scores are folded into one aggregate score.
    AggregationMethod {
        WEIGHTED_AVERAGE = "weighted_average",
        MINIMUM = "minimum",
        MAXIMUM = "maximum",
        CUSTOM = "custom",
    }
}

open_enum! {
    /// Which iteration of a [`super::RecursiveLoop`] is kept.
    SelectionStrategy {
        HIGHEST = "highest",
        LOWEST = "lowest",
        LATEST = "latest",
        FIRST = "first",
        /// Every iteration, returned as an array.
        ALL = "all",
    }
}

open_enum! {
    MonitoringStrategy {
        CONTINUOUS = "continuous",
        MILESTONE = "milestone",
        FINAL = "final",
    }
}

open_enum! {
    TriggerType {
        LOW_SCORE = "low_score",
        HIGH_SCORE = "high_score",
        STALLED = "stalled",
        DIVERGENCE = "divergence",
        DEPTH_EXCEEDED = "depth_exceeded",
        CUSTOM = "custom",
    }
}

open_enum! {
    ActionType {
        OVERRIDE = "override",
        AUGMENT = "augment",
        RESET = "reset",
        TERMINATE = "terminate",
        ESCALATE = "escalate",
        CUSTOM = "custom",
    }
}

open_enum! {
    SearchStrategy {
        SEMANTIC = "semantic",
        KEYWORD = "keyword",
        GRAPH = "graph",
        HYBRID = "hybrid",
    }
}

open_enum! {
    RefinementStrategy {
        ITERATIVE = "iterative",
        COMPARATIVE = "comparative",
        EVOLUTIONARY = "evolutionary",
    }
}

open_enum! {
    DeploymentMode {
        SINGLE_INSTANCE = "single_instance",
        DISTRIBUTED = "distributed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let op = ComparisonOperator::from("between");
        assert!(!op.is_known());
        assert_eq!(String::from(op), "between");
    }

    #[test]
    fn constants_compare_equal_to_owned_values() {
        assert_eq!(DataType::new("object"), DataType::OBJECT);
        assert!(DataType::OBJECT.is_known());
        assert!(DataType::default().is_empty());
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let json = serde_json::to_string(&SelectionStrategy::HIGHEST).unwrap();
        assert_eq!(json, "\"highest\"");

        let parsed: SelectionStrategy = serde_json::from_str("\"latest\"").unwrap();
        assert_eq!(parsed, SelectionStrategy::LATEST);
    }
}
