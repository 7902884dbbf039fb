//! `Condition.value` on the wire: a oneof of double, string and bool.
use crate::pb::condition::Value as WireValue;
use crate::schema::ConditionValue;

impl From<&ConditionValue> for WireValue {
    fn from(value: &ConditionValue) -> Self {
        match value {
            ConditionValue::Number(n) => Self::NumberValue(*n),
            ConditionValue::String(s) => Self::StringValue(s.clone()),
            ConditionValue::Bool(b) => Self::BoolValue(*b),
        }
    }
}

impl From<ConditionValue> for WireValue {
    fn from(value: ConditionValue) -> Self {
        match value {
            ConditionValue::Number(n) => Self::NumberValue(n),
            ConditionValue::String(s) => Self::StringValue(s),
            ConditionValue::Bool(b) => Self::BoolValue(b),
        }
    }
}

impl From<WireValue> for ConditionValue {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::NumberValue(n) => Self::Number(n),
            WireValue::StringValue(s) => Self::String(s),
            WireValue::BoolValue(b) => Self::Bool(b),
        }
    }
}

/// Encodes an arbitrary JSON value.
///
/// `null` leaves the oneof unset; arrays and objects are sent as their JSON text.
pub fn json_to_wire(value: serde_json::Value) -> Option<WireValue> {
    ConditionValue::from_json(value).map(WireValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_variant_maps_to_its_arm() {
        assert_eq!(
            WireValue::from(ConditionValue::from(80)),
            WireValue::NumberValue(80.0)
        );
        assert_eq!(
            WireValue::from(&ConditionValue::from("tech")),
            WireValue::StringValue("tech".to_string())
        );
        assert_eq!(
            ConditionValue::from(WireValue::BoolValue(true)),
            ConditionValue::Bool(true)
        );
    }

    #[test]
    fn json_fallbacks() {
        assert_eq!(json_to_wire(json!(null)), None);
        assert_eq!(json_to_wire(json!(3u8)), Some(WireValue::NumberValue(3.0)));
        assert_eq!(
            json_to_wire(json!({ "a": 1 })),
            Some(WireValue::StringValue("{\"a\":1}".to_string()))
        );
    }
}
