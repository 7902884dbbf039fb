use super::structured::StructuredValueError;
use crate::pb;
use crate::schema::{Condition, ConditionValue, ConditionalBranch, DecisionPoint, Definition};

impl From<&DecisionPoint> for pb::DecisionPoint {
    fn from(point: &DecisionPoint) -> Self {
        Self {
            name: point.name.clone(),
            evaluation_prompt: point.evaluation_prompt.clone(),
            branches: point.branches.iter().map(Into::into).collect(),
            strategy: point.strategy.to_string(),
        }
    }
}

impl TryFrom<pb::DecisionPoint> for DecisionPoint {
    type Error = StructuredValueError;

    fn try_from(point: pb::DecisionPoint) -> Result<Self, Self::Error> {
        Ok(Self {
            name: point.name,
            evaluation_prompt: point.evaluation_prompt,
            branches: point
                .branches
                .into_iter()
                .map(ConditionalBranch::try_from)
                .collect::<Result<_, _>>()?,
            strategy: point.strategy.into(),
        })
    }
}

impl From<&ConditionalBranch> for pb::ConditionalBranch {
    fn from(branch: &ConditionalBranch) -> Self {
        Self {
            name: branch.name.clone(),
            conditions: branch.conditions.iter().map(Into::into).collect(),
            logic: branch.logic.as_deref().map(Into::into),
            then: Some(pb::Definition::from(&*branch.then)),
            priority: branch.priority,
        }
    }
}

impl TryFrom<pb::ConditionalBranch> for ConditionalBranch {
    type Error = StructuredValueError;

    fn try_from(branch: pb::ConditionalBranch) -> Result<Self, Self::Error> {
        let logic = branch
            .logic
            .map(|logic| Definition::try_from(logic).map(Box::new))
            .transpose()?;
        let then = branch
            .then
            .map(Definition::try_from)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            name: branch.name,
            conditions: branch.conditions.into_iter().map(Into::into).collect(),
            logic,
            then: Box::new(then),
            priority: branch.priority,
        })
    }
}

impl From<&Condition> for pb::Condition {
    fn from(condition: &Condition) -> Self {
        Self {
            field: condition.field.clone(),
            operator: condition.operator.to_string(),
            field_path: condition.field_path.clone(),
            value: condition.value.as_ref().map(Into::into),
        }
    }
}

impl From<pb::Condition> for Condition {
    fn from(condition: pb::Condition) -> Self {
        Self {
            field: condition.field,
            operator: condition.operator.into(),
            value: condition.value.map(ConditionValue::from),
            field_path: condition.field_path,
        }
    }
}
