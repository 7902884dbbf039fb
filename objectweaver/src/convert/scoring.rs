use super::structured::StructuredValueError;
use crate::pb;
use crate::schema::{
    DecisionPoint, EpistemicValidation, RecursiveLoop, ScoreScale, ScoringCriteria,
    ScoringDimension,
};

impl From<&ScoringCriteria> for pb::ScoringCriteria {
    fn from(criteria: &ScoringCriteria) -> Self {
        Self {
            dimensions: criteria
                .dimensions
                .iter()
                .map(|(name, dimension)| (name.clone(), dimension.into()))
                .collect(),
            evaluation_model: criteria.evaluation_model.clone(),
            aggregation_method: criteria.aggregation_method.to_string(),
        }
    }
}

impl From<pb::ScoringCriteria> for ScoringCriteria {
    fn from(criteria: pb::ScoringCriteria) -> Self {
        Self {
            dimensions: criteria
                .dimensions
                .into_iter()
                .map(|(name, dimension)| (name, dimension.into()))
                .collect(),
            evaluation_model: criteria.evaluation_model,
            aggregation_method: criteria.aggregation_method.into(),
        }
    }
}

impl From<&ScoringDimension> for pb::ScoringDimension {
    fn from(dimension: &ScoringDimension) -> Self {
        Self {
            description: dimension.description.clone(),
            scale: dimension.scale.map(Into::into),
            r#type: dimension.score_type.to_string(),
            weight: dimension.weight,
        }
    }
}

impl From<pb::ScoringDimension> for ScoringDimension {
    fn from(dimension: pb::ScoringDimension) -> Self {
        Self {
            description: dimension.description,
            scale: dimension.scale.map(Into::into),
            score_type: dimension.r#type.into(),
            weight: dimension.weight,
        }
    }
}

impl From<ScoreScale> for pb::ScoreScale {
    fn from(scale: ScoreScale) -> Self {
        Self {
            min: scale.min,
            max: scale.max,
        }
    }
}

impl From<pb::ScoreScale> for ScoreScale {
    fn from(scale: pb::ScoreScale) -> Self {
        Self::new(scale.min, scale.max)
    }
}

impl From<&RecursiveLoop> for pb::RecursiveLoop {
    fn from(recursive: &RecursiveLoop) -> Self {
        Self {
            max_iterations: recursive.max_iterations as i32,
            selection: recursive.selection.to_string(),
            termination_point: recursive.termination_point.as_ref().map(Into::into),
            feedback_prompt: recursive.feedback_prompt.clone(),
            include_previous_attempts: recursive.include_previous_attempts,
        }
    }
}

impl TryFrom<pb::RecursiveLoop> for RecursiveLoop {
    type Error = StructuredValueError;

    fn try_from(recursive: pb::RecursiveLoop) -> Result<Self, Self::Error> {
        Ok(Self {
            max_iterations: recursive.max_iterations as u32,
            selection: recursive.selection.into(),
            termination_point: recursive
                .termination_point
                .map(DecisionPoint::try_from)
                .transpose()?,
            feedback_prompt: recursive.feedback_prompt,
            include_previous_attempts: recursive.include_previous_attempts,
        })
    }
}

impl From<&EpistemicValidation> for pb::EpistemicValidation {
    fn from(epistemic: &EpistemicValidation) -> Self {
        Self {
            active: epistemic.active,
            judges: epistemic.judges as i32,
        }
    }
}

impl From<pb::EpistemicValidation> for EpistemicValidation {
    fn from(epistemic: pb::EpistemicValidation) -> Self {
        Self {
            active: epistemic.active,
            judges: epistemic.judges as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AggregationMethod, ScoreType, SelectionStrategy};
    use std::collections::HashMap;

    #[test]
    fn weights_are_sent_as_given() {
        let criteria = ScoringCriteria {
            dimensions: HashMap::from([
                (
                    "quality".to_string(),
                    ScoringDimension {
                        description: "Overall quality".to_string(),
                        scale: Some(ScoreScale::new(0, 100)),
                        score_type: ScoreType::NUMERIC,
                        weight: 0.7,
                    },
                ),
                (
                    "tone".to_string(),
                    ScoringDimension {
                        score_type: ScoreType::CATEGORICAL,
                        weight: 0.9,
                        ..Default::default()
                    },
                ),
            ]),
            evaluation_model: "gpt-4o-mini".to_string(),
            aggregation_method: AggregationMethod::WEIGHTED_AVERAGE,
        };

        let wire = pb::ScoringCriteria::from(&criteria);
        assert_eq!(wire.dimensions["tone"].weight, 0.9);
        assert_eq!(wire.dimensions["quality"].r#type, "numeric");
        assert_eq!(wire.aggregation_method, "weighted_average");

        assert_eq!(ScoringCriteria::from(wire), criteria);
    }

    #[test]
    fn unset_scale_stays_unset() {
        let wire = pb::ScoringDimension::from(&ScoringDimension::default());
        assert_eq!(wire.scale, None);
    }

    #[test]
    fn recursive_loop_round_trips() {
        let recursive = RecursiveLoop {
            max_iterations: 3,
            selection: SelectionStrategy::HIGHEST,
            feedback_prompt: "Improve clarity".to_string(),
            include_previous_attempts: true,
            termination_point: Some(DecisionPoint {
                name: "GoodEnough".to_string(),
                ..Default::default()
            }),
        };

        let wire = pb::RecursiveLoop::from(&recursive);
        assert_eq!(wire.max_iterations, 3);

        assert_eq!(RecursiveLoop::try_from(wire).unwrap(), recursive);
    }
}
