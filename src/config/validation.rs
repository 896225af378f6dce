//! Configuration validation.

use super::defaults::WEIGHT_SUM_TOLERANCE;
use super::types::ViabilityWeights;
use crate::model::Category;

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for ViabilityWeights {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for category in Category::ALL {
            let weight = self.for_category(category);
            if !weight.is_finite() {
                errors.push(ConfigError {
                    field: format!("weights.{category}"),
                    message: format!("must be a finite number, got {weight}"),
                });
            } else if !(0.0..=1.0).contains(&weight) {
                errors.push(ConfigError {
                    field: format!("weights.{category}"),
                    message: format!("must be between 0.0 and 1.0, got {weight}"),
                });
            }
        }

        // Only meaningful once every individual weight is sane
        if errors.is_empty() {
            let sum = self.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                errors.push(ConfigError {
                    field: "weights".to_string(),
                    message: format!("must sum to 1.0, got {sum}"),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert!(ViabilityWeights::default().is_valid());
    }

    #[test]
    fn sum_off_by_too_much_is_rejected() {
        let weights = ViabilityWeights {
            logistics: 0.5,
            ..ViabilityWeights::default()
        };
        let errors = weights.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "weights");
        assert!(errors[0].message.contains("sum"));
    }

    #[test]
    fn negative_weight_is_rejected_per_field() {
        let weights = ViabilityWeights {
            agronomy: -0.1,
            topography: 0.3,
            ..ViabilityWeights::default()
        };
        let errors = weights.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "weights.agronomy");
    }

    #[test]
    fn nan_weight_is_rejected_before_sum_check() {
        let weights = ViabilityWeights {
            water_resources: f64::NAN,
            ..ViabilityWeights::default()
        };
        let errors = weights.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("finite"));
    }

    #[test]
    fn rebalanced_table_is_accepted() {
        let weights = ViabilityWeights {
            logistics: 0.2,
            legal_environmental: 0.2,
            water_resources: 0.2,
            agronomy: 0.2,
            topography: 0.2,
        };
        assert!(weights.is_valid());
    }
}
