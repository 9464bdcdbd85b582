//! Validates a risk-factor record, scores it and classifies the percentage against configurable thresholds.

use super::scorer::{score, RiskPercent};
use crate::config::RiskConfig;
use crate::factors::{FactorError, RiskFactors, Sex};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_percent(percent: RiskPercent, config: &RiskConfig) -> Self {
        if percent.value() >= config.high_threshold {
            RiskLevel::High
        } else if percent.value() >= config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// One scored questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub sex: Sex,
    pub percent: RiskPercent,
    pub level: RiskLevel,
    /// Epoch milliseconds
    pub ts: i64,
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Validate at the boundary, then score. Out-of-range records are
    /// rejected instead of being bucketed.
    pub fn assess(&self, factors: &RiskFactors) -> Result<Assessment, FactorError> {
        factors.validate()?;
        let percent = score(factors);
        let level = RiskLevel::from_percent(percent, &self.config);
        let assessment = Assessment {
            id: Uuid::new_v4().to_string(),
            sex: factors.sex,
            percent,
            level,
            ts: Utc::now().timestamp_millis(),
        };
        info!(
            assessment_id = %assessment.id,
            percent = percent.value(),
            level = level.as_str(),
            "risk assessed"
        );
        Ok(assessment)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
