//! Presentation view of an assessment: display label and pie-chart share.

use crate::risk::{Assessment, RiskLevel, RiskPercent};
use serde::Serialize;

/// Share drawn for a "<1%" result so the slice stays visible.
pub const MIN_CHART_SHARE: f64 = 0.005;

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub id: String,
    pub percent: RiskPercent,
    pub level: RiskLevel,
    pub label: String,
    /// Fraction of the full circle for the risk slice
    pub chart_share: f64,
    pub ts: i64,
}

impl RiskReport {
    pub fn new(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id.clone(),
            percent: assessment.percent,
            level: assessment.level,
            label: label(assessment.percent),
            chart_share: chart_share(assessment.percent),
            ts: assessment.ts,
        }
    }

    /// One-line text form for terminals.
    pub fn summary(&self) -> String {
        format!("{} ({} risk level)", self.label, self.level.as_str())
    }
}

pub fn label(percent: RiskPercent) -> String {
    if percent == RiskPercent::FLOOR {
        "Less than 1% risk".to_string()
    } else if percent >= RiskPercent::CEILING {
        "Greater than 30% risk".to_string()
    } else {
        format!("{} risk", percent)
    }
}

pub fn chart_share(percent: RiskPercent) -> f64 {
    if percent == RiskPercent::FLOOR {
        MIN_CHART_SHARE
    } else {
        f64::from(percent.value()) / 100.0
    }
}
