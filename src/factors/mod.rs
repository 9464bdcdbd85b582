//! Risk-factor record consumed by the scorer, plus boundary validation.

use serde::{Deserialize, Serialize};

/// Oldest age accepted at the scoring boundary.
pub const MAX_AGE: u32 = 120;
/// Highest cholesterol reading (mg/dL) accepted at the scoring boundary.
pub const MAX_CHOLESTEROL: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Systolic blood pressure category (mmHg), in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodPressureCategory {
    #[serde(rename = "under120")]
    Under120,
    #[serde(rename = "between120to129")]
    Between120To129,
    #[serde(rename = "between130to139")]
    Between130To139,
    #[serde(rename = "between140to159")]
    Between140To159,
    #[serde(rename = "atLeast160")]
    AtLeast160,
}

impl BloodPressureCategory {
    pub const ALL: [BloodPressureCategory; 5] = [
        BloodPressureCategory::Under120,
        BloodPressureCategory::Between120To129,
        BloodPressureCategory::Between130To139,
        BloodPressureCategory::Between140To159,
        BloodPressureCategory::AtLeast160,
    ];

    /// Position in `ALL`; used as the column index into blood pressure tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskFactors {
    pub sex: Sex,
    /// Age in whole years
    pub age: u32,
    /// Total cholesterol, mg/dL
    pub total_cholesterol: u32,
    /// HDL cholesterol, mg/dL
    pub hdl_cholesterol: u32,
    pub is_smoker: bool,
    pub blood_pressure: BloodPressureCategory,
    pub is_treated_for_blood_pressure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorError {
    #[error("age {0} is outside the supported range [0, 120]")]
    AgeOutOfRange(u32),

    #[error("total cholesterol {0} mg/dL exceeds 1000")]
    TotalCholesterolOutOfRange(u32),

    #[error("HDL cholesterol {0} mg/dL exceeds 1000")]
    HdlCholesterolOutOfRange(u32),
}

impl RiskFactors {
    /// Reject readings no questionnaire should produce. The scorer itself
    /// is total and never calls this.
    pub fn validate(&self) -> Result<(), FactorError> {
        if self.age > MAX_AGE {
            return Err(FactorError::AgeOutOfRange(self.age));
        }
        if self.total_cholesterol > MAX_CHOLESTEROL {
            return Err(FactorError::TotalCholesterolOutOfRange(self.total_cholesterol));
        }
        if self.hdl_cholesterol > MAX_CHOLESTEROL {
            return Err(FactorError::HdlCholesterolOutOfRange(self.hdl_cholesterol));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RiskFactors {
        RiskFactors {
            sex: Sex::Female,
            age: 52,
            total_cholesterol: 210,
            hdl_cholesterol: 48,
            is_smoker: false,
            blood_pressure: BloodPressureCategory::Between130To139,
            is_treated_for_blood_pressure: true,
        }
    }

    #[test]
    fn serde_uses_questionnaire_values() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["sex"], "female");
        assert_eq!(json["blood_pressure"], "between130to139");

        let at_least: BloodPressureCategory = serde_json::from_str("\"atLeast160\"").unwrap();
        assert_eq!(at_least, BloodPressureCategory::AtLeast160);
        let under: BloodPressureCategory = serde_json::from_str("\"under120\"").unwrap();
        assert_eq!(under, BloodPressureCategory::Under120);
    }

    #[test]
    fn categories_are_ordered() {
        for pair in BloodPressureCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].index() + 1, pair[1].index());
        }
    }

    #[test]
    fn validate_bounds() {
        assert!(sample().validate().is_ok());

        let old = RiskFactors { age: MAX_AGE + 1, ..sample() };
        assert_eq!(old.validate(), Err(FactorError::AgeOutOfRange(MAX_AGE + 1)));

        let tc = RiskFactors { total_cholesterol: 5000, ..sample() };
        assert_eq!(tc.validate(), Err(FactorError::TotalCholesterolOutOfRange(5000)));

        let hdl = RiskFactors { hdl_cholesterol: 1001, ..sample() };
        assert_eq!(hdl.validate(), Err(FactorError::HdlCholesterolOutOfRange(1001)));

        let edge = RiskFactors { age: MAX_AGE, total_cholesterol: MAX_CHOLESTEROL, ..sample() };
        assert!(edge.validate().is_ok());
    }
}
