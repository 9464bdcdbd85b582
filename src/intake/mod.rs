//! Questionnaire answers: checked section by section, then turned into a `RiskFactors` record.

use crate::factors::{BloodPressureCategory, RiskFactors, Sex};
use serde::{Deserialize, Serialize};

/// Questionnaire sections, in the order they are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    AgeSex,
    Cholesterol,
    Smoker,
    BloodPressure,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::AgeSex,
        Section::Cholesterol,
        Section::Smoker,
        Section::BloodPressure,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please select a gender")]
    MissingSex,

    #[error("Please enter an answer for all fields.")]
    BlankField(Section),

    #[error("Please enter a non-negative cholesterol level")]
    NegativeCholesterol,
}

/// Raw answers. Cholesterol is signed so that a negative entry reaches the
/// check instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Questionnaire {
    pub sex: Option<Sex>,
    pub age: Option<u32>,
    pub total_cholesterol: Option<i64>,
    pub hdl_cholesterol: Option<i64>,
    pub is_smoker: bool,
    pub blood_pressure: Option<BloodPressureCategory>,
    pub is_treated_for_blood_pressure: bool,
}

impl Questionnaire {
    pub fn check_section(&self, section: Section) -> Result<(), IntakeError> {
        match section {
            Section::AgeSex => {
                if self.sex.is_none() {
                    return Err(IntakeError::MissingSex);
                }
                if self.age.is_none() {
                    return Err(IntakeError::BlankField(section));
                }
            }
            Section::Cholesterol => {
                let negative = |v: Option<i64>| v.is_some_and(|v| v < 0);
                if negative(self.total_cholesterol) || negative(self.hdl_cholesterol) {
                    return Err(IntakeError::NegativeCholesterol);
                }
                if self.total_cholesterol.is_none() || self.hdl_cholesterol.is_none() {
                    return Err(IntakeError::BlankField(section));
                }
            }
            Section::Smoker => {}
            Section::BloodPressure => {
                if self.blood_pressure.is_none() {
                    return Err(IntakeError::BlankField(section));
                }
            }
        }
        Ok(())
    }

    /// First failing section in questionnaire order.
    pub fn check_all(&self) -> Result<(), IntakeError> {
        Section::ALL.iter().try_for_each(|&s| self.check_section(s))
    }

    pub fn into_factors(self) -> Result<RiskFactors, IntakeError> {
        self.check_all()?;
        let (Some(sex), Some(age), Some(total), Some(hdl), Some(blood_pressure)) = (
            self.sex,
            self.age,
            self.total_cholesterol,
            self.hdl_cholesterol,
            self.blood_pressure,
        ) else {
            return Err(IntakeError::BlankField(Section::AgeSex));
        };
        Ok(RiskFactors {
            sex,
            age,
            total_cholesterol: to_mg_dl(total)?,
            hdl_cholesterol: to_mg_dl(hdl)?,
            is_smoker: self.is_smoker,
            blood_pressure,
            is_treated_for_blood_pressure: self.is_treated_for_blood_pressure,
        })
    }
}

// Values past u32::MAX saturate; RiskFactors::validate rejects them anyway.
fn to_mg_dl(v: i64) -> Result<u32, IntakeError> {
    if v < 0 {
        return Err(IntakeError::NegativeCholesterol);
    }
    Ok(u32::try_from(v).unwrap_or(u32::MAX))
}
