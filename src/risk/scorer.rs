//! Points-based 10-year cardiovascular risk: factors → points → percentage bucket.

use super::tables::{self, SexTable};
use crate::factors::{RiskFactors, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 10-year risk percentage. Always one of the published buckets: 0 stands for
/// "less than 1%" and 30 for "30% or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskPercent(u8);

impl RiskPercent {
    pub const FLOOR: RiskPercent = RiskPercent(0);
    pub const CEILING: RiskPercent = RiskPercent(30);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Buckets the lookup can produce for `sex`, ascending.
    pub fn buckets(sex: Sex) -> impl Iterator<Item = RiskPercent> {
        table_for(sex).percent.iter().map(|&(_, p)| RiskPercent(p))
    }
}

impl fmt::Display for RiskPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Value of the first bracket whose upper bound is >= `input`.
///
/// `brackets` must be non-empty and sorted by bound. Inputs above the last
/// bound take the last value, so the final entry acts as the open top bracket.
pub fn bracket<T: PartialOrd + Copy, V: Copy>(brackets: &[(T, V)], input: T) -> V {
    debug_assert!(!brackets.is_empty());
    match brackets.iter().find(|(bound, _)| input <= *bound) {
        Some(&(_, value)) => value,
        None => brackets[brackets.len() - 1].1,
    }
}

fn table_for(sex: Sex) -> &'static SexTable {
    match sex {
        Sex::Male => &tables::MALE,
        Sex::Female => &tables::FEMALE,
    }
}

/// Per-component points for one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Breakdown {
    pub age: i32,
    pub smoking: i32,
    pub total_cholesterol: i32,
    pub hdl: i32,
    pub blood_pressure: i32,
}

impl Breakdown {
    pub fn points(&self) -> i32 {
        self.age + self.smoking + self.total_cholesterol + self.hdl + self.blood_pressure
    }
}

pub(crate) fn breakdown(factors: &RiskFactors) -> Breakdown {
    let table = table_for(factors.sex);
    let decade = bracket(&tables::AGE_DECADE, factors.age);
    let column = bracket(&tables::TOTAL_CHOLESTEROL_COLUMN, factors.total_cholesterol);
    let bp = if factors.is_treated_for_blood_pressure {
        &table.bp_treated
    } else {
        &table.bp_untreated
    };

    Breakdown {
        age: bracket(&table.age, factors.age),
        smoking: if factors.is_smoker { table.smoker[decade] } else { 0 },
        total_cholesterol: table.total_cholesterol[decade][column],
        hdl: bracket(&tables::HDL_POINTS, factors.hdl_cholesterol),
        blood_pressure: bp[factors.blood_pressure.index()],
    }
}

/// Score a fully populated record. Total over the declared domain; range
/// checks belong to `RiskFactors::validate`.
pub fn score(factors: &RiskFactors) -> RiskPercent {
    let parts = breakdown(factors);
    let points = parts.points();
    let percent = RiskPercent(bracket(&table_for(factors.sex).percent, points));
    tracing::debug!(
        sex = factors.sex.as_str(),
        age = parts.age,
        smoking = parts.smoking,
        total_cholesterol = parts.total_cholesterol,
        hdl = parts.hdl,
        blood_pressure = parts.blood_pressure,
        points,
        percent = percent.value(),
        "scored risk factors"
    );
    percent
}
