//! cvrisk - 10-year cardiovascular risk from questionnaire answers.
//!
//! Modular structure:
//! - [`factors`] - Risk-factor record and boundary validation
//! - [`intake`] - Questionnaire answers, checked section by section
//! - [`risk`] - Point tables, scorer, and risk engine
//! - [`report`] - Labels and chart share for display
//! - [`logging`] - Tracing setup and JSON line output

pub mod config;
pub mod factors;
pub mod intake;
pub mod risk;
pub mod report;
pub mod logging;

pub use config::AppConfig;
pub use factors::{BloodPressureCategory, FactorError, RiskFactors, Sex};
pub use intake::{IntakeError, Questionnaire, Section};
pub use risk::{score, Assessment, RiskEngine, RiskLevel, RiskPercent};
pub use report::RiskReport;
pub use logging::StructuredLogger;
