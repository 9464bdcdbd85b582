//! Cardiovascular risk scoring: point tables, the scorer, and the engine that wraps it.

mod engine;
mod scorer;
pub mod tables;

pub use engine::{Assessment, RiskEngine, RiskLevel};
pub use scorer::{bracket, score, RiskPercent};
