//! cvrisk entrypoint: reads questionnaire answers (JSON file or stdin), scores them,
//! and prints the report on stdout.

use cvrisk::{
    config::AppConfig,
    intake::Questionnaire,
    logging::StructuredLogger,
    report::RiskReport,
    risk::RiskEngine,
};
use std::io::Read;
use tracing::{info, warn};

fn read_answers(path: Option<&str>) -> Result<String, std::io::Error> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(config: &AppConfig, input: Option<&str>) -> Result<RiskReport, Box<dyn std::error::Error + Send + Sync>> {
    let raw = read_answers(input)?;
    let answers: Questionnaire = serde_json::from_str(&raw)?;
    let factors = answers.into_factors()?;
    let engine = RiskEngine::new(config.risk.clone());
    let assessment = engine.assess(&factors)?;
    Ok(RiskReport::new(&assessment))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("CVRISK_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("cvrisk.json"));
    let config = AppConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let input = std::env::args().nth(1);
    info!(config = ?config_path, input = input.as_deref().unwrap_or("-"), "cvrisk starting");

    let report = match run(&config, input.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "answers rejected");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut out = std::io::stdout().lock();
    if config.report.json {
        StructuredLogger::emit_json(&report, &mut out)?;
    } else {
        use std::io::Write;
        writeln!(out, "{}", report.summary())?;
    }

    Ok(())
}
