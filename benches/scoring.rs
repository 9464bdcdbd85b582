//! Scoring benchmark: single record, and a grid of records across both table sets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cvrisk::config::RiskConfig;
use cvrisk::factors::{BloodPressureCategory, RiskFactors, Sex};
use cvrisk::intake::Questionnaire;
use cvrisk::risk::{score, RiskEngine};

fn sample(sex: Sex, age: u32) -> RiskFactors {
    RiskFactors {
        sex,
        age,
        total_cholesterol: 230,
        hdl_cholesterol: 44,
        is_smoker: true,
        blood_pressure: BloodPressureCategory::Between140To159,
        is_treated_for_blood_pressure: true,
    }
}

fn bench_score(c: &mut Criterion) {
    let f = sample(Sex::Male, 58);
    c.bench_function("score_single", |b| b.iter(|| score(black_box(&f))));
}

fn bench_score_grid(c: &mut Criterion) {
    let grid: Vec<RiskFactors> = [Sex::Male, Sex::Female]
        .into_iter()
        .flat_map(|sex| (20..80).map(move |age| sample(sex, age)))
        .collect();

    c.bench_function("score_grid_120", |b| {
        b.iter(|| grid.iter().map(|f| score(black_box(f)).value() as u32).sum::<u32>())
    });
}

fn bench_intake_and_assess(c: &mut Criterion) {
    let engine = RiskEngine::new(RiskConfig::default());
    let raw = r#"{"sex":"female","age":63,"total_cholesterol":245,"hdl_cholesterol":38,
                  "is_smoker":true,"blood_pressure":"between140to159","is_treated_for_blood_pressure":true}"#;

    c.bench_function("parse_intake_assess", |b| {
        b.iter(|| {
            let q: Questionnaire = serde_json::from_str(black_box(raw)).unwrap();
            engine.assess(&q.into_factors().unwrap()).unwrap()
        })
    });
}

criterion_group!(benches, bench_score, bench_score_grid, bench_intake_and_assess);
criterion_main!(benches);
