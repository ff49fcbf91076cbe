use std::collections::HashSet;

use jobrisk_test::dataset::{SAMPLE_CSV, SAMPLE_ROWS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    DashboardState, Dataset, DatasetError, EducationRiskChart, ExposureScatterChart,
    HistoricalRecord, ScatterSampler,
};

fn sample() -> Dataset {
    Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}

fn record(level: &str, probability: f64) -> HistoricalRecord {
    HistoricalRecord {
        job_title: "Nurse".to_string(),
        education_level: level.to_string(),
        ai_exposure: 0.5,
        automation_probability: probability,
        risk_category: "Low".to_string(),
        average_salary: 50_000.0,
    }
}

#[test]
fn test_parses_and_ignores_extra_columns() {
    let dataset = sample();
    assert_eq!(dataset.len(), SAMPLE_ROWS);

    let first = &dataset.records()[0];
    assert_eq!(first.job_title, "Data Scientist");
    assert_eq!(first.education_level, "Master's");
    assert_eq!(first.ai_exposure, 0.81);
    assert_eq!(first.average_salary, 120_000.0);
}

#[test]
fn test_education_risk_groups_sorted() {
    let bars = sample().education_risk();
    let levels: Vec<&str> = bars.iter().map(|b| b.education_level.as_str()).collect();
    assert_eq!(levels, ["Bachelor's", "High School", "Master's", "PhD"]);

    let high_school = &bars[1];
    assert_eq!(high_school.count, 2);
    assert!((high_school.mean_automation - 0.88).abs() < 1e-12);

    let bachelors = &bars[0];
    assert_eq!(bachelors.count, 3);
    assert!((bachelors.mean_automation - (0.18 + 0.64 + 0.52) / 3.0).abs() < 1e-12);
}

#[test]
fn test_education_risk_skips_non_finite() {
    let dataset = Dataset::from_records(vec![record("PhD", 0.2), record("PhD", f64::NAN)]);
    let bars = dataset.education_risk();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].count, 1);
    assert_eq!(bars[0].mean_automation, 0.2);
}

#[test]
fn test_sample_is_bounded_and_distinct() {
    let dataset = Dataset::from_records((0..1200).map(|i| record("PhD", i as f64)).collect());
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let points = dataset.exposure_sample(500, &mut rng);
    assert_eq!(points.len(), 500);

    let distinct: HashSet<u64> = points
        .iter()
        .map(|p| p.automation_probability as u64)
        .collect();
    assert_eq!(distinct.len(), 500);
}

#[test]
fn test_sample_smaller_dataset_returns_all() {
    let dataset = sample();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(dataset.exposure_sample(500, &mut rng).len(), SAMPLE_ROWS);
}

#[test]
fn test_seeded_scatter_is_reproducible() {
    let dataset = Dataset::from_records((0..50).map(|i| record("PhD", i as f64)).collect());
    let sampler = ScatterSampler::new(10, Some(42));

    let a = ExposureScatterChart::build(&dataset, &sampler);
    let b = ExposureScatterChart::build(&dataset, &sampler);
    assert_eq!(a.points, b.points);
    assert_eq!(a.points.len(), 10);
    assert_eq!(a.total, 50);
}

#[test]
fn test_chart_metadata() {
    let dataset = sample();
    let bar = EducationRiskChart::build(&dataset);
    assert_eq!(bar.title, "Average Automation Risk by Education Level");
    assert_eq!(bar.bars.len(), 4);

    let scatter = ExposureScatterChart::build(&dataset, &ScatterSampler::default());
    assert_eq!(scatter.categories, ["High", "Low", "Medium"]);
}

#[test]
fn test_header_only_is_empty() {
    let header = SAMPLE_CSV.lines().next().unwrap();
    let err = Dataset::from_reader(header.as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::Empty));
}

#[test]
fn test_missing_column_is_csv_error() {
    let csv = "Job_Title,Education_Level\nNurse,PhD\n";
    assert!(matches!(
        Dataset::from_reader(csv.as_bytes()),
        Err(DatasetError::Csv(_))
    ));
}

#[test]
fn test_state_degrades_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let state = DashboardState::load(dir.path().join("AI_Impact_on_Jobs_2030.csv"));
    assert!(!state.is_available());
    match state {
        DashboardState::Unavailable { reason } => assert!(reason.contains("IO error")),
        DashboardState::Available(_) => panic!("dataset should be unavailable"),
    }
}

#[test]
fn test_state_loads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs.csv");
    std::fs::write(&path, SAMPLE_CSV).unwrap();

    let state = DashboardState::load(&path);
    assert_eq!(state.dataset().map(|d| d.len()), Some(SAMPLE_ROWS));
}
