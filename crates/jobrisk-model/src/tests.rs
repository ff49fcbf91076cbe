//! Tests for artifact parsing, validation and prediction.

use std::fs;

use jobrisk_core::{EncoderDomain, FeatureVector, JobRiskError, RiskModel};

use crate::{
    Aggregation, ArtifactError, ArtifactPaths, EncoderArtifact, LoadedArtifacts, ModelArtifact,
    RegressionTree, TreeEnsemble, TreeNode,
};

const FOREST: &str = r#"{
    "kind": "tree_ensemble",
    "aggregation": "mean",
    "trees": [
        { "nodes": [
            { "feature": 4, "threshold": 0.5, "left": 1, "right": 2 },
            { "value": 60.0 },
            { "value": 20.0 }
        ] },
        { "nodes": [
            { "feature": 2, "threshold": 0.5, "left": 1, "right": 2 },
            { "value": 30.0 },
            { "value": 50.0 }
        ] }
    ]
}"#;

fn vector(exposure: f64, tech: bool) -> FeatureVector {
    FeatureVector::new(1, 0, exposure, 5, tech, false)
}

#[test]
fn test_forest_averages_trees() {
    let model = ModelArtifact::from_json_str(FOREST).unwrap();
    assert_eq!(model.kind(), "tree_ensemble");

    // no tech (60), exposure at threshold goes left (30)
    assert_eq!(model.predict(&vector(0.5, false)).unwrap(), 45.0);
    // tech (20), high exposure (50)
    assert_eq!(model.predict(&vector(0.9, true)).unwrap(), 35.0);
}

#[test]
fn test_boosted_sums_trees() {
    let model = ModelArtifact::TreeEnsemble(TreeEnsemble::new(
        Aggregation::Sum,
        10.0,
        vec![RegressionTree::leaf(5.0), RegressionTree::leaf(-2.5)],
    ));
    model.validate().unwrap();
    assert_eq!(model.predict(&vector(0.1, false)).unwrap(), 12.5);
}

#[test]
fn test_linear_model() {
    let model = ModelArtifact::from_json_str(
        r#"{ "kind": "linear", "intercept": 1.0, "coefficients": [1, 2, 10, 0.5, 3, 4] }"#,
    )
    .unwrap();
    let v = FeatureVector::new(2, 1, 0.5, 4, true, true);
    // 1 + 2 + 2 + 5 + 2 + 3 + 4
    assert_eq!(model.predict(&v).unwrap(), 19.0);
}

#[test]
fn test_linear_requires_six_coefficients() {
    let err = ModelArtifact::from_json_str(
        r#"{ "kind": "linear", "intercept": 1.0, "coefficients": [1, 2, 3] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ArtifactError::Json(_)));
}

#[test]
fn test_rejects_backward_child() {
    let model = ModelArtifact::TreeEnsemble(TreeEnsemble::new(
        Aggregation::Mean,
        0.0,
        vec![RegressionTree::new(vec![
            TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 1,
            },
            TreeNode::Leaf { value: 1.0 },
        ])],
    ));
    assert!(matches!(model.validate(), Err(ArtifactError::Invalid(_))));
}

#[test]
fn test_rejects_unknown_feature() {
    let model = ModelArtifact::TreeEnsemble(TreeEnsemble::new(
        Aggregation::Mean,
        0.0,
        vec![RegressionTree::new(vec![
            TreeNode::Split {
                feature: 6,
                threshold: 1.0,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { value: 1.0 },
            TreeNode::Leaf { value: 2.0 },
        ])],
    ));
    assert!(model.validate().is_err());
}

#[test]
fn test_rejects_empty_ensemble() {
    let err = ModelArtifact::from_json_str(r#"{ "kind": "tree_ensemble", "trees": [] }"#)
        .unwrap_err();
    assert!(err.to_string().contains("no trees"));
}

#[test]
fn test_non_finite_prediction_is_model_failure() {
    let model = ModelArtifact::TreeEnsemble(TreeEnsemble::new(
        Aggregation::Sum,
        0.0,
        vec![RegressionTree::leaf(f64::MAX), RegressionTree::leaf(f64::MAX)],
    ));
    let err = model.predict(&vector(0.5, false)).unwrap_err();
    assert!(matches!(err, JobRiskError::ModelFailure(_)));
}

#[test]
fn test_encoder_artifact() {
    let artifact: EncoderArtifact =
        serde_json::from_str(r#"{ "classes": ["Bachelor's", "High School", "Master's"] }"#)
            .unwrap();
    let encoder = artifact.into_encoder(EncoderDomain::EducationLevel).unwrap();
    assert_eq!(encoder.encode("Master's").unwrap(), 2);
}

fn paths_in(dir: &std::path::Path) -> ArtifactPaths {
    ArtifactPaths::new(
        dir.join("real_ai_model_lvl2.json"),
        dir.join("le_job.json"),
        dir.join("le_edu.json"),
    )
}

#[test]
fn test_load_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.model, FOREST).unwrap();
    fs::write(&paths.job_encoder, r#"{ "classes": ["Data Scientist", "Nurse"] }"#).unwrap();
    fs::write(&paths.education_encoder, r#"{ "classes": ["Bachelor's", "PhD"] }"#).unwrap();

    let loaded = LoadedArtifacts::load(&paths).unwrap();
    assert_eq!(loaded.encoders.job.len(), 2);
    assert_eq!(loaded.encoders.education.encode("PhD").unwrap(), 1);
}

#[test]
fn test_missing_artifact_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.model, FOREST).unwrap();

    let err = LoadedArtifacts::load(&paths).unwrap_err();
    assert!(err.is_missing());
    assert!(err.to_string().contains("le_job.json"));
}

#[test]
fn test_duplicate_encoder_classes_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.model, FOREST).unwrap();
    fs::write(&paths.job_encoder, r#"{ "classes": ["Nurse", "Nurse"] }"#).unwrap();
    fs::write(&paths.education_encoder, r#"{ "classes": ["PhD"] }"#).unwrap();

    assert!(matches!(
        LoadedArtifacts::load(&paths),
        Err(ArtifactError::Invalid(_))
    ));
}
