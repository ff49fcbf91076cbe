//! Tests for label encoders.

use crate::encoder::{EncoderDomain, Encoders, LabelEncoder};
use crate::error::JobRiskError;

fn jobs() -> LabelEncoder {
    LabelEncoder::new(
        EncoderDomain::JobTitle,
        ["Accountant", "Data Scientist", "Nurse", "Truck Driver"],
    )
    .unwrap()
}

fn education() -> LabelEncoder {
    LabelEncoder::new(
        EncoderDomain::EducationLevel,
        ["Bachelor's", "High School", "Master's", "PhD"],
    )
    .unwrap()
}

#[test]
fn test_codes_follow_declared_order() {
    let enc = jobs();
    for (position, label) in enc.labels().iter().enumerate() {
        assert_eq!(enc.encode(label).unwrap(), position as u32);
        assert_eq!(enc.decode(position as u32), Some(label.as_str()));
    }
}

#[test]
fn test_distinct_labels_get_distinct_codes() {
    let enc = education();
    let mut codes: Vec<u32> = enc.labels().iter().map(|l| enc.encode(l).unwrap()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), enc.len());
}

#[test]
fn test_unknown_label_fails() {
    let err = jobs().encode("Astronaut").unwrap_err();
    assert_eq!(
        err,
        JobRiskError::UnknownLabel {
            domain: EncoderDomain::JobTitle,
            label: "Astronaut".to_string(),
        }
    );
    assert!(err.is_request_error());
    assert_eq!(err.to_string(), "Unknown job title label: \"Astronaut\"");
}

#[test]
fn test_labels_are_case_sensitive() {
    assert!(jobs().encode("data scientist").is_err());
}

#[test]
fn test_rejects_empty_and_duplicates() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        LabelEncoder::new(EncoderDomain::JobTitle, empty),
        Err(JobRiskError::InvalidArtifact(_))
    ));
    assert!(matches!(
        LabelEncoder::new(EncoderDomain::JobTitle, ["Nurse", "Nurse"]),
        Err(JobRiskError::InvalidArtifact(_))
    ));
}

#[test]
fn test_fit_sorts_and_dedups() {
    let enc = LabelEncoder::fit(
        EncoderDomain::EducationLevel,
        ["PhD", "Bachelor's", "PhD", "High School"],
    )
    .unwrap();
    assert_eq!(enc.labels(), ["Bachelor's", "High School", "PhD"]);
    assert_eq!(enc.encode("PhD").unwrap(), 2);
}

#[test]
fn test_default_index() {
    let enc = jobs();
    assert_eq!(enc.default_index("Data Scientist"), 1);
    assert_eq!(enc.default_index("Astronaut"), 0);
}

#[test]
fn test_encoders_check_domains() {
    assert!(Encoders::new(jobs(), education()).is_ok());
    assert!(Encoders::new(education(), jobs()).is_err());

    let encoders = Encoders::new(jobs(), education()).unwrap();
    assert_eq!(
        encoders.encode(EncoderDomain::EducationLevel, "Master's").unwrap(),
        2
    );
    assert_eq!(encoders.labels(EncoderDomain::JobTitle).len(), 4);
}
