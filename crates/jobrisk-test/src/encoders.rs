//! Sample encoders.

use jobrisk_core::{EncoderDomain, Encoders, LabelEncoder};

/// Job titles in code order.
pub const JOB_TITLES: [&str; 5] = [
    "Accountant",
    "Data Scientist",
    "Graphic Designer",
    "Nurse",
    "Truck Driver",
];

/// Education levels in code order.
pub const EDUCATION_LEVELS: [&str; 4] = ["Bachelor's", "High School", "Master's", "PhD"];

pub fn job_encoder() -> LabelEncoder {
    LabelEncoder::new(EncoderDomain::JobTitle, JOB_TITLES).expect("valid job titles")
}

pub fn education_encoder() -> LabelEncoder {
    LabelEncoder::new(EncoderDomain::EducationLevel, EDUCATION_LEVELS)
        .expect("valid education levels")
}

/// Both sample encoders.
pub fn sample_encoders() -> Encoders {
    Encoders::new(job_encoder(), education_encoder()).expect("matching domains")
}
