//! Historical dataset fixture.

/// Eight rows with the dashboard columns plus one extra column that
/// loaders are expected to ignore.
pub const SAMPLE_CSV: &str = "\
Job_Title,Average_Salary,Years_Experience,Education_Level,AI_Exposure_Index,Automation_Probability_2030,Risk_Category
Data Scientist,120000,6,Master's,0.81,0.22,Low
Truck Driver,48000,12,High School,0.35,0.86,High
Nurse,72000,9,Bachelor's,0.20,0.18,Low
Accountant,65000,4,Bachelor's,0.74,0.64,Medium
Graphic Designer,54000,3,Bachelor's,0.66,0.52,Medium
Data Scientist,135000,10,PhD,0.88,0.14,Low
Truck Driver,51000,20,High School,0.30,0.90,High
Accountant,70000,15,Master's,0.70,0.58,Medium
";

/// Number of data rows in [`SAMPLE_CSV`].
pub const SAMPLE_ROWS: usize = 8;
