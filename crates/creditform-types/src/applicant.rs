//! Loan-applicant form answers and the categorical levels each selector offers.
//!
//! `FormAnswers` carries the human-facing values exactly as the form submits
//! them: numbers for the bounded inputs and the selected option text for the
//! drop-downs. Turning those into model columns is the job of the feature
//! row builder in `creditform-core`.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ValidationError;

/// Accepted applicant age in years.
pub const AGE_RANGE: RangeInclusive<i64> = 18..=100;

/// Accepted credit amount.
pub const CREDIT_AMOUNT_RANGE: RangeInclusive<f64> = 100.0..=50_000.0;

/// Accepted loan duration in months.
pub const DURATION_RANGE: RangeInclusive<i64> = 4..=72;

/// Accepted monthly payment.
pub const MONTHLY_PAYMENT_RANGE: RangeInclusive<i64> = 1..=2000;

/// Step used by the credit amount input.
pub const CREDIT_AMOUNT_STEP: f64 = 100.0;

/// Job skill codes offered by the form, as text.
pub const JOB_CODES: [&str; 4] = ["0", "1", "2", "3"];

/// Applicant sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("invalid sex: '{s}'"))
    }
}

/// Housing situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Housing {
    Own,
    Free,
    Rent,
}

impl Housing {
    pub const ALL: [Housing; 3] = [Housing::Own, Housing::Free, Housing::Rent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Housing::Own => "own",
            Housing::Free => "free",
            Housing::Rent => "rent",
        }
    }
}

impl fmt::Display for Housing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Housing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Housing::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("invalid housing: '{s}'"))
    }
}

/// Saving accounts level. Ordered: the position is the ordinal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingLevel {
    #[serde(rename = "little")]
    Little,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "quite rich")]
    QuiteRich,
    #[serde(rename = "rich")]
    Rich,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl SavingLevel {
    pub const ALL: [SavingLevel; 5] = [
        SavingLevel::Little,
        SavingLevel::Moderate,
        SavingLevel::QuiteRich,
        SavingLevel::Rich,
        SavingLevel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SavingLevel::Little => "little",
            SavingLevel::Moderate => "moderate",
            SavingLevel::QuiteRich => "quite rich",
            SavingLevel::Rich => "rich",
            SavingLevel::Unknown => "Unknown",
        }
    }

    /// Ordinal code the model was trained with.
    pub fn code(&self) -> i64 {
        match self {
            SavingLevel::Little => 0,
            SavingLevel::Moderate => 1,
            SavingLevel::QuiteRich => 2,
            SavingLevel::Rich => 3,
            SavingLevel::Unknown => 4,
        }
    }
}

impl fmt::Display for SavingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SavingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SavingLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("invalid saving accounts level: '{s}'"))
    }
}

/// Checking account level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckingLevel {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "little")]
    Little,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "rich")]
    Rich,
}

impl CheckingLevel {
    pub const ALL: [CheckingLevel; 4] = [
        CheckingLevel::Unknown,
        CheckingLevel::Little,
        CheckingLevel::Moderate,
        CheckingLevel::Rich,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckingLevel::Unknown => "Unknown",
            CheckingLevel::Little => "little",
            CheckingLevel::Moderate => "moderate",
            CheckingLevel::Rich => "rich",
        }
    }
}

impl fmt::Display for CheckingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckingLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("invalid checking account level: '{s}'"))
    }
}

/// Loan purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    #[serde(rename = "business")]
    Business,
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "domestic appliances")]
    DomesticAppliances,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "furniture/equipment")]
    FurnitureEquipment,
    #[serde(rename = "radio/TV")]
    RadioTv,
    #[serde(rename = "repairs")]
    Repairs,
    #[serde(rename = "vacation/others")]
    VacationOthers,
}

impl Purpose {
    pub const ALL: [Purpose; 8] = [
        Purpose::Business,
        Purpose::Car,
        Purpose::DomesticAppliances,
        Purpose::Education,
        Purpose::FurnitureEquipment,
        Purpose::RadioTv,
        Purpose::Repairs,
        Purpose::VacationOthers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Business => "business",
            Purpose::Car => "car",
            Purpose::DomesticAppliances => "domestic appliances",
            Purpose::Education => "education",
            Purpose::FurnitureEquipment => "furniture/equipment",
            Purpose::RadioTv => "radio/TV",
            Purpose::Repairs => "repairs",
            Purpose::VacationOthers => "vacation/others",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Purpose::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("invalid purpose: '{s}'"))
    }
}

/// One submission of the applicant form.
///
/// Selector fields hold the option text as submitted. Numeric fields are
/// bounded by the form inputs; [`FormAnswers::validate`] re-checks those
/// bounds for callers that do not go through the rendered form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAnswers {
    pub age: i64,
    #[serde(alias = "amount")]
    pub credit_amount: f64,
    /// Collected by the form; only the raw layout submits it.
    pub duration: i64,
    pub sex: String,
    pub job: String,
    pub housing: String,
    pub saving: String,
    pub checking: String,
    pub purpose: String,
    pub monthly_payment: i64,
}

impl Default for FormAnswers {
    /// The values the form shows before the user touches anything.
    fn default() -> Self {
        Self {
            age: 30,
            credit_amount: 2000.0,
            duration: 24,
            sex: Sex::Male.to_string(),
            job: JOB_CODES[0].to_string(),
            housing: Housing::Own.to_string(),
            saving: SavingLevel::Little.to_string(),
            checking: CheckingLevel::Unknown.to_string(),
            purpose: Purpose::Business.to_string(),
            monthly_payment: *MONTHLY_PAYMENT_RANGE.start(),
        }
    }
}

impl FormAnswers {
    /// Check every field against the bounds and options the form offers.
    ///
    /// Collects all violations instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if !AGE_RANGE.contains(&self.age) {
            violations.push(out_of_range("age", self.age, &AGE_RANGE));
        }
        if !CREDIT_AMOUNT_RANGE.contains(&self.credit_amount) {
            violations.push(out_of_range(
                "credit_amount",
                self.credit_amount,
                &CREDIT_AMOUNT_RANGE,
            ));
        }
        if !DURATION_RANGE.contains(&self.duration) {
            violations.push(out_of_range("duration", self.duration, &DURATION_RANGE));
        }
        if !MONTHLY_PAYMENT_RANGE.contains(&self.monthly_payment) {
            violations.push(out_of_range(
                "monthly_payment",
                self.monthly_payment,
                &MONTHLY_PAYMENT_RANGE,
            ));
        }

        if !JOB_CODES.contains(&self.job.as_str()) {
            violations.push(format!("job must be one of {JOB_CODES:?}, got '{}'", self.job));
        }
        if let Err(e) = self.sex.parse::<Sex>() {
            violations.push(e);
        }
        if let Err(e) = self.housing.parse::<Housing>() {
            violations.push(e);
        }
        if let Err(e) = self.saving.parse::<SavingLevel>() {
            violations.push(e);
        }
        if let Err(e) = self.checking.parse::<CheckingLevel>() {
            violations.push(e);
        }
        if let Err(e) = self.purpose.parse::<Purpose>() {
            violations.push(e);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(violations))
        }
    }
}

fn out_of_range<T: fmt::Display>(field: &str, value: T, range: &RangeInclusive<T>) -> String {
    format!(
        "{field} must be between {} and {}, got {value}",
        range.start(),
        range.end()
    )
}
