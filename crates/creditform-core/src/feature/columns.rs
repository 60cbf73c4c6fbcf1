//! Column names of the encoded feature layout.

use creditform_types::applicant::{CheckingLevel, Housing, Purpose, Sex};

pub const AGE: &str = "Age";
pub const JOB: &str = "Job";
pub const SAVING_ACCOUNTS: &str = "Saving accounts";
pub const CREDIT_AMOUNT: &str = "Credit amount";
pub const MONTHLY_PAYMENT: &str = "Monthly payment";
pub const DURATION: &str = "Duration";

pub const SEX: &str = "Sex";
pub const HOUSING: &str = "Housing";
pub const CHECKING_ACCOUNT: &str = "Checking account";
pub const PURPOSE: &str = "Purpose";

/// Levels that get no indicator column. Selecting one leaves every
/// indicator of its category at 0.
pub const DROPPED_SEX: Sex = Sex::Female;
pub const DROPPED_HOUSING: Housing = Housing::Free;
pub const DROPPED_CHECKING: CheckingLevel = CheckingLevel::Unknown;
pub const DROPPED_PURPOSE: Purpose = Purpose::Business;

/// Columns submitted when the model does not declare its own.
pub const FALLBACK_COLUMNS: [&str; 18] = [
    "Age",
    "Job",
    "Saving accounts",
    "Credit amount",
    "Monthly payment",
    "Sex_male",
    "Housing_own",
    "Housing_rent",
    "Checking account_little",
    "Checking account_moderate",
    "Checking account_rich",
    "Purpose_car",
    "Purpose_domestic appliances",
    "Purpose_education",
    "Purpose_furniture/equipment",
    "Purpose_radio/TV",
    "Purpose_repairs",
    "Purpose_vacation/others",
];

/// Name of the indicator column for `level` of `category`: `<Category>_<level>`.
pub fn indicator(category: &str, level: &str) -> String {
    format!("{category}_{level}")
}

/// Fallback list as owned strings.
pub fn fallback_columns() -> Vec<String> {
    FALLBACK_COLUMNS.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_naming() {
        assert_eq!(indicator(CHECKING_ACCOUNT, "little"), "Checking account_little");
        assert_eq!(indicator(PURPOSE, "radio/TV"), "Purpose_radio/TV");
    }

    #[test]
    fn test_fallback_has_no_dropped_levels() {
        let dropped = [
            indicator(SEX, DROPPED_SEX.as_str()),
            indicator(HOUSING, DROPPED_HOUSING.as_str()),
            indicator(CHECKING_ACCOUNT, DROPPED_CHECKING.as_str()),
            indicator(PURPOSE, DROPPED_PURPOSE.as_str()),
        ];
        for name in &dropped {
            assert!(!FALLBACK_COLUMNS.contains(&name.as_str()), "{name} should be dropped");
        }
    }

    #[test]
    fn test_fallback_columns_are_unique() {
        let mut names = fallback_columns();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FALLBACK_COLUMNS.len());
    }
}
