//! Feature row builder.
//!
//! Maps one set of form answers to the flat row a trained model consumes.
//! Pure functions: no state, no I/O, identical inputs give identical rows.
//!
//! Encoded layout:
//! - `Age`, `Job` (cast to integer), `Credit amount`, `Monthly payment` pass through
//! - `Saving accounts` goes through the ordinal table (little=0 .. Unknown=4)
//! - sex, housing, checking account and purpose become `<Category>_<level>`
//!   indicators, with one dropped level per category
//! - the result is re-keyed to the expected columns, or to the fallback list
//!   when none are known
//!
//! Raw layout: the plain form values, categorical text included, submitted
//! without reconciliation.

use creditform_types::applicant::{CheckingLevel, FormAnswers, Housing, Purpose, SavingLevel, Sex};
use creditform_types::error::FeatureError;
use creditform_types::feature::{FeatureRow, FeatureValue, RowLayout};

use super::columns::{self, FALLBACK_COLUMNS};

/// Build the row for `layout`.
///
/// `expected` is ignored by the raw layout.
pub fn build_row(
    layout: RowLayout,
    answers: &FormAnswers,
    expected: &[String],
) -> Result<FeatureRow, FeatureError> {
    match layout {
        RowLayout::Encoded => build_feature_row(answers, expected),
        RowLayout::Raw => Ok(build_raw_row(answers)),
    }
}

/// Build the encoded row and reconcile it against `expected`.
///
/// With a non-empty `expected`, the row holds exactly those columns in that
/// order: derived columns not listed are discarded, listed columns not derived
/// are 0. With an empty `expected` the fallback list is used the same way.
pub fn build_feature_row(
    answers: &FormAnswers,
    expected: &[String],
) -> Result<FeatureRow, FeatureError> {
    let derived = derive_encoded(answers)?;

    let row = if expected.is_empty() {
        derived.reconcile(&FALLBACK_COLUMNS)
    } else {
        derived.reconcile(expected)
    };

    tracing::debug!(
        derived = derived.len(),
        submitted = row.len(),
        "built feature row"
    );
    Ok(row)
}

/// Derive every encoded column from the answers, before reconciliation.
pub fn derive_encoded(answers: &FormAnswers) -> Result<FeatureRow, FeatureError> {
    let saving: SavingLevel = answers
        .saving
        .parse()
        .map_err(|_| FeatureError::UnknownSavingLevel(answers.saving.clone()))?;
    let job: i64 = answers
        .job
        .trim()
        .parse()
        .map_err(|_| FeatureError::InvalidJob(answers.job.clone()))?;

    let mut row = FeatureRow::new();
    row.insert(columns::AGE, answers.age);
    row.insert(columns::JOB, job);
    row.insert(columns::SAVING_ACCOUNTS, saving.code());
    row.insert(
        columns::CREDIT_AMOUNT,
        FeatureValue::from_number(answers.credit_amount),
    );
    row.insert(columns::MONTHLY_PAYMENT, answers.monthly_payment);

    one_hot(
        &mut row,
        columns::SEX,
        Sex::ALL
            .iter()
            .filter(|level| **level != columns::DROPPED_SEX)
            .map(|level| level.as_str()),
        &answers.sex,
    );
    one_hot(
        &mut row,
        columns::HOUSING,
        Housing::ALL
            .iter()
            .filter(|level| **level != columns::DROPPED_HOUSING)
            .map(|level| level.as_str()),
        &answers.housing,
    );
    one_hot(
        &mut row,
        columns::CHECKING_ACCOUNT,
        CheckingLevel::ALL
            .iter()
            .filter(|level| **level != columns::DROPPED_CHECKING)
            .map(|level| level.as_str()),
        &answers.checking,
    );
    one_hot(
        &mut row,
        columns::PURPOSE,
        Purpose::ALL
            .iter()
            .filter(|level| **level != columns::DROPPED_PURPOSE)
            .map(|level| level.as_str()),
        &answers.purpose,
    );

    Ok(row)
}

/// The plain form row: numbers as numbers, selections as their text.
pub fn build_raw_row(answers: &FormAnswers) -> FeatureRow {
    let mut row = FeatureRow::new();
    row.insert(columns::AGE, answers.age);
    row.insert(
        columns::CREDIT_AMOUNT,
        FeatureValue::from_number(answers.credit_amount),
    );
    row.insert(columns::DURATION, answers.duration);
    row.insert(columns::SEX, FeatureValue::Text(answers.sex.clone()));
    row.insert(columns::JOB, FeatureValue::Text(answers.job.clone()));
    row.insert(columns::HOUSING, FeatureValue::Text(answers.housing.clone()));
    row
}

/// One indicator per level; a selection matching none of them (the dropped
/// level, or anything unrecognised) leaves them all at 0.
fn one_hot<'a>(
    row: &mut FeatureRow,
    category: &str,
    levels: impl IntoIterator<Item = &'a str>,
    selection: &str,
) {
    for level in levels {
        row.insert(columns::indicator(category, level), level == selection);
    }
}
