//! The HTML prediction form.
//!
//! GET / renders the form with its defaults. POST /predict re-renders it with
//! the submitted answers kept, the columns about to be sent, and either the
//! prediction or an error banner.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use creditform_core::service::prediction::{Evaluation, Outcome};
use creditform_observe::attrs::Surface;
use creditform_types::applicant::{
    AGE_RANGE, CREDIT_AMOUNT_RANGE, CREDIT_AMOUNT_STEP, CheckingLevel, DURATION_RANGE, FormAnswers,
    Housing, JOB_CODES, MONTHLY_PAYMENT_RANGE, Purpose, SavingLevel, Sex,
};

use crate::state::AppState;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; color: #222; }
label { display: block; margin-top: .75rem; font-weight: 600; }
input, select { width: 100%; padding: .3rem; }
button { margin-top: 1rem; padding: .5rem 1.5rem; }
pre { background: #f4f4f4; padding: .75rem; overflow-x: auto; }
.error { background: #fde8e8; border: 1px solid #e0a0a0; padding: .75rem; }
.result { background: #e8f5e9; border: 1px solid #a5d6a7; padding: .75rem; }
"#;

/// What to show under the form.
enum Panel<'a> {
    Empty,
    Evaluated(&'a Evaluation),
    Rejected(&'a str),
}

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(page(&state, &FormAnswers::default(), Panel::Empty).into_string())
}

pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<FormAnswers>, FormRejection>,
) -> Response {
    let request_id = uuid::Uuid::now_v7().to_string();

    let answers = match form {
        Ok(Form(answers)) => answers,
        Err(rejection) => {
            let detail = rejection.body_text();
            tracing::warn!(%detail, "unreadable form submission");
            return rejected(&state, &FormAnswers::default(), &detail);
        }
    };

    if let Err(e) = answers.validate() {
        return rejected(&state, &answers, &e.to_string());
    }

    match state.evaluate(&answers, Surface::Form, &request_id) {
        Ok(evaluation) => {
            let status = match evaluation.outcome {
                Outcome::Predicted(_) => StatusCode::OK,
                Outcome::Failed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            };
            let markup = page(&state, &answers, Panel::Evaluated(&evaluation));
            (status, Html(markup.into_string())).into_response()
        }
        Err(e) => rejected(&state, &answers, &e.to_string()),
    }
}

fn rejected(state: &AppState, answers: &FormAnswers, detail: &str) -> Response {
    let markup = page(state, answers, Panel::Rejected(detail));
    (StatusCode::BAD_REQUEST, Html(markup.into_string())).into_response()
}

fn page(state: &AppState, answers: &FormAnswers, panel: Panel<'_>) -> Markup {
    let service = &state.prediction_service;
    let schema = service.schema();
    let precision = state.config.precision();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Credit Risk Prediction" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Credit Risk Prediction" }
                p { "Enter the applicant's details and press Predict." }

                section id="schema" {
                    h2 { "Model input schema" }
                    p { (schema.summary()) }
                    @let expected = schema.expected_columns();
                    @if !expected.is_empty() {
                        pre { (serde_json::to_string(expected).unwrap_or_default()) }
                    }
                }

                form method="post" action="/predict" {
                    (number_field("age", "Age", answers.age, AGE_RANGE.start(), AGE_RANGE.end(), 1))
                    (number_field(
                        "credit_amount",
                        "Credit amount",
                        answers.credit_amount,
                        CREDIT_AMOUNT_RANGE.start(),
                        CREDIT_AMOUNT_RANGE.end(),
                        CREDIT_AMOUNT_STEP,
                    ))
                    (number_field(
                        "duration",
                        "Duration (months)",
                        answers.duration,
                        DURATION_RANGE.start(),
                        DURATION_RANGE.end(),
                        1,
                    ))
                    (select_field("sex", "Sex", &Sex::ALL.map(|s| s.as_str()), &answers.sex))
                    (select_field("job", "Job (skill level)", &JOB_CODES, &answers.job))
                    (select_field("housing", "Housing", &Housing::ALL.map(|h| h.as_str()), &answers.housing))
                    (select_field(
                        "saving",
                        "Saving accounts",
                        &SavingLevel::ALL.map(|s| s.as_str()),
                        &answers.saving,
                    ))
                    (select_field(
                        "checking",
                        "Checking account",
                        &CheckingLevel::ALL.map(|c| c.as_str()),
                        &answers.checking,
                    ))
                    (select_field("purpose", "Purpose", &Purpose::ALL.map(|p| p.as_str()), &answers.purpose))
                    (number_field(
                        "monthly_payment",
                        "Monthly payment",
                        answers.monthly_payment,
                        MONTHLY_PAYMENT_RANGE.start(),
                        MONTHLY_PAYMENT_RANGE.end(),
                        1,
                    ))
                    button type="submit" { "Predict" }
                }

                @match panel {
                    Panel::Empty => {}
                    Panel::Rejected(detail) => {
                        div.error role="alert" {
                            strong { "Invalid input" }
                            pre { (detail) }
                        }
                    }
                    Panel::Evaluated(evaluation) => {
                        section id="result" {
                            h2 { "Input columns" }
                            pre { (serde_json::to_string_pretty(&evaluation.submitted).unwrap_or_default()) }
                            @match &evaluation.outcome {
                                Outcome::Predicted(prediction) => {
                                    div.result {
                                        p { "Predicted class: " strong { (prediction.label) } }
                                        @if let Some(probability) = prediction.probability_text(precision) {
                                            p { "Probability of positive class: " strong { (probability) } }
                                        }
                                    }
                                }
                                Outcome::Failed { error } => {
                                    div.error role="alert" {
                                        strong { "Prediction failed" }
                                        pre { (error.as_str()) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn number_field<T: std::fmt::Display>(
    name: &str,
    label: &str,
    value: T,
    min: &T,
    max: &T,
    step: T,
) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="number" id=(name) name=(name) value=(value.to_string()) min=(min.to_string())
            max=(max.to_string()) step=(step.to_string()) required;
    }
}

fn select_field(name: &str, label: &str, options: &[&str], selected: &str) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) {
            @for option in options.iter().copied() {
                option value=(option) selected[option == selected] { (option) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use creditform_types::prediction::{Prediction, SubmittedColumns};

    #[test]
    fn form_lists_every_option_and_keeps_selection() {
        let state = test_state(true);
        let answers = FormAnswers {
            purpose: "radio/TV".to_string(),
            ..FormAnswers::default()
        };
        let html = page(&state, &answers, Panel::Empty).into_string();
        assert!(html.contains(r#"<option value="vacation/others">"#));
        assert!(html.contains(r#"<option value="radio/TV" selected>"#));
        assert!(html.contains(r#"name="monthly_payment""#));
        assert!(html.contains("Model expects 18 columns"));
    }

    #[test]
    fn result_panel_shows_label_and_probability() {
        let state = test_state(true);
        let evaluation = Evaluation {
            submitted: SubmittedColumns::new(vec!["Age".to_string()]),
            row: Default::default(),
            outcome: Outcome::Predicted(Prediction {
                label: "good".to_string(),
                probability: Some(0.73456),
            }),
        };
        let html = page(&state, &FormAnswers::default(), Panel::Evaluated(&evaluation)).into_string();
        assert!(html.contains("&quot;n_cols&quot;: 1"));
        assert!(html.contains("Predicted class: <strong>good</strong>"));
        assert!(html.contains("Probability of positive class: <strong>0.735</strong>"));
    }

    #[test]
    fn failed_inference_shows_banner_and_no_prediction() {
        let state = test_state(true);
        let evaluation = Evaluation {
            submitted: SubmittedColumns::new(vec!["Age".to_string()]),
            row: Default::default(),
            outcome: Outcome::Failed {
                error: "stage 'clf' expects 18 features, got 1".to_string(),
            },
        };
        let html = page(&state, &FormAnswers::default(), Panel::Evaluated(&evaluation)).into_string();
        assert!(html.contains("Prediction failed"));
        assert!(html.contains("expects 18 features, got 1"));
        assert!(!html.contains("Predicted class"));
    }
}
