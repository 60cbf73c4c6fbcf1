//! `crform predict` - score one applicant without starting the server.

use anyhow::{Result, bail};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use creditform_core::service::prediction::Outcome;
use creditform_observe::attrs::Surface;
use creditform_types::applicant::FormAnswers;

use crate::state::AppState;

pub fn predict(state: &AppState, answers: FormAnswers, json: bool, quiet: bool) -> Result<()> {
    answers.validate()?;
    let request_id = uuid::Uuid::now_v7().to_string();
    let evaluation = state.evaluate(&answers, Surface::Cli, &request_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else if !quiet {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Column").fg(Color::White),
            Cell::new("Value").fg(Color::White),
        ]);
        for (column, value) in evaluation.row.iter() {
            let cell = if value.is_zero() {
                Cell::new(value).fg(Color::DarkGrey)
            } else {
                Cell::new(value).fg(Color::Cyan)
            };
            table.add_row(vec![Cell::new(column), cell]);
        }

        println!();
        println!("{table}");
        println!(
            "  {} columns submitted ({} layout)",
            style(evaluation.submitted.n_cols).bold(),
            state.prediction_service.layout()
        );
        println!();
    }

    match &evaluation.outcome {
        Outcome::Predicted(prediction) => {
            if !json {
                println!(
                    "  Predicted class: {}",
                    style(&prediction.label).green().bold()
                );
                if let Some(p) = prediction.probability_text(state.config.precision()) {
                    println!("  Probability of positive class: {}", style(p).bold());
                }
                println!();
            }
            Ok(())
        }
        Outcome::Failed { error } => bail!("prediction failed: {error}"),
    }
}
