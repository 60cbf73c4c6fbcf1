//! `crform schema` - the diagnostic readout of the model's declared columns.

use anyhow::Result;
use console::style;

use creditform_types::schema::SchemaReport;

use crate::http::handlers::schema::SchemaView;
use crate::state::AppState;

pub fn schema(state: &AppState, json: bool) -> Result<()> {
    let view = SchemaView::from_state(state);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!();
    let marker = match &view.report {
        SchemaReport::Declared { .. } => style("✓").green(),
        SchemaReport::NotDeclared => style("○").yellow(),
        SchemaReport::Failed { .. } => style("✗").red(),
    };
    println!("  {marker} {}", view.summary);
    println!();

    let heading = if view.report.expected_columns().is_empty() {
        "── Fallback columns ──"
    } else {
        "── Declared columns ──"
    };
    println!("  {}", style(heading).dim());
    for (i, column) in view.effective_columns.iter().enumerate() {
        println!("  {:>3}  {column}", style(i).dim());
    }
    println!();

    Ok(())
}
