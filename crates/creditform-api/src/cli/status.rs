//! `crform status` - version, resolved paths, and the loaded model.

use anyhow::Result;
use console::style;

use crate::state::AppState;

pub fn status(state: &AppState, json: bool) -> Result<()> {
    let service = &state.prediction_service;
    let declared = service.schema().expected_columns().len();

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "model_path": state.model_path.display().to_string(),
            "model": {
                "kind": service.model().kind(),
                "supports_proba": service.model().supports_proba(),
                "declared_columns": declared,
            },
            "layout": service.layout(),
            "probability_precision": state.config.precision(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!("  Creditform v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("  {}", style("── Model ──").dim());
    println!("  Path:     {}", style(state.model_path.display()).cyan());
    println!("  Kind:     {}", style(service.model().kind()).bold());
    println!(
        "  Proba:    {}",
        if service.model().supports_proba() {
            style("yes").green()
        } else {
            style("no").yellow()
        }
    );
    if declared > 0 {
        println!("  Columns:  {} declared", style(declared).bold());
    } else {
        println!(
            "  Columns:  {} (fallback list)",
            style(service.effective_columns().len()).yellow()
        );
    }
    println!();

    println!("  {}", style("── Form ──").dim());
    println!("  Layout:    {}", service.layout());
    println!("  Precision: {} digits", state.config.precision());
    println!("  Listen:    {}:{}", state.config.host, state.config.port);
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!();

    Ok(())
}
