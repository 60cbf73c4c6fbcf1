//! CLI command definitions for the `crform` binary.

pub mod predict;
pub mod schema;
pub mod status;

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use creditform_types::applicant::{
    CREDIT_AMOUNT_RANGE, CheckingLevel, FormAnswers, Housing, JOB_CODES, Purpose, SavingLevel, Sex,
};

/// Score loan applicants with a trained credit-risk classifier.
#[derive(Parser)]
#[command(name = "crform", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Model artifact to load (overrides CREDITFORM_MODEL and config.toml).
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the prediction form and JSON API.
    Serve {
        /// Port to listen on (default from config.toml, else 8501).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config.toml, else 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },

    /// Score one applicant from the command line.
    Predict(PredictArgs),

    /// Show which input columns the model declares.
    Schema,

    /// Show version, resolved paths, and the loaded model.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Form answers as flags. Defaults match the form's initial values.
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(18..=100))]
    pub age: i64,

    #[arg(long, default_value_t = 2000.0, value_parser = parse_credit_amount)]
    pub credit_amount: f64,

    /// Loan duration in months.
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(i64).range(4..=72))]
    pub duration: i64,

    #[arg(long, default_value = "male", value_parser = PossibleValuesParser::new(Sex::ALL.map(|s| s.as_str())))]
    pub sex: String,

    /// Job skill code.
    #[arg(long, default_value = "0", value_parser = PossibleValuesParser::new(JOB_CODES))]
    pub job: String,

    #[arg(long, default_value = "own", value_parser = PossibleValuesParser::new(Housing::ALL.map(|h| h.as_str())))]
    pub housing: String,

    /// Saving accounts level.
    #[arg(long, default_value = "little", value_parser = PossibleValuesParser::new(SavingLevel::ALL.map(|s| s.as_str())))]
    pub saving: String,

    /// Checking account level.
    #[arg(long, default_value = "Unknown", value_parser = PossibleValuesParser::new(CheckingLevel::ALL.map(|c| c.as_str())))]
    pub checking: String,

    #[arg(long, default_value = "business", value_parser = PossibleValuesParser::new(Purpose::ALL.map(|p| p.as_str())))]
    pub purpose: String,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=2000))]
    pub monthly_payment: i64,
}

impl From<PredictArgs> for FormAnswers {
    fn from(args: PredictArgs) -> Self {
        Self {
            age: args.age,
            credit_amount: args.credit_amount,
            duration: args.duration,
            sex: args.sex,
            job: args.job,
            housing: args.housing,
            saving: args.saving,
            checking: args.checking,
            purpose: args.purpose,
            monthly_payment: args.monthly_payment,
        }
    }
}

fn parse_credit_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if CREDIT_AMOUNT_RANGE.contains(&amount) {
        Ok(amount)
    } else {
        Err(format!(
            "credit amount must be between {} and {}",
            CREDIT_AMOUNT_RANGE.start(),
            CREDIT_AMOUNT_RANGE.end()
        ))
    }
}
