//! CLI entry point for the coursework toolkit.
//!
//! Provides subcommands for grading a mark against a total, converting a
//! temperature to all three scales, and viewing the staff table sorted by
//! name or salary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use coursework_core::{
    grading::evaluate_grade,
    output::{
        format_outcome, format_sort_buttons, format_temperature_input, render_table, to_json,
        write_staff_csv,
    },
    staff::{
        SortField, SortState, StaffRecord, dataset::default_staff, loader::load_staff_csv,
        sort_records,
    },
    temperature::{Conversion, EMPTY_STATE_MESSAGE, Scale, TemperatureReading},
};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "coursework")]
#[command(about = "Grade marks, convert temperatures and sort the staff table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a student's mark against the total marks possible
    Grade {
        /// Student's mark, e.g. 18.5
        #[arg(value_name = "MARK", allow_hyphen_values = true)]
        mark: String,

        /// Total marks possible, e.g. 20
        #[arg(value_name = "TOTAL", allow_hyphen_values = true)]
        total: String,

        /// Print the outcome as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Convert a temperature to Celsius, Fahrenheit and Kelvin
    Convert {
        /// Temperature to convert; text without a leading number shows the empty state
        #[arg(value_name = "VALUE", allow_hyphen_values = true, default_value = "")]
        value: String,

        /// Scale the value is given in (celsius, fahrenheit, kelvin)
        #[arg(short, long, default_value = "celsius")]
        from: Scale,

        /// Print the conversion as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the staff table, applying each sort click in order
    Staff {
        /// Column to sort by (name or salary); repeat to toggle direction
        #[arg(short, long = "by", value_name = "FIELD")]
        by: Vec<SortField>,

        /// CSV file to load instead of the built-in table
        #[arg(short, long, env = "STAFF_CSV_PATH")]
        data: Option<String>,

        /// CSV file to write the sorted table to
        #[arg(short, long)]
        export: Option<String>,

        /// Print the sorted table as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct StaffView<'a> {
    sort: SortState,
    buttons: [String; 2],
    records: &'a [StaffRecord],
}

#[derive(Serialize)]
struct ConvertView {
    input: TemperatureReading,
    conversion: Conversion,
}

#[derive(Serialize)]
struct EmptyView {
    message: &'static str,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/coursework.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("coursework.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade { mark, total, json } => {
            let outcome = evaluate_grade(&mark, &total);
            if json {
                println!("{}", to_json(&outcome)?);
            } else {
                println!("{}", format_outcome(&outcome));
            }
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Convert { value, from, json } => {
            if json {
                let out = match TemperatureReading::parse(&value, from) {
                    Some(reading) => to_json(&ConvertView {
                        input: reading,
                        conversion: reading.convert(),
                    })?,
                    None => to_json(&EmptyView {
                        message: EMPTY_STATE_MESSAGE,
                    })?,
                };
                println!("{out}");
            } else {
                println!("{}", format_temperature_input(&value, from));
            }
        }
        Commands::Staff {
            by,
            data,
            export,
            json,
        } => {
            let dataset = match data {
                Some(path) => load_staff_csv(&path)?,
                None => default_staff(),
            };

            let mut state = SortState::default();
            let mut view = dataset.clone();
            for field in by {
                (view, state) = sort_records(&dataset, field, state);
                info!(%field, direction = ?state.direction, "Sort applied");
            }

            if let Some(path) = export {
                write_staff_csv(&path, &view)?;
                info!(path = %path, rows = view.len(), "Staff table exported");
            }

            if json {
                let out = StaffView {
                    sort: state,
                    buttons: [
                        state.button_label(SortField::Name),
                        state.button_label(SortField::Salary),
                    ],
                    records: &view,
                };
                println!("{}", to_json(&out)?);
            } else {
                println!("{}", format_sort_buttons(&state));
                println!("{}", render_table(&view));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
