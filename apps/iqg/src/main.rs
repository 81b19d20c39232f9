mod api_client;
mod app;
mod config;
mod errors;
mod export;
mod layout;
mod models;
mod normalize;
mod session;
mod state;
mod upload;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::AnalysisClient;
use crate::app::{App, Notice};
use crate::config::Config;
use crate::export::{CopyTarget, SystemClipboard};
use crate::layout::default_page_config;
use crate::session::SessionEvent;
use crate::state::AppState;
use crate::upload::FileCandidate;

/// Generate tailored interview questions from a resume.
#[derive(Debug, Parser)]
#[command(name = "iqg", version, about)]
struct Cli {
    /// Resume file (.pdf or .docx, at most 10MB).
    #[arg(long, short = 'r')]
    resume: PathBuf,

    /// Job description text for role-specific questions.
    #[arg(long, short = 'j', conflicts_with = "job_description_file")]
    job_description: Option<String>,

    /// Read the job description from a file.
    #[arg(long)]
    job_description_file: Option<PathBuf>,

    /// Copy all questions to the clipboard.
    #[arg(long)]
    copy_all: bool,

    /// Copy one question, e.g. `technical:2`.
    #[arg(long, value_name = "CATEGORY:N")]
    copy_question: Option<String>,

    /// Save the questions as interview-questions.pdf.
    #[arg(long)]
    pdf: bool,

    /// Directory for the PDF export (overrides IQG_OUTPUT_DIR).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the normalized result as JSON instead of the text view.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(dir) = cli.output_dir.clone() {
        config.output_dir = dir;
    }

    // Logs go to stderr; stdout carries the result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting iqg v{}", env!("CARGO_PKG_VERSION"));
    info!("Analysis API: {}", config.api_url);

    let copy_question = cli
        .copy_question
        .as_deref()
        .map(CopyTarget::parse_question)
        .transpose();
    let copy_question = match copy_question {
        Ok(target) => target,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::from(e.exit_code() as u8));
        }
    };

    let job_description = match &cli.job_description_file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description from {}", path.display()))?,
        None => cli.job_description.clone().unwrap_or_default(),
    };

    let api = AnalysisClient::new(config.api_url.clone(), config.request_timeout_secs)
        .context("Failed to build HTTP client")?;
    let state = AppState {
        api: Arc::new(api),
        clipboard: Arc::new(SystemClipboard),
        config,
        page_config: default_page_config(),
    };
    let mut app = App::new(state);

    let candidate = match FileCandidate::from_path(&cli.resume).await {
        Ok(candidate) => candidate,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::from(e.exit_code() as u8));
        }
    };
    app.dispatch(SessionEvent::FileSelected(candidate)).await;
    app.dispatch(SessionEvent::JobDescriptionChanged(job_description))
        .await;
    app.dispatch(SessionEvent::Submit).await;

    if let Some(error) = app.session().error() {
        eprintln!("{error}");
        let code = if app.session().resume().is_none() { 2 } else { 1 };
        return Ok(ExitCode::from(code));
    }

    let Some(result) = app.session().result() else {
        return Ok(ExitCode::FAILURE);
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", view::render_result(result));
    }

    let mut follow_ups = Vec::new();
    if cli.copy_all {
        follow_ups.push(SessionEvent::CopyRequested(CopyTarget::All));
    }
    if let Some(target) = copy_question {
        follow_ups.push(SessionEvent::CopyRequested(target));
    }
    if cli.pdf {
        follow_ups.push(SessionEvent::ExportRequested);
    }

    // Export failures are reported but leave the printed result in place.
    let mut exit = ExitCode::SUCCESS;
    for event in follow_ups {
        match app.dispatch(event).await {
            Some(Notice::Info(msg)) => eprintln!("{msg}"),
            Some(Notice::Error(msg)) => {
                eprintln!("{msg}");
                exit = ExitCode::FAILURE;
            }
            None => {}
        }
    }

    Ok(exit)
}
