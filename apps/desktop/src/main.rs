use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{ClientSettings, FormController, HttpPredictionClient, SubmitOutcome};
use shared::domain::{
    CertificateCategory, Credits, GradeBand, ATTENDANCE_CODES, CGPA_CODES, INTERNSHIP_CODES,
};
use tracing_subscriber::EnvFilter;

mod terminal_view;

use terminal_view::TerminalView;

#[derive(Parser, Debug)]
#[command(about = "Submit a student performance form to the prediction service")]
struct Args {
    /// Base URL of the prediction service (overrides PREDICT_SERVER_URL).
    #[arg(long)]
    server_url: Option<String>,
    /// Request timeout in seconds (overrides PREDICT_REQUEST_TIMEOUT_SECS).
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Course row as GRADE:CREDITS, e.g. 71-80:3 or A:3. Repeatable.
    #[arg(long = "course", value_parser = parse_course)]
    courses: Vec<(GradeBand, Credits)>,
    /// Certificate weight or label, e.g. 2 or Coursera. Repeatable, at most 5.
    #[arg(long = "certificate", value_parser = parse_certificate)]
    certificates: Vec<CertificateCategory>,
    #[arg(long)]
    attendance: Option<String>,
    #[arg(long)]
    cgpa: Option<String>,
    #[arg(long, default_value = "0")]
    internship: String,
    /// Print panels as HTML fragments instead of plain text.
    #[arg(long)]
    html: bool,
    /// List the accepted option values and exit.
    #[arg(long)]
    list_options: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    if args.list_options {
        print!("{}", option_listing());
        return Ok(ExitCode::SUCCESS);
    }

    let mut settings = ClientSettings::load().context("failed to load client settings")?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        settings.request_timeout_secs = timeout_secs;
    }
    let client = HttpPredictionClient::from_settings(&settings)?;

    let mut view = TerminalView::new(io::stdout(), io::stderr(), args.html);
    view.attendance = args.attendance;
    view.cgpa = args.cgpa;
    view.internship = Some(args.internship);

    let mut controller = FormController::new(view, client);
    for (grade, credits) in args.courses {
        let id = controller.add_course();
        controller.view_mut().select_course(id, grade, credits);
    }
    for category in args.certificates {
        if let Ok(id) = controller.add_certificate() {
            controller.view_mut().select_certificate(id, category);
        }
    }

    Ok(match controller.submit().await {
        SubmitOutcome::Rendered(_) => ExitCode::SUCCESS,
        SubmitOutcome::Failed(_) | SubmitOutcome::Aborted(_) => ExitCode::FAILURE,
    })
}

fn parse_course(raw: &str) -> Result<(GradeBand, Credits), String> {
    let (grade, credits) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected GRADE:CREDITS, got '{raw}'"))?;
    let grade = grade.parse::<GradeBand>().map_err(|e| e.to_string())?;
    let credits = credits.parse::<Credits>().map_err(|e| e.to_string())?;
    Ok((grade, credits))
}

fn parse_certificate(raw: &str) -> Result<CertificateCategory, String> {
    raw.parse().map_err(|e: shared::error::DomainError| e.to_string())
}

fn option_listing() -> String {
    let mut out = String::from("grades:\n");
    for band in GradeBand::ALL {
        out.push_str(&format!("  {:<7} {}\n", band.range(), band.label()));
    }
    out.push_str("credits: 0-5\ncertificates:\n");
    for category in CertificateCategory::ALL {
        out.push_str(&format!("  {:<4} {}\n", category.weight(), category.label()));
    }
    out.push_str(&format!("attendance: {}\n", ATTENDANCE_CODES.join(" ")));
    out.push_str(&format!("cgpa: {}\n", CGPA_CODES.join(" ")));
    out.push_str(&format!("internship: {}\n", INTERNSHIP_CODES.join(" ")));
    out
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
