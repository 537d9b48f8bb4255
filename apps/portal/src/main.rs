use std::sync::Arc;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::{FormField, SubmitOutcome};
use clinic_portal::{render, Page, PortalSession};
use doctor_cell::{DoctorDirectory, DoctorError};
use shared_config::{log_filter_from_env, AppConfig};
use shared_models::AppError;
use shared_utils::SystemClock;

struct Args {
    path: String,
    inputs: Vec<(FormField, String)>,
    json: bool,
}

/// `clinic-portal [PATH] [field=value ...] [--json]`
///
/// Renders the page at PATH (default `/`). On a booking page, any `field=value`
/// pairs are typed into the form and submitted.
#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_env()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting clinic portal");

    // Load configuration
    let config = AppConfig::from_env();
    debug!(?config, "Configuration loaded");

    let args = parse_args(std::env::args().skip(1))?;
    let json = args.json;

    let directory = load_directory(&config).map_err(|e| report(e.into(), json))?;
    info!("Loaded {} doctors", directory.len());

    let mut session = PortalSession::new(&config, directory, Arc::new(SystemClock));
    let mut page = session.open(&args.path).map_err(|e| report(e, json))?;

    if !args.inputs.is_empty() {
        if !matches!(page, Page::Booking(_)) {
            return Err(anyhow!("{} has no booking form", args.path));
        }
        for (field, value) in args.inputs {
            session.input(field, value);
            session.blur(field);
        }

        match session.submit().await.map_err(|e| report(e, json))? {
            SubmitOutcome::Booked(confirmation) => {
                println!("Booked: reference {}", confirmation.reference)
            }
            SubmitOutcome::Rejected(errors) => println!("Not booked: {}", errors),
            SubmitOutcome::Failed(reason) => println!("Booking failed: {}", reason),
            SubmitOutcome::InFlight => println!("Booking already in progress"),
        }
        page = session.page();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", render(&page));
    }

    Ok(())
}

fn load_directory(config: &AppConfig) -> Result<DoctorDirectory, DoctorError> {
    match &config.doctor_fixture_path {
        Some(path) => {
            info!("Loading doctors from {}", path.display());
            DoctorDirectory::from_path(path)
        }
        None => DoctorDirectory::from_fixture(),
    }
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        path: "/".to_string(),
        inputs: Vec::new(),
        json: false,
    };
    let mut path_seen = false;

    for arg in raw {
        let pair = match arg.split_once('=') {
            Some((key, value)) if !arg.starts_with('/') => Some((key.parse::<FormField>()?, value.to_string())),
            _ => None,
        };

        if arg == "--json" {
            args.json = true;
        } else if let Some(input) = pair {
            args.inputs.push(input);
        } else if !path_seen {
            args.path = arg;
            path_seen = true;
        } else {
            warn!("Ignoring extra argument {:?}", arg);
        }
    }

    Ok(args)
}

/// In `--json` mode failures are also written to stdout as an error body.
fn report(err: AppError, json: bool) -> anyhow::Error {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(&err.to_body()) {
            println!("{}", body);
        }
    }
    err.into()
}
