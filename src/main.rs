//! Droid Doctor - Android development environment diagnostics
//!
//! Main entry point: initializes logging, loads configuration, probes the
//! local Android SDK, and runs the doctor over the registered validators.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use droid_doctor_android_toolchain::{AndroidValidator, AndroidWorkflow, LocalAndroidSdk};
use droid_doctor_core::{report, Doctor, DoctorConfig, ReportFormat, Workflow};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Droid Doctor";

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("{} v{} starting...", APP_NAME, VERSION);

    let config_path = DoctorConfig::default_path();
    let config = DoctorConfig::load_or_create(&config_path).await?;

    info!("Inspecting Android development environment...");
    let sdk = LocalAndroidSdk::locate(config.sdk_path.as_deref()).await;

    let mut doctor = Doctor::new();
    let workflow = AndroidWorkflow;
    if workflow.applies_to_host_platform() {
        doctor.register(Box::new(AndroidValidator::new(sdk)));
    } else {
        debug!("Android workflow does not apply to this host, skipping");
    }

    let diagnosis = doctor.diagnose();

    match config.format {
        ReportFormat::Text => print!("{}", report::render_text(&diagnosis)),
        ReportFormat::Json => println!("{}", report::render_json(&diagnosis)?),
    }

    if diagnosis.has_errors() {
        info!("Doctor found problems with the development environment");
        std::process::exit(1);
    }

    Ok(())
}
