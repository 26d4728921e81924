//! Droid Doctor Core - doctor framework and shared types
//!
//! This crate provides the validation data model, the `DoctorValidator` and
//! `Workflow` traits, the doctor aggregator, report rendering, and the
//! shared configuration and error types.

pub mod config;
pub mod doctor;
pub mod error;
pub mod report;

pub use config::{DoctorConfig, ReportFormat};
pub use doctor::{
    Doctor, DoctorEntry, DoctorReport, DoctorValidator, ValidationMessage, ValidationResult,
    ValidationType, Workflow,
};
pub use error::{DoctorError, Result};

/// Droid Doctor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Droid Doctor";
