//! Doctor framework
//!
//! The validation data model, the `Workflow` and `DoctorValidator` traits,
//! and the `Doctor` aggregator that runs registered validators and collects
//! their results into a single report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Outcome category of a single validator run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    /// The toolchain was not found at all
    Missing,
    /// The toolchain was found but is not functional
    Partial,
    /// The toolchain was found and is structurally valid
    Installed,
}

/// A single diagnostic line produced by a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub text: String,
    pub is_error: bool,
}

impl ValidationMessage {
    /// Informational note
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Blocking problem
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Result of one validator invocation.
///
/// `status_info` carries a short label shown alongside the headline, e.g.
/// a resolved SDK version. It is absent when no version could be resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub kind: ValidationType,
    pub messages: Vec<ValidationMessage>,
    pub status_info: Option<String>,
}

impl ValidationResult {
    pub fn new(kind: ValidationType, messages: Vec<ValidationMessage>) -> Self {
        Self {
            kind,
            messages,
            status_info: None,
        }
    }

    pub fn with_status_info(
        kind: ValidationType,
        messages: Vec<ValidationMessage>,
        status_info: Option<String>,
    ) -> Self {
        Self {
            kind,
            messages,
            status_info,
        }
    }

    /// True when any message is flagged as an error
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.is_error)
    }
}

/// Whether a toolchain workflow is relevant on the current host
pub trait Workflow {
    fn applies_to_host_platform(&self) -> bool;
}

/// A single environment check the doctor can run
pub trait DoctorValidator {
    /// Name identifying this validator in a report
    fn title(&self) -> &str;

    /// Run one validation pass.
    ///
    /// Never fails; problems are reported as error-flagged messages in the
    /// returned result.
    fn validate(&self) -> ValidationResult;
}

/// One validator's contribution to a report
#[derive(Debug, Clone, Serialize)]
pub struct DoctorEntry {
    pub title: String,
    pub result: ValidationResult,
}

/// Aggregated outcome of a full doctor run
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<DoctorEntry>,
}

impl DoctorReport {
    /// True when every validator reported a fully working installation
    pub fn all_installed(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.result.kind == ValidationType::Installed)
    }

    /// True when any validator recorded an error message
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.result.has_errors())
    }
}

/// Collects validators and runs them as one diagnostic pass
#[derive(Default)]
pub struct Doctor {
    validators: Vec<Box<dyn DoctorValidator>>,
}

impl Doctor {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Register a validator; validators run in registration order
    pub fn register(&mut self, validator: Box<dyn DoctorValidator>) {
        debug!("Registered validator: {}", validator.title());
        self.validators.push(validator);
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Run every registered validator and collect the results.
    ///
    /// All validators run even when an early one reports a missing
    /// toolchain; the report preserves registration order.
    pub fn diagnose(&self) -> DoctorReport {
        info!("Running {} validator(s)...", self.validators.len());

        let entries = self
            .validators
            .iter()
            .map(|validator| {
                let result = validator.validate();
                debug!("{}: {:?}", validator.title(), result.kind);
                DoctorEntry {
                    title: validator.title().to_string(),
                    result,
                }
            })
            .collect();

        DoctorReport {
            generated_at: Utc::now(),
            entries,
        }
    }
}
