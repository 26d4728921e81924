//! Android workflow descriptor

use droid_doctor_core::Workflow;

/// Marker for the Android toolchain workflow.
///
/// Applicability is a constant for now: Android development is supported
/// from every desktop host this tool runs on, so no host-OS branching
/// happens here.
#[derive(Debug, Default, Clone, Copy)]
pub struct AndroidWorkflow;

impl Workflow for AndroidWorkflow {
    fn applies_to_host_platform(&self) -> bool {
        true
    }
}
