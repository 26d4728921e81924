//! Droid Doctor - Android development environment diagnostics
//!
//! Inspects the local machine for a working Android toolchain and reports
//! structured, human-readable results.
//!
//! ## Architecture
//!
//! Droid Doctor is organized into specialized crates:
//!
//! - `droid-doctor-core`: doctor framework, report rendering, configuration
//! - `droid-doctor-android-toolchain`: Android SDK inspection and validators

// Re-export main components for library usage
pub use droid_doctor_android_toolchain as android_toolchain;
pub use droid_doctor_core as core;

/// Prelude module for convenient imports
pub mod prelude {
    pub use droid_doctor_android_toolchain::{AndroidSdk, AndroidValidator, LocalAndroidSdk};
    pub use droid_doctor_core::{Doctor, DoctorConfig, DoctorValidator, ValidationResult};
}
