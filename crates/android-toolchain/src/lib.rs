//! Android Toolchain Inspection
//!
//! Determines whether a working Android development toolchain is installed:
//! - SDK root resolution from configuration or environment
//! - latest platform / build-tools version resolution
//! - doctor validators reporting toolchain health

pub mod sdk;
pub mod validator;
pub mod workflow;

pub use sdk::{AndroidSdk, LocalAndroidSdk, SdkVersion};
pub use validator::{AndroidValidator, LicensesAccepted};
pub use workflow::AndroidWorkflow;

/// Environment variable naming the Android SDK root
pub const ANDROID_HOME: &str = "ANDROID_HOME";

/// Fallback environment variable used by newer Android tooling
pub const ANDROID_SDK_ROOT: &str = "ANDROID_SDK_ROOT";
